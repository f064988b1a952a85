use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, types::Json, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        list_field::ListField,
        member::{Member, MemberOrder, MemberRow, NewMemberRequest, UpdateMemberRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxMemberRepo},
};

#[automock]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create_member(&self, req: &NewMemberRequest) -> Result<Member, AppError>;
    async fn get_member_by_id(&self, id: &Uuid) -> Result<Member, AppError>;
    async fn get_all_members(
        &self,
        segment: Option<Uuid>,
        order: MemberOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Member>, AppError>;
    async fn get_members_by_segment(&self, segment_id: &Uuid) -> Result<Vec<Member>, AppError>;
    async fn get_recent_members(&self, limit: u32) -> Result<Vec<Member>, AppError>;
    async fn update_member(&self, id: &Uuid, req: &UpdateMemberRequest) -> Result<Member, AppError>;
    async fn delete_member(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxMemberRepo { pool }
    }
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, order: MemberOrder) {
    match order {
        MemberOrder::Display => builder.push(" ORDER BY display_order ASC, name ASC"),
        MemberOrder::Newest => builder.push(" ORDER BY created_at DESC"),
    };
}

#[async_trait]
impl MemberRepository for SqlxMemberRepo {
    async fn create_member(&self, req: &NewMemberRequest) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (
                name, role, position, email, bio, photo,
                skills, join_date, segment_id, display_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.position)
        .bind(req.email.as_deref().unwrap_or(""))
        .bind(&req.bio)
        .bind(&req.photo)
        .bind(Json(ListField::from(req.skills.clone())))
        .bind(req.join_date)
        .bind(req.segment_id)
        .bind(req.display_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(Member::from(row))
    }

    async fn get_member_by_id(&self, id: &Uuid) -> Result<Member, AppError> {
        let row = sqlx::query_as::<_, MemberRow>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

        Ok(Member::from(row))
    }

    async fn get_all_members(
        &self,
        segment: Option<Uuid>,
        order: MemberOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Member>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM members");

        if let Some(segment_id) = segment {
            builder.push(" WHERE segment_id = ");
            builder.push_bind(segment_id);
        }

        push_order(&mut builder, order);
        builder.push(" LIMIT ");
        builder.push_bind(per_page as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page_offset(page, per_page));

        let rows = builder
            .build_query_as::<MemberRow>()
            .fetch_all(&self.pool)
            .await?;

        // Same predicate as the listing above.
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM members WHERE ($1::uuid IS NULL OR segment_id = $1)",
        )
        .bind(segment)
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(Member::from).collect();
        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_members_by_segment(&self, segment_id: &Uuid) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT * FROM members WHERE segment_id = $1 ORDER BY display_order ASC, name ASC",
        )
        .bind(segment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn get_recent_members(&self, limit: u32) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT * FROM members ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn update_member(&self, id: &Uuid, req: &UpdateMemberRequest) -> Result<Member, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE members SET updated_at = NOW()");

        push_opt(&mut builder, "name", &req.name);
        push_opt(&mut builder, "role", &req.role);
        push_opt(&mut builder, "position", &req.position);
        push_opt(&mut builder, "email", &req.email);
        push_opt(&mut builder, "bio", &req.bio);
        push_patch(&mut builder, "photo", &req.photo);
        if let Some(skills) = &req.skills {
            builder.push(", skills = ");
            builder.push_bind(Json(ListField::from(skills.clone())));
        }
        push_patch(&mut builder, "join_date", &req.join_date);
        push_patch(&mut builder, "segment_id", &req.segment_id);
        push_opt(&mut builder, "display_order", &req.display_order);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let row = builder
            .build_query_as::<MemberRow>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

        Ok(Member::from(row))
    }

    async fn delete_member(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_breaks_ties_by_name() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM members");
        push_order(&mut builder, MemberOrder::Display);
        assert_eq!(
            builder.sql(),
            "SELECT * FROM members ORDER BY display_order ASC, name ASC"
        );
    }

    #[test]
    fn newest_orders_by_creation_time() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM members");
        push_order(&mut builder, MemberOrder::Newest);
        assert_eq!(builder.sql(), "SELECT * FROM members ORDER BY created_at DESC");
    }
}
