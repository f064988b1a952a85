use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, types::Json, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        list_field::ListField,
        pagination::Paginated,
        segment::{NewSegmentRequest, Segment, SegmentRow, UpdateSegmentRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxSegmentRepo},
};

#[automock]
#[async_trait]
pub trait SegmentRepository: Send + Sync {
    async fn create_segment(&self, req: &NewSegmentRequest) -> Result<Segment, AppError>;
    async fn get_segment_by_id(&self, id: &Uuid) -> Result<Segment, AppError>;
    async fn get_all_segments(&self, page: u32, per_page: u32) -> Result<Paginated<Segment>, AppError>;
    async fn get_first_segments(&self, limit: u32) -> Result<Vec<Segment>, AppError>;
    async fn update_segment(&self, id: &Uuid, req: &UpdateSegmentRequest) -> Result<Segment, AppError>;
    async fn delete_segment(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSegmentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSegmentRepo { pool }
    }
}

fn map_title_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("segments_title_key") {
            return AppError::Conflict("Segment title already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl SegmentRepository for SqlxSegmentRepo {
    async fn create_segment(&self, req: &NewSegmentRequest) -> Result<Segment, AppError> {
        let row = sqlx::query_as::<_, SegmentRow>(
            r#"
            INSERT INTO segments (
                title, description, icon, photo, founded,
                activities, vision, mission, achievements, contact
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.icon)
        .bind(&req.photo)
        .bind(&req.founded)
        .bind(Json(ListField::from(req.activities.clone())))
        .bind(&req.vision)
        .bind(&req.mission)
        .bind(Json(ListField::from(req.achievements.clone())))
        .bind(&req.contact)
        .fetch_one(&self.pool)
        .await
        .map_err(map_title_conflict)?;

        Ok(Segment::from(row))
    }

    async fn get_segment_by_id(&self, id: &Uuid) -> Result<Segment, AppError> {
        let row = sqlx::query_as::<_, SegmentRow>("SELECT * FROM segments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Segment not found".into()))?;

        Ok(Segment::from(row))
    }

    async fn get_all_segments(&self, page: u32, per_page: u32) -> Result<Paginated<Segment>, AppError> {
        let rows = sqlx::query_as::<_, SegmentRow>(
            "SELECT * FROM segments ORDER BY created_at ASC LIMIT $1 OFFSET $2",
        )
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM segments")
            .fetch_one(&self.pool)
            .await?;

        let items = rows.into_iter().map(Segment::from).collect();
        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_first_segments(&self, limit: u32) -> Result<Vec<Segment>, AppError> {
        let rows = sqlx::query_as::<_, SegmentRow>(
            "SELECT * FROM segments ORDER BY created_at ASC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Segment::from).collect())
    }

    async fn update_segment(&self, id: &Uuid, req: &UpdateSegmentRequest) -> Result<Segment, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE segments SET updated_at = NOW()");

        push_opt(&mut builder, "title", &req.title);
        push_opt(&mut builder, "description", &req.description);
        push_opt(&mut builder, "icon", &req.icon);
        push_patch(&mut builder, "photo", &req.photo);
        push_opt(&mut builder, "founded", &req.founded);
        if let Some(activities) = &req.activities {
            builder.push(", activities = ");
            builder.push_bind(Json(ListField::from(activities.clone())));
        }
        push_opt(&mut builder, "vision", &req.vision);
        push_opt(&mut builder, "mission", &req.mission);
        if let Some(achievements) = &req.achievements {
            builder.push(", achievements = ");
            builder.push_bind(Json(ListField::from(achievements.clone())));
        }
        push_opt(&mut builder, "contact", &req.contact);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let row = builder
            .build_query_as::<SegmentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_title_conflict)?
            .ok_or_else(|| AppError::NotFound("Segment not found".into()))?;

        Ok(Segment::from(row))
    }

    async fn delete_segment(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM segments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Segment not found".into()));
        }

        Ok(())
    }
}
