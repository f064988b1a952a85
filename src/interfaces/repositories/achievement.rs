use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        achievement::{
            Achievement, AchievementCategory, AchievementOrder, NewAchievementRequest,
            UpdateAchievementRequest,
        },
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxAchievementRepo},
};

#[automock]
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn create_achievement(&self, req: &NewAchievementRequest) -> Result<Achievement, AppError>;
    async fn get_achievement_by_id(&self, id: &Uuid) -> Result<Achievement, AppError>;
    async fn get_all_achievements(
        &self,
        category: Option<AchievementCategory>,
        order: AchievementOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Achievement>, AppError>;
    async fn get_recent_achievements(&self, limit: u32) -> Result<Vec<Achievement>, AppError>;
    async fn update_achievement(
        &self,
        id: &Uuid,
        req: &UpdateAchievementRequest,
    ) -> Result<Achievement, AppError>;
    async fn delete_achievement(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxAchievementRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxAchievementRepo { pool }
    }
}

#[async_trait]
impl AchievementRepository for SqlxAchievementRepo {
    async fn create_achievement(&self, req: &NewAchievementRequest) -> Result<Achievement, AppError> {
        let achievement = sqlx::query_as::<_, Achievement>(
            r#"
            INSERT INTO achievements (title, date, description, image, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(req.date)
        .bind(&req.description)
        .bind(&req.image)
        .bind(req.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(achievement)
    }

    async fn get_achievement_by_id(&self, id: &Uuid) -> Result<Achievement, AppError> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Achievement not found".into()))
    }

    async fn get_all_achievements(
        &self,
        category: Option<AchievementCategory>,
        order: AchievementOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Achievement>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM achievements");

        if let Some(category) = category {
            builder.push(" WHERE category = ");
            builder.push_bind(category);
        }

        match order {
            AchievementOrder::DateDesc => builder.push(" ORDER BY date DESC"),
            AchievementOrder::Newest => builder.push(" ORDER BY created_at DESC"),
        };
        builder.push(" LIMIT ");
        builder.push_bind(per_page as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page_offset(page, per_page));

        let items = builder
            .build_query_as::<Achievement>()
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM achievements WHERE ($1::text IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_recent_achievements(&self, limit: u32) -> Result<Vec<Achievement>, AppError> {
        let achievements = sqlx::query_as::<_, Achievement>(
            "SELECT * FROM achievements ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(achievements)
    }

    async fn update_achievement(
        &self,
        id: &Uuid,
        req: &UpdateAchievementRequest,
    ) -> Result<Achievement, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE achievements SET updated_at = NOW()");

        push_opt(&mut builder, "title", &req.title);
        push_opt(&mut builder, "date", &req.date);
        push_opt(&mut builder, "description", &req.description);
        push_patch(&mut builder, "image", &req.image);
        push_opt(&mut builder, "category", &req.category);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Achievement>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Achievement not found".into()))
    }

    async fn delete_achievement(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Achievement not found".into()));
        }

        Ok(())
    }
}
