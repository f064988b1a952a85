use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool};
use uuid::Uuid;

use crate::{
    entities::{
        faq::{Faq, NewFaqRequest, UpdateFaqRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxFaqRepo},
};

#[automock]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn create_faq(&self, req: &NewFaqRequest) -> Result<Faq, AppError>;
    async fn get_faq_by_id(&self, id: &Uuid) -> Result<Faq, AppError>;
    async fn get_all_faqs(
        &self,
        active_only: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Faq>, AppError>;
    async fn get_active_categories(&self) -> Result<Vec<String>, AppError>;
    async fn update_faq(&self, id: &Uuid, req: &UpdateFaqRequest) -> Result<Faq, AppError>;
    async fn delete_faq(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxFaqRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxFaqRepo { pool }
    }
}

#[async_trait]
impl FaqRepository for SqlxFaqRepo {
    async fn create_faq(&self, req: &NewFaqRequest) -> Result<Faq, AppError> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
            INSERT INTO faqs (question, answer, category, display_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&req.question)
        .bind(&req.answer)
        .bind(req.category)
        .bind(req.display_order)
        .bind(req.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(faq)
    }

    async fn get_faq_by_id(&self, id: &Uuid) -> Result<Faq, AppError> {
        sqlx::query_as::<_, Faq>("SELECT * FROM faqs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("FAQ not found".into()))
    }

    async fn get_all_faqs(
        &self,
        active_only: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Faq>, AppError> {
        let items = sqlx::query_as::<_, Faq>(
            r#"
            SELECT * FROM faqs
            WHERE ($1::boolean IS FALSE OR is_active = TRUE)
            ORDER BY display_order ASC, question ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(active_only)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM faqs WHERE ($1::boolean IS FALSE OR is_active = TRUE)",
        )
        .bind(active_only)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_active_categories(&self) -> Result<Vec<String>, AppError> {
        let categories: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT category FROM faqs WHERE is_active = TRUE ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn update_faq(&self, id: &Uuid, req: &UpdateFaqRequest) -> Result<Faq, AppError> {
        // COALESCE preserves existing fields when Option::None is provided
        sqlx::query_as::<_, Faq>(
            r#"
            UPDATE faqs SET
                question = COALESCE($1, question),
                answer = COALESCE($2, answer),
                category = COALESCE($3, category),
                display_order = COALESCE($4, display_order),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&req.question)
        .bind(&req.answer)
        .bind(req.category)
        .bind(req.display_order)
        .bind(req.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("FAQ not found".into()))
    }

    async fn delete_faq(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("FAQ not found".into()));
        }

        Ok(())
    }
}
