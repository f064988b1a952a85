use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool};
use uuid::Uuid;

use crate::{
    entities::{
        newsletter::{SubscribeOutcome, Subscriber},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxNewsletterRepo},
};

#[automock]
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    /// Insert-if-absent keyed on the unique email. A duplicate is an
    /// outcome, not an error, and never creates a second row.
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError>;
    async fn get_all_subscribers(&self, page: u32, per_page: u32)
        -> Result<Paginated<Subscriber>, AppError>;
    async fn set_active(&self, id: &Uuid, is_active: bool) -> Result<Subscriber, AppError>;
}

impl SqlxNewsletterRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxNewsletterRepo { pool }
    }
}

#[async_trait]
impl NewsletterRepository for SqlxNewsletterRepo {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError> {
        let result = sqlx::query(
            "INSERT INTO newsletter_subscribers (email) VALUES ($1) ON CONFLICT (email) DO NOTHING",
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            Ok(SubscribeOutcome::AlreadySubscribed)
        } else {
            Ok(SubscribeOutcome::Subscribed)
        }
    }

    async fn get_all_subscribers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Subscriber>, AppError> {
        let items = sqlx::query_as::<_, Subscriber>(
            "SELECT * FROM newsletter_subscribers ORDER BY subscribed_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscribers")
            .fetch_one(&self.pool)
            .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn set_active(&self, id: &Uuid, is_active: bool) -> Result<Subscriber, AppError> {
        sqlx::query_as::<_, Subscriber>(
            "UPDATE newsletter_subscribers SET is_active = $1 WHERE id = $2 RETURNING *",
        )
        .bind(is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscriber not found".into()))
    }
}
