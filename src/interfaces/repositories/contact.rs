use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool};
use uuid::Uuid;

use crate::{
    entities::{
        contact::{ContactSubject, ContactSubmission, NewContactRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxContactRepo},
};

#[automock]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_submission(&self, req: &NewContactRequest) -> Result<ContactSubmission, AppError>;
    async fn get_submission_by_id(&self, id: &Uuid) -> Result<ContactSubmission, AppError>;
    async fn get_all_submissions(
        &self,
        subject: Option<ContactSubject>,
        is_read: Option<bool>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<ContactSubmission>, AppError>;
    async fn set_read(&self, id: &Uuid, is_read: bool) -> Result<ContactSubmission, AppError>;
    async fn set_notes(&self, id: &Uuid, notes: &str) -> Result<ContactSubmission, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_submission(&self, req: &NewContactRequest) -> Result<ContactSubmission, AppError> {
        let submission = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.subject)
        .bind(&req.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn get_submission_by_id(&self, id: &Uuid) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>("SELECT * FROM contact_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact submission not found".into()))
    }

    async fn get_all_submissions(
        &self,
        subject: Option<ContactSubject>,
        is_read: Option<bool>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<ContactSubmission>, AppError> {
        let items = sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT * FROM contact_submissions
            WHERE ($1::text IS NULL OR subject = $1)
              AND ($2::boolean IS NULL OR is_read = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(subject)
        .bind(is_read)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM contact_submissions
            WHERE ($1::text IS NULL OR subject = $1)
              AND ($2::boolean IS NULL OR is_read = $2)
            "#,
        )
        .bind(subject)
        .bind(is_read)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn set_read(&self, id: &Uuid, is_read: bool) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            "UPDATE contact_submissions SET is_read = $1 WHERE id = $2 RETURNING *",
        )
        .bind(is_read)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact submission not found".into()))
    }

    async fn set_notes(&self, id: &Uuid, notes: &str) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            "UPDATE contact_submissions SET admin_notes = $1 WHERE id = $2 RETURNING *",
        )
        .bind(notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact submission not found".into()))
    }
}
