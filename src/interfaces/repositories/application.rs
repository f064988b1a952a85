use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use sqlx::{self, PgPool};
use uuid::Uuid;

use crate::{
    entities::{
        application::{ApplicationStatus, MembershipApplication, NewApplicationRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxApplicationRepo},
};

#[automock]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create_application(
        &self,
        req: &NewApplicationRequest,
    ) -> Result<MembershipApplication, AppError>;
    async fn get_application_by_id(&self, id: &Uuid) -> Result<MembershipApplication, AppError>;
    async fn get_all_applications(
        &self,
        status: Option<ApplicationStatus>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<MembershipApplication>, AppError>;
    async fn get_recent_applications(&self, limit: u32)
        -> Result<Vec<MembershipApplication>, AppError>;
    /// Apply a review decision. Reviewer and timestamp fall back to the
    /// stored values when `None`, which is how the first stamp survives
    /// later transitions.
    async fn update_review(
        &self,
        id: &Uuid,
        status: ApplicationStatus,
        review_notes: Option<String>,
        reviewed_by: Option<Uuid>,
        reviewed_at: Option<DateTime<Utc>>,
    ) -> Result<MembershipApplication, AppError>;
}

impl SqlxApplicationRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxApplicationRepo { pool }
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepo {
    async fn create_application(
        &self,
        req: &NewApplicationRequest,
    ) -> Result<MembershipApplication, AppError> {
        let application = sqlx::query_as::<_, MembershipApplication>(
            r#"
            INSERT INTO membership_applications (
                full_name, email, phone, student_id, department, year_of_study,
                interested_segment_id, programming_languages, experience_level,
                motivation, expectations
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&req.full_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.student_id)
        .bind(&req.department)
        .bind(&req.year_of_study)
        .bind(req.interested_segment_id)
        .bind(&req.programming_languages)
        .bind(&req.experience_level)
        .bind(&req.motivation)
        .bind(&req.expectations)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    async fn get_application_by_id(&self, id: &Uuid) -> Result<MembershipApplication, AppError> {
        sqlx::query_as::<_, MembershipApplication>(
            "SELECT * FROM membership_applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".into()))
    }

    async fn get_all_applications(
        &self,
        status: Option<ApplicationStatus>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<MembershipApplication>, AppError> {
        let items = sqlx::query_as::<_, MembershipApplication>(
            r#"
            SELECT * FROM membership_applications
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY submitted_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM membership_applications WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_recent_applications(
        &self,
        limit: u32,
    ) -> Result<Vec<MembershipApplication>, AppError> {
        let applications = sqlx::query_as::<_, MembershipApplication>(
            "SELECT * FROM membership_applications ORDER BY submitted_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(applications)
    }

    async fn update_review(
        &self,
        id: &Uuid,
        status: ApplicationStatus,
        review_notes: Option<String>,
        reviewed_by: Option<Uuid>,
        reviewed_at: Option<DateTime<Utc>>,
    ) -> Result<MembershipApplication, AppError> {
        sqlx::query_as::<_, MembershipApplication>(
            r#"
            UPDATE membership_applications SET
                status = $1,
                review_notes = COALESCE($2, review_notes),
                reviewed_by = COALESCE($3, reviewed_by),
                reviewed_at = COALESCE($4, reviewed_at)
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(review_notes)
        .bind(reviewed_by)
        .bind(reviewed_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".into()))
    }
}
