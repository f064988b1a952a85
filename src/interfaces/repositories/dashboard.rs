use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use sqlx::{self, PgPool};

use crate::{errors::AppError, repositories::sqlx_repo::SqlxDashboardRepo};

/// Per-entity totals for the admin dashboard, gathered in one round trip.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DashboardCounts {
    pub segments: i64,
    pub members: i64,
    pub achievements: i64,
    pub gallery_photos: i64,
    pub events: i64,
    pub blog_posts: i64,
    pub published_posts: i64,
    pub faqs: i64,
    pub projects: i64,
    pub resources: i64,
    pub contact_submissions: i64,
    pub unread_contacts: i64,
    pub newsletter_subscribers: i64,
    pub active_subscribers: i64,
    pub membership_applications: i64,
    pub pending_applications: i64,
}

#[automock]
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn counts(&self) -> Result<DashboardCounts, AppError>;
}

impl SqlxDashboardRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxDashboardRepo { pool }
    }
}

#[async_trait]
impl DashboardRepository for SqlxDashboardRepo {
    async fn counts(&self) -> Result<DashboardCounts, AppError> {
        let counts = sqlx::query_as::<_, DashboardCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM segments) AS segments,
                (SELECT COUNT(*) FROM members) AS members,
                (SELECT COUNT(*) FROM achievements) AS achievements,
                (SELECT COUNT(*) FROM gallery_photos) AS gallery_photos,
                (SELECT COUNT(*) FROM events) AS events,
                (SELECT COUNT(*) FROM blog_posts) AS blog_posts,
                (SELECT COUNT(*) FROM blog_posts WHERE status = 'published') AS published_posts,
                (SELECT COUNT(*) FROM faqs) AS faqs,
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM resources) AS resources,
                (SELECT COUNT(*) FROM contact_submissions) AS contact_submissions,
                (SELECT COUNT(*) FROM contact_submissions WHERE is_read = FALSE) AS unread_contacts,
                (SELECT COUNT(*) FROM newsletter_subscribers) AS newsletter_subscribers,
                (SELECT COUNT(*) FROM newsletter_subscribers WHERE is_active = TRUE) AS active_subscribers,
                (SELECT COUNT(*) FROM membership_applications) AS membership_applications,
                (SELECT COUNT(*) FROM membership_applications WHERE status = 'pending') AS pending_applications
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }
}
