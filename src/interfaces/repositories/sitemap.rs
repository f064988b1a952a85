use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use sqlx::{self, PgPool};

use crate::{errors::AppError, repositories::sqlx_repo::SqlxSitemapRepo};

/// One sitemap URL: the path component under its entity prefix plus the
/// row's last modification time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SitemapEntry {
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

#[automock]
#[async_trait]
pub trait SitemapRepository: Send + Sync {
    async fn segment_entries(&self) -> Result<Vec<SitemapEntry>, AppError>;
    async fn event_entries(&self) -> Result<Vec<SitemapEntry>, AppError>;
    async fn published_post_entries(&self) -> Result<Vec<SitemapEntry>, AppError>;
    async fn project_entries(&self) -> Result<Vec<SitemapEntry>, AppError>;
    async fn achievement_entries(&self) -> Result<Vec<SitemapEntry>, AppError>;
}

impl SqlxSitemapRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSitemapRepo { pool }
    }
}

#[async_trait]
impl SitemapRepository for SqlxSitemapRepo {
    async fn segment_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT id::text AS slug, updated_at FROM segments ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn event_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT id::text AS slug, updated_at FROM events ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn published_post_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            r#"
            SELECT slug, updated_at FROM blog_posts
            WHERE status = 'published'
            ORDER BY published_at DESC NULLS LAST
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn project_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT id::text AS slug, updated_at FROM projects ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn achievement_entries(&self) -> Result<Vec<SitemapEntry>, AppError> {
        let entries = sqlx::query_as::<_, SitemapEntry>(
            "SELECT id::text AS slug, updated_at FROM achievements ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
