use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool};

use crate::{
    entities::{
        achievement::Achievement,
        blog_post::{BlogPost, BlogPostRow},
        event::Event,
        member::{Member, MemberRow},
        project::{Project, ProjectRow},
        resource::{Resource, ResourceRow},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxSearchRepo,
};

/// Case-insensitive substring search, one capped query per category.
#[automock]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn search_members(&self, q: &str, limit: u32) -> Result<Vec<Member>, AppError>;
    async fn search_events(&self, q: &str, limit: u32) -> Result<Vec<Event>, AppError>;
    async fn search_achievements(&self, q: &str, limit: u32) -> Result<Vec<Achievement>, AppError>;
    async fn search_blog_posts(&self, q: &str, limit: u32) -> Result<Vec<BlogPost>, AppError>;
    async fn search_projects(&self, q: &str, limit: u32) -> Result<Vec<Project>, AppError>;
    async fn search_resources(&self, q: &str, limit: u32) -> Result<Vec<Resource>, AppError>;
}

impl SqlxSearchRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSearchRepo { pool }
    }
}

fn like_pattern(q: &str) -> String {
    format!("%{}%", q)
}

#[async_trait]
impl SearchRepository for SqlxSearchRepo {
    async fn search_members(&self, q: &str, limit: u32) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT * FROM members
            WHERE name ILIKE $1 OR role ILIKE $1 OR bio ILIKE $1
            ORDER BY display_order ASC, name ASC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn search_events(&self, q: &str, limit: u32) -> Result<Vec<Event>, AppError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE title ILIKE $1 OR description ILIKE $1
            ORDER BY date DESC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn search_achievements(&self, q: &str, limit: u32) -> Result<Vec<Achievement>, AppError> {
        let achievements = sqlx::query_as::<_, Achievement>(
            r#"
            SELECT * FROM achievements
            WHERE title ILIKE $1 OR description ILIKE $1
            ORDER BY date DESC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(achievements)
    }

    async fn search_blog_posts(&self, q: &str, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        // Drafts and archived posts never match.
        let rows = sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT p.*, u.username AS author_username
            FROM blog_posts p
            LEFT JOIN users u ON u.id = p.author_id
            WHERE p.status = 'published'
              AND (p.title ILIKE $1 OR p.content ILIKE $1 OR p.tags ILIKE $1)
            ORDER BY p.published_at DESC NULLS LAST
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn search_projects(&self, q: &str, limit: u32) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT * FROM projects
            WHERE title ILIKE $1 OR description ILIKE $1 OR technologies ILIKE $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn search_resources(&self, q: &str, limit: u32) -> Result<Vec<Resource>, AppError> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT * FROM resources
            WHERE title ILIKE $1 OR description ILIKE $1 OR tags ILIKE $1
            ORDER BY is_featured DESC, created_at DESC
            LIMIT $2
            "#,
        )
        .bind(like_pattern(q))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Resource::from).collect())
    }
}
