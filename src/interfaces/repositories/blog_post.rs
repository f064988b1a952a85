use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        blog_post::{BlogOrder, BlogPost, BlogPostInsert, BlogPostRow, UpdateBlogPostRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxBlogPostRepo},
};

const SELECT_WITH_AUTHOR: &str = "SELECT p.*, u.username AS author_username \
     FROM blog_posts p LEFT JOIN users u ON u.id = p.author_id";

#[automock]
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
    async fn get_published_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
    async fn get_all_blog_posts(
        &self,
        published_only: bool,
        tag: Option<String>,
        order: BlogOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<BlogPost>, AppError>;
    async fn get_recent_published_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError>;
    async fn get_related_posts(&self, exclude_id: &Uuid, limit: u32) -> Result<Vec<BlogPost>, AppError>;
    async fn update_blog_post(
        &self,
        id: &Uuid,
        post: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError>;
    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("blog_posts_slug_key") {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO blog_posts (
                title, slug, content, excerpt, author_id,
                status, tags, featured_image, published_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(post.author_id)
        .bind(post.status)
        .bind(&post.tags)
        .bind(&post.featured_image)
        .bind(post.published_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        self.get_blog_post_by_id(&id).await
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!("{} WHERE p.id = $1", SELECT_WITH_AUTHOR))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".into()))?;

        Ok(BlogPost::from(row))
    }

    async fn get_published_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "{} WHERE p.slug = $1 AND p.status = 'published'",
            SELECT_WITH_AUTHOR
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))?;

        Ok(BlogPost::from(row))
    }

    async fn get_all_blog_posts(
        &self,
        published_only: bool,
        tag: Option<String>,
        order: BlogOrder,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<BlogPost>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_WITH_AUTHOR);
        builder.push(" WHERE 1 = 1");

        if published_only {
            builder.push(" AND p.status = 'published'");
        }
        if let Some(tag) = &tag {
            builder.push(" AND p.tags ILIKE ");
            builder.push_bind(format!("%{}%", tag));
        }

        match order {
            BlogOrder::PublishedDesc => {
                builder.push(" ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC")
            }
            BlogOrder::CreatedDesc => builder.push(" ORDER BY p.created_at DESC"),
        };
        builder.push(" LIMIT ");
        builder.push_bind(per_page as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page_offset(page, per_page));

        let rows = builder
            .build_query_as::<BlogPostRow>()
            .fetch_all(&self.pool)
            .await?;

        // Same filter predicate as the listing.
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM blog_posts
            WHERE ($1::boolean IS FALSE OR status = 'published')
              AND ($2::text IS NULL OR tags ILIKE $2)
            "#,
        )
        .bind(published_only)
        .bind(tag.map(|t| format!("%{}%", t)))
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(BlogPost::from).collect();
        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_recent_published_posts(&self, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(&format!(
            "{} WHERE p.status = 'published' \
             ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC LIMIT $1",
            SELECT_WITH_AUTHOR
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn get_related_posts(&self, exclude_id: &Uuid, limit: u32) -> Result<Vec<BlogPost>, AppError> {
        let rows = sqlx::query_as::<_, BlogPostRow>(&format!(
            "{} WHERE p.status = 'published' AND p.id <> $1 \
             ORDER BY p.published_at DESC NULLS LAST, p.created_at DESC LIMIT $2",
            SELECT_WITH_AUTHOR
        ))
        .bind(exclude_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    async fn update_blog_post(
        &self,
        id: &Uuid,
        post: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE blog_posts SET updated_at = NOW()");

        push_opt(&mut builder, "title", &post.title);
        push_opt(&mut builder, "slug", &post.slug);
        push_opt(&mut builder, "content", &post.content);
        push_opt(&mut builder, "excerpt", &post.excerpt);
        push_opt(&mut builder, "status", &post.status);
        push_opt(&mut builder, "tags", &post.tags);
        push_patch(&mut builder, "featured_image", &post.featured_image);
        push_patch(&mut builder, "published_at", &post.published_at);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING id");

        let updated: Option<Uuid> = builder
            .build_query_scalar()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_slug_conflict)?;

        match updated {
            Some(id) => self.get_blog_post_by_id(&id).await,
            None => Err(AppError::NotFound("Blog post not found".into())),
        }
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog post not found".into()));
        }

        Ok(())
    }
}
