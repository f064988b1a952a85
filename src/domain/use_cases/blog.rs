use chrono::Utc;
use slug::slugify;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::entities::blog_post::{
    BlogPost, BlogPostDetail, BlogPostInsert, BlogStatus, NewBlogPostRequest,
    UpdateBlogPostRequest,
};
use crate::entities::patch_field::PatchField;
use crate::errors::AppError;
use crate::repositories::blog_post::BlogPostRepository;

/// Write-side rules for blog posts: slug derivation on create and the
/// one-shot `published_at` stamp on the transition to published.
pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    #[instrument(skip(self, request))]
    pub async fn create_blog_post(
        &self,
        author_id: Uuid,
        request: NewBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        request.validate()?;

        let slug = resolve_slug(request.slug.as_deref(), &request.title);
        let published_at = request
            .published_at
            .or_else(|| (request.status == BlogStatus::Published).then(Utc::now));

        let insert = BlogPostInsert {
            title: request.title,
            slug,
            content: request.content,
            excerpt: request.excerpt,
            author_id,
            status: request.status,
            tags: request.tags,
            featured_image: request.featured_image,
            published_at,
        };
        insert.validate()?;

        self.blog_post_repo.create_blog_post(&insert).await
    }

    /// Applies the patch. When the post ends up published and has never
    /// carried a publication timestamp, one is stamped now; an existing
    /// timestamp is left alone on every later save.
    #[instrument(skip(self, request))]
    pub async fn update_blog_post(
        &self,
        id: &Uuid,
        mut request: UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        request.validate()?;

        let current = self.blog_post_repo.get_blog_post_by_id(id).await?;
        let effective_status = request.status.unwrap_or(current.status);
        if effective_status == BlogStatus::Published
            && current.published_at.is_none()
            && matches!(request.published_at, PatchField::Unchanged)
        {
            request.published_at = PatchField::SetToValue(Utc::now());
        }

        self.blog_post_repo.update_blog_post(id, &request).await
    }

    #[instrument(skip(self))]
    pub async fn get_post_with_related(
        &self,
        slug: &str,
        related_limit: u32,
    ) -> Result<BlogPostDetail, AppError> {
        let post = self.blog_post_repo.get_published_post_by_slug(slug).await?;
        let related_posts = self
            .blog_post_repo
            .get_related_posts(&post.id, related_limit)
            .await?;
        Ok(BlogPostDetail {
            post,
            related_posts,
        })
    }
}

fn resolve_slug(requested: Option<&str>, title: &str) -> String {
    match requested {
        Some(slug) if !slug.trim().is_empty() => slugify(slug),
        _ => slugify(title),
    }
}
