use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        pagination::Paginated,
        resource::{
            DownloadTarget, NewResourceRequest, Resource, ResourceCategory, ResourceRow,
            UpdateResourceRequest,
        },
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxResourceRepo},
};

#[automock]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create_resource(&self, req: &NewResourceRequest) -> Result<Resource, AppError>;
    async fn get_resource_by_id(&self, id: &Uuid) -> Result<Resource, AppError>;
    async fn get_all_resources(
        &self,
        category: Option<ResourceCategory>,
        keyword: Option<String>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Resource>, AppError>;
    async fn get_featured_resources(&self, limit: u32) -> Result<Vec<Resource>, AppError>;
    /// Increment the download counter and return the target in one
    /// conditional statement. `None` means no row or nothing servable,
    /// and in that case no increment happened.
    async fn record_download(&self, id: &Uuid) -> Result<Option<DownloadTarget>, AppError>;
    async fn update_resource(&self, id: &Uuid, req: &UpdateResourceRequest) -> Result<Resource, AppError>;
    async fn delete_resource(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxResourceRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxResourceRepo { pool }
    }
}

#[async_trait]
impl ResourceRepository for SqlxResourceRepo {
    async fn create_resource(&self, req: &NewResourceRequest) -> Result<Resource, AppError> {
        let row = sqlx::query_as::<_, ResourceRow>(
            r#"
            INSERT INTO resources (title, description, category, file, external_url, tags, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.category)
        .bind(&req.file)
        .bind(&req.external_url)
        .bind(&req.tags)
        .bind(req.is_featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(Resource::from(row))
    }

    async fn get_resource_by_id(&self, id: &Uuid) -> Result<Resource, AppError> {
        let row = sqlx::query_as::<_, ResourceRow>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".into()))?;

        Ok(Resource::from(row))
    }

    async fn get_all_resources(
        &self,
        category: Option<ResourceCategory>,
        keyword: Option<String>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Resource>, AppError> {
        let pattern = keyword.map(|q| format!("%{}%", q));

        let rows = sqlx::query_as::<_, ResourceRow>(
            r#"
            SELECT * FROM resources
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL
                   OR title ILIKE $2 OR description ILIKE $2 OR tags ILIKE $2)
            ORDER BY is_featured DESC, created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(category)
        .bind(&pattern)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM resources
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL
                   OR title ILIKE $2 OR description ILIKE $2 OR tags ILIKE $2)
            "#,
        )
        .bind(category)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(Resource::from).collect();
        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_featured_resources(&self, limit: u32) -> Result<Vec<Resource>, AppError> {
        let rows = sqlx::query_as::<_, ResourceRow>(
            "SELECT * FROM resources WHERE is_featured = TRUE ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn record_download(&self, id: &Uuid) -> Result<Option<DownloadTarget>, AppError> {
        let target = sqlx::query_as::<_, (Option<String>, Option<String>)>(
            r#"
            UPDATE resources
            SET downloads = downloads + 1
            WHERE id = $1 AND (file IS NOT NULL OR external_url IS NOT NULL)
            RETURNING file, external_url
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(target.and_then(|(file, external_url)| match (file, external_url) {
            (Some(file), _) => Some(DownloadTarget::File(file)),
            (None, Some(url)) => Some(DownloadTarget::ExternalUrl(url)),
            (None, None) => None,
        }))
    }

    async fn update_resource(&self, id: &Uuid, req: &UpdateResourceRequest) -> Result<Resource, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE resources SET updated_at = NOW()");

        push_opt(&mut builder, "title", &req.title);
        push_opt(&mut builder, "description", &req.description);
        push_opt(&mut builder, "category", &req.category);
        push_patch(&mut builder, "file", &req.file);
        push_patch(&mut builder, "external_url", &req.external_url);
        push_opt(&mut builder, "tags", &req.tags);
        push_opt(&mut builder, "is_featured", &req.is_featured);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let row = builder
            .build_query_as::<ResourceRow>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".into()))?;

        Ok(Resource::from(row))
    }

    async fn delete_resource(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Resource not found".into()));
        }

        Ok(())
    }
}
