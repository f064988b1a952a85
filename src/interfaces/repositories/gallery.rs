use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool};
use uuid::Uuid;

use crate::{
    entities::{
        gallery::{GalleryCategory, GalleryPhoto, NewGalleryPhotoRequest, UpdateGalleryPhotoRequest},
        pagination::Paginated,
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxGalleryRepo},
};

#[automock]
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn create_photo(&self, req: &NewGalleryPhotoRequest) -> Result<GalleryPhoto, AppError>;
    async fn get_photo_by_id(&self, id: &Uuid) -> Result<GalleryPhoto, AppError>;
    async fn get_all_photos(
        &self,
        category: Option<GalleryCategory>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<GalleryPhoto>, AppError>;
    async fn update_photo(
        &self,
        id: &Uuid,
        req: &UpdateGalleryPhotoRequest,
    ) -> Result<GalleryPhoto, AppError>;
    async fn delete_photo(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxGalleryRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxGalleryRepo { pool }
    }
}

#[async_trait]
impl GalleryRepository for SqlxGalleryRepo {
    async fn create_photo(&self, req: &NewGalleryPhotoRequest) -> Result<GalleryPhoto, AppError> {
        let photo = sqlx::query_as::<_, GalleryPhoto>(
            r#"
            INSERT INTO gallery_photos (image, caption, category)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&req.image)
        .bind(&req.caption)
        .bind(req.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(photo)
    }

    async fn get_photo_by_id(&self, id: &Uuid) -> Result<GalleryPhoto, AppError> {
        sqlx::query_as::<_, GalleryPhoto>("SELECT * FROM gallery_photos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".into()))
    }

    async fn get_all_photos(
        &self,
        category: Option<GalleryCategory>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<GalleryPhoto>, AppError> {
        let items = sqlx::query_as::<_, GalleryPhoto>(
            r#"
            SELECT * FROM gallery_photos
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY uploaded_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gallery_photos WHERE ($1::text IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn update_photo(
        &self,
        id: &Uuid,
        req: &UpdateGalleryPhotoRequest,
    ) -> Result<GalleryPhoto, AppError> {
        // COALESCE preserves existing fields when Option::None is provided
        sqlx::query_as::<_, GalleryPhoto>(
            r#"
            UPDATE gallery_photos SET
                image = COALESCE($1, image),
                caption = COALESCE($2, caption),
                category = COALESCE($3, category)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&req.image)
        .bind(&req.caption)
        .bind(req.category)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".into()))
    }

    async fn delete_photo(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gallery_photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Photo not found".into()));
        }

        Ok(())
    }
}
