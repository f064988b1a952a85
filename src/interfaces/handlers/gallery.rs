use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::GALLERY_PER_PAGE;
use crate::entities::gallery::{NewGalleryPhotoRequest, UpdateGalleryPhotoRequest};
use crate::errors::AppError;
use crate::repositories::gallery::GalleryRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_photos(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let category = query.get("category").and_then(|v| v.parse().ok());

    let photos = state
        .repos
        .gallery
        .get_all_photos(category, page, GALLERY_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(photos))
}

#[instrument(skip(state))]
pub async fn get_photo_by_id(
    photo_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&photo_id)?;
    let photo = state.repos.gallery.get_photo_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(photo))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_photo(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewGalleryPhotoRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let photo = state.repos.gallery.create_photo(&request).await?;
    Ok(HttpResponse::Created().json(photo))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_photo(
    _claims: StaffClaims,
    photo_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateGalleryPhotoRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&photo_id)?;
    let request = data.into_inner();
    request.validate()?;

    let photo = state.repos.gallery.update_photo(&id, &request).await?;
    Ok(HttpResponse::Ok().json(photo))
}

#[instrument(skip(_claims, state))]
pub async fn delete_photo(
    _claims: StaffClaims,
    photo_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&photo_id)?;
    state.repos.gallery.delete_photo(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
