use std::collections::HashMap;

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::{FEATURED_RESOURCES, RESOURCES_PER_PAGE};
use crate::entities::resource::{
    DownloadTarget, NewResourceRequest, ResourceListResponse, UpdateResourceRequest,
};
use crate::errors::AppError;
use crate::repositories::resource::ResourceRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_resources(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let category = query.get("category").and_then(|v| v.parse().ok());
    let keyword = query
        .get("q")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let resources = state
        .repos
        .resources
        .get_all_resources(category, keyword, page, RESOURCES_PER_PAGE)
        .await?;
    let featured = state
        .repos
        .resources
        .get_featured_resources(FEATURED_RESOURCES)
        .await?;

    Ok(HttpResponse::Ok().json(ResourceListResponse {
        resources,
        featured,
    }))
}

#[instrument(skip(state))]
pub async fn get_resource_by_id(
    resource_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&resource_id)?;
    let resource = state.repos.resources.get_resource_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(resource))
}

/// Counted download. Stored files are served as attachments; external
/// targets answer with a redirect so the counter covers both kinds.
#[instrument(skip(state))]
pub async fn download_resource(
    resource_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&resource_id)?;

    match state.downloads_handler.record_download(&id).await? {
        DownloadTarget::File(path) => {
            let full_path = state.media_root.join(&path);
            let bytes = tokio::fs::read(&full_path).await.map_err(|e| {
                tracing::error!(error = %e, file = %path, "Resource file unreadable");
                AppError::InternalError(format!("Could not read resource file {}", path))
            })?;

            let filename = path.rsplit('/').next().unwrap_or(&path).to_string();
            Ok(HttpResponse::Ok()
                .content_type("application/octet-stream")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(bytes))
        }
        DownloadTarget::ExternalUrl(url) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, url))
            .finish()),
    }
}

#[instrument(skip(_claims, state, data))]
pub async fn create_resource(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewResourceRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let resource = state.repos.resources.create_resource(&request).await?;
    Ok(HttpResponse::Created().json(resource))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_resource(
    _claims: StaffClaims,
    resource_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateResourceRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&resource_id)?;
    let request = data.into_inner();
    request.validate()?;

    let resource = state.repos.resources.update_resource(&id, &request).await?;
    Ok(HttpResponse::Ok().json(resource))
}

#[instrument(skip(_claims, state))]
pub async fn delete_resource(
    _claims: StaffClaims,
    resource_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&resource_id)?;
    state.repos.resources.delete_resource(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
