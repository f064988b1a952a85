use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::SEGMENTS_PER_PAGE;
use crate::entities::segment::{NewSegmentRequest, SegmentDetail, UpdateSegmentRequest};
use crate::errors::AppError;
use crate::repositories::member::MemberRepository;
use crate::repositories::segment::SegmentRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_segments(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let segments = state
        .repos
        .segments
        .get_all_segments(page, SEGMENTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(segments))
}

#[instrument(skip(state))]
pub async fn get_segment_by_id(
    segment_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&segment_id)?;

    let segment = state.repos.segments.get_segment_by_id(&id).await?;
    let members = state.repos.members.get_members_by_segment(&id).await?;

    Ok(HttpResponse::Ok().json(SegmentDetail { segment, members }))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_segment(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewSegmentRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let segment = state.repos.segments.create_segment(&request).await?;
    Ok(HttpResponse::Created().json(segment))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_segment(
    _claims: StaffClaims,
    segment_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSegmentRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&segment_id)?;
    let request = data.into_inner();
    request.validate()?;

    let segment = state.repos.segments.update_segment(&id, &request).await?;
    Ok(HttpResponse::Ok().json(segment))
}

#[instrument(skip(_claims, state))]
pub async fn delete_segment(
    _claims: StaffClaims,
    segment_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&segment_id)?;
    state.repos.segments.delete_segment(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
