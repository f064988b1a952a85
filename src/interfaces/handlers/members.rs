use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MEMBERS_PER_PAGE;
use crate::entities::member::{MemberOrder, NewMemberRequest, UpdateMemberRequest};
use crate::errors::AppError;
use crate::repositories::member::MemberRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_members(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    // An unparseable segment value means no filter.
    let segment = query.get("segment").and_then(|v| Uuid::parse_str(v).ok());

    let members = state
        .repos
        .members
        .get_all_members(segment, MemberOrder::Display, page, MEMBERS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(members))
}

#[instrument(skip(state))]
pub async fn get_member_by_id(
    member_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&member_id)?;
    let member = state.repos.members.get_member_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(member))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_member(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewMemberRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let member = state.repos.members.create_member(&request).await?;
    Ok(HttpResponse::Created().json(member))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_member(
    _claims: StaffClaims,
    member_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateMemberRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&member_id)?;
    let request = data.into_inner();
    request.validate()?;

    let member = state.repos.members.update_member(&id, &request).await?;
    Ok(HttpResponse::Ok().json(member))
}

#[instrument(skip(_claims, state))]
pub async fn delete_member(
    _claims: StaffClaims,
    member_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&member_id)?;
    state.repos.members.delete_member(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
