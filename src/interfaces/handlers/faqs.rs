use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::FAQS_PER_PAGE;
use crate::entities::faq::{FaqListResponse, NewFaqRequest, UpdateFaqRequest};
use crate::errors::AppError;
use crate::repositories::faq::FaqRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

/// Active FAQs with the categories currently in use.
#[instrument(skip(state, query))]
pub async fn get_active_faqs(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let faqs = state
        .repos
        .faqs
        .get_all_faqs(true, page, FAQS_PER_PAGE)
        .await?;
    let categories = state.repos.faqs.get_active_categories().await?;

    Ok(HttpResponse::Ok().json(FaqListResponse { faqs, categories }))
}

#[instrument(skip(_claims, state, query))]
pub async fn admin_get_all_faqs(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let faqs = state
        .repos
        .faqs
        .get_all_faqs(false, page, FAQS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(faqs))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_faq(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewFaqRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let faq = state.repos.faqs.create_faq(&request).await?;
    Ok(HttpResponse::Created().json(faq))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_faq(
    _claims: StaffClaims,
    faq_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateFaqRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&faq_id)?;
    let request = data.into_inner();
    request.validate()?;

    let faq = state.repos.faqs.update_faq(&id, &request).await?;
    Ok(HttpResponse::Ok().json(faq))
}

#[instrument(skip(_claims, state))]
pub async fn delete_faq(
    _claims: StaffClaims,
    faq_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&faq_id)?;
    state.repos.faqs.delete_faq(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
