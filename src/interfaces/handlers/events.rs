use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::EVENTS_PER_PAGE;
use crate::entities::event::{EventOrder, NewEventRequest, UpdateEventRequest};
use crate::errors::AppError;
use crate::repositories::event::EventRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_events(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let status = query.get("status").and_then(|v| v.parse().ok());

    let events = state
        .repos
        .events
        .get_all_events(status, EventOrder::DateDesc, page, EVENTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(events))
}

#[instrument(skip(state))]
pub async fn get_event_by_id(
    event_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&event_id)?;
    let event = state.repos.events.get_event_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(event))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_event(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewEventRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let event = state.repos.events.create_event(&request).await?;
    Ok(HttpResponse::Created().json(event))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_event(
    _claims: StaffClaims,
    event_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateEventRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&event_id)?;
    let request = data.into_inner();
    request.validate()?;

    let event = state.repos.events.update_event(&id, &request).await?;
    Ok(HttpResponse::Ok().json(event))
}

#[instrument(skip(_claims, state))]
pub async fn delete_event(
    _claims: StaffClaims,
    event_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&event_id)?;
    state.repos.events.delete_event(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
