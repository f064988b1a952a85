use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;
use validator::Validate;

use crate::constants::{ADMIN_PER_PAGE, DASHBOARD_RECENT};
use crate::domain::schema::REGISTRY;
use crate::entities::achievement::Achievement;
use crate::entities::application::{MembershipApplication, ReviewApplicationRequest};
use crate::entities::contact::{ContactNotesRequest, ContactReadRequest};
use crate::entities::event::Event;
use crate::entities::member::Member;
use crate::entities::newsletter::SubscriberActiveRequest;
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::repositories::application::ApplicationRepository;
use crate::repositories::contact::ContactRepository;
use crate::repositories::dashboard::{DashboardCounts, DashboardRepository};
use crate::repositories::event::EventRepository;
use crate::repositories::member::MemberRepository;
use crate::repositories::newsletter::NewsletterRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[derive(Serialize)]
struct DashboardResponse {
    counts: DashboardCounts,
    recent_members: Vec<Member>,
    recent_achievements: Vec<Achievement>,
    upcoming_events: Vec<Event>,
    recent_applications: Vec<MembershipApplication>,
}

/// Counts plus the most recent activity in each area.
#[instrument(skip(_claims, state))]
pub async fn dashboard(
    _claims: StaffClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let counts = state.repos.dashboard.counts().await?;
    let recent_members = state
        .repos
        .members
        .get_recent_members(DASHBOARD_RECENT)
        .await?;
    let recent_achievements = state
        .repos
        .achievements
        .get_recent_achievements(DASHBOARD_RECENT)
        .await?;
    let upcoming_events = state
        .repos
        .events
        .get_upcoming_events(DASHBOARD_RECENT)
        .await?;
    let recent_applications = state
        .repos
        .applications
        .get_recent_applications(DASHBOARD_RECENT)
        .await?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        counts,
        recent_members,
        recent_achievements,
        upcoming_events,
        recent_applications,
    }))
}

/// Field-level description of every editable entity, enough for a
/// generic admin UI to render forms.
#[instrument(skip(_claims))]
pub async fn schema(_claims: StaffClaims) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(&*REGISTRY))
}

// ───── Contact submissions ──────────────────────────────────────────

#[instrument(skip(_claims, state, query))]
pub async fn get_all_contacts(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let subject = query.get("subject").and_then(|v| v.parse().ok());
    let is_read = query.get("is_read").and_then(|v| v.parse::<bool>().ok());

    let submissions = state
        .repos
        .contacts
        .get_all_submissions(subject, is_read, page, ADMIN_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(submissions))
}

#[instrument(skip(_claims, state))]
pub async fn get_contact_by_id(
    _claims: StaffClaims,
    submission_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&submission_id)?;
    let submission = state.repos.contacts.get_submission_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(submission))
}

#[instrument(skip(_claims, state, data))]
pub async fn set_contact_read(
    _claims: StaffClaims,
    submission_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ContactReadRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&submission_id)?;
    let submission = state.repos.contacts.set_read(&id, data.is_read).await?;
    Ok(HttpResponse::Ok().json(submission))
}

#[instrument(skip(_claims, state, data))]
pub async fn set_contact_notes(
    _claims: StaffClaims,
    submission_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ContactNotesRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&submission_id)?;
    let request = data.into_inner();
    request.validate()?;

    let submission = state
        .repos
        .contacts
        .set_notes(&id, &request.admin_notes)
        .await?;
    Ok(HttpResponse::Ok().json(submission))
}

// ───── Membership applications ──────────────────────────────────────

#[instrument(skip(_claims, state, query))]
pub async fn get_all_applications(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let status = query.get("status").and_then(|v| v.parse().ok());

    let applications = state
        .repos
        .applications
        .get_all_applications(status, page, ADMIN_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(applications))
}

#[instrument(skip(_claims, state))]
pub async fn get_application_by_id(
    _claims: StaffClaims,
    application_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&application_id)?;
    let application = state.repos.applications.get_application_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(application))
}

/// The acting staff user becomes the reviewer of record on the first
/// decision.
#[instrument(skip(claims, state, data))]
pub async fn review_application(
    claims: StaffClaims,
    application_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ReviewApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&application_id)?;
    let reviewer = claims.user_id()?;

    let application = state
        .review_handler
        .review_application(&id, reviewer, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(application))
}

// ───── Newsletter subscribers ───────────────────────────────────────

#[instrument(skip(_claims, state, query))]
pub async fn get_all_subscribers(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let subscribers = state
        .repos
        .newsletter
        .get_all_subscribers(page, ADMIN_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(subscribers))
}

#[instrument(skip(_claims, state, data))]
pub async fn set_subscriber_active(
    _claims: StaffClaims,
    subscriber_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SubscriberActiveRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&subscriber_id)?;
    let subscriber = state
        .repos
        .newsletter
        .set_active(&id, data.is_active)
        .await?;
    Ok(HttpResponse::Ok().json(subscriber))
}
