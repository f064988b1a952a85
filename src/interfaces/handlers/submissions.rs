use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::application::NewApplicationRequest;
use crate::entities::contact::NewContactRequest;
use crate::entities::newsletter::NewsletterSignup;
use crate::errors::AppError;
use crate::AppState;

#[instrument(skip(state, data))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    data: web::Json<NewContactRequest>,
) -> Result<impl Responder, AppError> {
    let received = state
        .submissions_handler
        .submit_contact(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(received))
}

#[instrument(skip(state, data))]
pub async fn subscribe_newsletter(
    state: web::Data<AppState>,
    data: web::Json<NewsletterSignup>,
) -> Result<impl Responder, AppError> {
    let ack = state
        .submissions_handler
        .subscribe(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ack))
}

#[instrument(skip(state, data))]
pub async fn submit_application(
    state: web::Data<AppState>,
    data: web::Json<NewApplicationRequest>,
) -> Result<impl Responder, AppError> {
    let received = state
        .submissions_handler
        .apply(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(received))
}
