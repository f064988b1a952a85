use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::constants::ACHIEVEMENTS_PER_PAGE;
use crate::entities::achievement::{
    AchievementOrder, NewAchievementRequest, UpdateAchievementRequest,
};
use crate::errors::AppError;
use crate::repositories::achievement::AchievementRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_achievements(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let category = query.get("category").and_then(|v| v.parse().ok());

    let achievements = state
        .repos
        .achievements
        .get_all_achievements(category, AchievementOrder::DateDesc, page, ACHIEVEMENTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(achievements))
}

#[instrument(skip(state))]
pub async fn get_achievement_by_id(
    achievement_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&achievement_id)?;
    let achievement = state.repos.achievements.get_achievement_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(achievement))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_achievement(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewAchievementRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let achievement = state.repos.achievements.create_achievement(&request).await?;
    Ok(HttpResponse::Created().json(achievement))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_achievement(
    _claims: StaffClaims,
    achievement_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateAchievementRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&achievement_id)?;
    let request = data.into_inner();
    request.validate()?;

    let achievement = state
        .repos
        .achievements
        .update_achievement(&id, &request)
        .await?;
    Ok(HttpResponse::Ok().json(achievement))
}

#[instrument(skip(_claims, state))]
pub async fn delete_achievement(
    _claims: StaffClaims,
    achievement_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&achievement_id)?;
    state.repos.achievements.delete_achievement(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
