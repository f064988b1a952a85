use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{PROJECTS_PER_PAGE, RELATED_ITEMS};
use crate::entities::project::{NewProjectRequest, ProjectDetail, UpdateProjectRequest};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_all_projects(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let segment = query.get("segment").and_then(|v| Uuid::parse_str(v).ok());
    let status = query.get("status").and_then(|v| v.parse().ok());

    let projects = state
        .repos
        .projects
        .get_all_projects(segment, status, page, PROJECTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

/// Project detail with its team and other projects from the same
/// segment.
#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&project_id)?;

    let project = state.repos.projects.get_project_by_id(&id).await?;
    let team_members = state.repos.projects.get_project_team(&id).await?;
    let related_projects = match project.segment_id {
        Some(segment_id) => {
            state
                .repos
                .projects
                .get_related_projects(&segment_id, &id, RELATED_ITEMS)
                .await?
        }
        None => Vec::new(),
    };

    Ok(HttpResponse::Ok().json(ProjectDetail {
        project,
        team_members,
        related_projects,
    }))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let request = data.into_inner();
    request.validate()?;

    let project = state.repos.projects.create_project(&request).await?;
    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_project(
    _claims: StaffClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&project_id)?;
    let request = data.into_inner();
    request.validate()?;

    let project = state.repos.projects.update_project(&id, &request).await?;
    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project(
    _claims: StaffClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&project_id)?;
    state.repos.projects.delete_project(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
