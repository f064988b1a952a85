use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::constants::{
    HOME_FEATURED_PROJECTS, HOME_RECENT_POSTS, HOME_SEGMENTS, HOME_UPCOMING_EVENTS,
};
use crate::entities::{blog_post::BlogPost, event::Event, project::Project, segment::Segment};
use crate::errors::AppError;
use crate::repositories::blog_post::BlogPostRepository;
use crate::repositories::event::EventRepository;
use crate::repositories::project::ProjectRepository;
use crate::repositories::segment::SegmentRepository;
use crate::AppState;

#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Club Website API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Serialize)]
struct HomePage {
    segments: Vec<Segment>,
    recent_posts: Vec<BlogPost>,
    upcoming_events: Vec<Event>,
    featured_projects: Vec<Project>,
}

/// Landing page aggregate: a slice of each public content type.
#[instrument(skip(state))]
pub async fn home_page(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let segments = state.repos.segments.get_first_segments(HOME_SEGMENTS).await?;
    let recent_posts = state
        .blog_handler
        .blog_post_repo
        .get_recent_published_posts(HOME_RECENT_POSTS)
        .await?;
    let upcoming_events = state
        .repos
        .events
        .get_upcoming_events(HOME_UPCOMING_EVENTS)
        .await?;
    let featured_projects = state
        .repos
        .projects
        .get_completed_projects(HOME_FEATURED_PROJECTS)
        .await?;

    Ok(HttpResponse::Ok().json(HomePage {
        segments,
        recent_posts,
        upcoming_events,
        featured_projects,
    }))
}
