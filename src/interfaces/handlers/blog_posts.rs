use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::constants::{BLOG_POSTS_PER_PAGE, RELATED_ITEMS};
use crate::entities::blog_post::{BlogOrder, NewBlogPostRequest, UpdateBlogPostRequest};
use crate::errors::AppError;
use crate::repositories::blog_post::BlogPostRepository;
use crate::use_cases::extractors::StaffClaims;
use crate::utils::valid_uuid::valid_uuid;
use crate::AppState;

#[instrument(skip(state, query))]
pub async fn get_published_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let tag = query.get("tag").map(|v| v.to_string());

    let posts = state
        .blog_handler
        .blog_post_repo
        .get_all_blog_posts(true, tag, BlogOrder::PublishedDesc, page, BLOG_POSTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Published detail by slug, with a few related posts attached.
#[instrument(skip(state))]
pub async fn get_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let detail = state
        .blog_handler
        .get_post_with_related(&slug, RELATED_ITEMS)
        .await?;
    Ok(HttpResponse::Ok().json(detail))
}

#[instrument(skip(_claims, state, query))]
pub async fn admin_get_all_blog_posts(
    _claims: StaffClaims,
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query
        .get("page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let tag = query.get("tag").map(|v| v.to_string());

    let posts = state
        .blog_handler
        .blog_post_repo
        .get_all_blog_posts(false, tag, BlogOrder::CreatedDesc, page, BLOG_POSTS_PER_PAGE)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_blog_post_by_id(
    _claims: StaffClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&post_id)?;
    let post = state
        .blog_handler
        .blog_post_repo
        .get_blog_post_by_id(&id)
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

/// The authenticated staff user becomes the author.
#[instrument(skip(claims, state, data))]
pub async fn create_blog_post(
    claims: StaffClaims,
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let author_id = claims.user_id()?;
    let post = state
        .blog_handler
        .create_blog_post(author_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(post))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_blog_post(
    _claims: StaffClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&post_id)?;
    let post = state
        .blog_handler
        .update_blog_post(&id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(_claims, state))]
pub async fn delete_blog_post(
    _claims: StaffClaims,
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&post_id)?;
    state
        .blog_handler
        .blog_post_repo
        .delete_blog_post(&id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
