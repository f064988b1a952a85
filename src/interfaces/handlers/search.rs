use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::search::SearchCategory;
use crate::errors::AppError;
use crate::AppState;

/// `q` is the keyword, `category` narrows the scan. An unknown
/// category falls back to searching everything.
#[instrument(skip(state, query))]
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let q = query.get("q").map(String::as_str).unwrap_or("");
    let category = query
        .get("category")
        .and_then(|v| v.parse().ok())
        .unwrap_or(SearchCategory::All);

    let results = state.search_handler.search(q, category).await?;
    Ok(HttpResponse::Ok().json(results))
}
