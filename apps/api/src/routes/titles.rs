//! Title suggestion route handlers
//!
//! Serves the worker-maintained title cache as autocomplete suggestions:
//! - `GET /api/titles` - all cached titles
//! - `GET /api/titles/:kind` - titles of one kind (`Movie` / `TVSeries`)

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::models::TitleSuggestion;
use crate::repositories::TitleRepository;

/// Create the title suggestions router
pub fn titles_router(repo: TitleRepository) -> Router {
    Router::new()
        .route("/", get(list_all))
        .route("/:kind", get(list_by_kind))
        .with_state(repo)
}

/// All cached title suggestions, best rank first
async fn list_all(
    _auth: AuthUser,
    State(repo): State<TitleRepository>,
) -> ApiResult<Json<Vec<TitleSuggestion>>> {
    let suggestions = repo
        .find_all()
        .await?
        .into_iter()
        .map(TitleSuggestion::from)
        .collect();
    Ok(Json(suggestions))
}

/// Cached title suggestions of one kind
async fn list_by_kind(
    _auth: AuthUser,
    State(repo): State<TitleRepository>,
    Path(kind): Path<String>,
) -> ApiResult<Json<Vec<TitleSuggestion>>> {
    let suggestions = repo
        .find_by_kind(&kind)
        .await?
        .into_iter()
        .map(TitleSuggestion::from)
        .collect();
    Ok(Json(suggestions))
}
