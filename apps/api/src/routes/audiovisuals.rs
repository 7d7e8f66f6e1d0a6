//! Audiovisual CRUD route handlers
//!
//! All endpoints require authentication and operate only on the caller's
//! rows. Create rejects a body that carries an id; update requires one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::models::{Audiovisual, AudiovisualInput};
use crate::repositories::AudiovisualRepository;

/// Create the audiovisuals router
pub fn audiovisuals_router(repo: AudiovisualRepository) -> Router {
    Router::new()
        .route("/", post(create).get(list).put(update))
        .route("/:id", get(find_one).delete(remove))
        .with_state(repo)
}

/// Create a new audiovisual
///
/// # Response
/// - 201 Created
/// - 400 Bad Request: id present, or title/start_date/deadline missing
async fn create(
    auth: AuthUser,
    State(repo): State<AudiovisualRepository>,
    Json(input): Json<AudiovisualInput>,
) -> ApiResult<impl IntoResponse> {
    if input.id.is_some() {
        return Err(ApiError::invalid("audiovisual", "id_present"));
    }
    let (title, _, _) = input.validated()?;

    let item = repo.create(auth.user_id(), &input, &title).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an existing audiovisual
///
/// # Response
/// - 200 OK
/// - 400 Bad Request: id missing, or title/start_date/deadline missing
/// - 404 Not Found: no such row owned by the caller
async fn update(
    auth: AuthUser,
    State(repo): State<AudiovisualRepository>,
    Json(input): Json<AudiovisualInput>,
) -> ApiResult<Json<Audiovisual>> {
    let id = input
        .id
        .ok_or(ApiError::invalid("audiovisual", "id_missing"))?;
    let (title, _, _) = input.validated()?;

    let item = repo
        .update(id, auth.user_id(), &input, &title)
        .await?
        .ok_or_else(|| ApiError::not_found("audiovisual", id.to_string()))?;
    Ok(Json(item))
}

/// List the caller's audiovisuals
async fn list(
    auth: AuthUser,
    State(repo): State<AudiovisualRepository>,
) -> ApiResult<Json<Vec<Audiovisual>>> {
    let items = repo.find_all(auth.user_id()).await?;
    Ok(Json(items))
}

/// Fetch one of the caller's audiovisuals
async fn find_one(
    auth: AuthUser,
    State(repo): State<AudiovisualRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Audiovisual>> {
    let item = repo
        .find_by_id(id, auth.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("audiovisual", id.to_string()))?;
    Ok(Json(item))
}

/// Delete one of the caller's audiovisuals
async fn remove(
    auth: AuthUser,
    State(repo): State<AudiovisualRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = repo.delete(id, auth.user_id()).await?;
    if !deleted {
        return Err(ApiError::not_found("audiovisual", id.to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
