//! Book CRUD route handlers
//!
//! Mirrors the audiovisual endpoints: authenticated, user-scoped, create
//! rejects a body carrying an id and update requires one.

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
use crate::models::{Book, BookInput};
use crate::repositories::BookRepository;

/// Create the books router
pub fn books_router(repo: BookRepository) -> Router {
    Router::new()
        .route("/", post(create).get(list).put(update))
        .route("/:id", get(find_one).delete(remove))
        .with_state(repo)
}

/// Create a new book
async fn create(
    auth: AuthUser,
    State(repo): State<BookRepository>,
    Json(input): Json<BookInput>,
) -> ApiResult<impl IntoResponse> {
    if input.id.is_some() {
        return Err(ApiError::invalid("book", "id_present"));
    }
    let (title, _, _) = input.validated()?;

    let item = repo.create(auth.user_id(), &input, &title).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an existing book
async fn update(
    auth: AuthUser,
    State(repo): State<BookRepository>,
    Json(input): Json<BookInput>,
) -> ApiResult<Json<Book>> {
    let id = input.id.ok_or(ApiError::invalid("book", "id_missing"))?;
    let (title, _, _) = input.validated()?;

    let item = repo
        .update(id, auth.user_id(), &input, &title)
        .await?
        .ok_or_else(|| ApiError::not_found("book", id.to_string()))?;
    Ok(Json(item))
}

/// List the caller's books
async fn list(auth: AuthUser, State(repo): State<BookRepository>) -> ApiResult<Json<Vec<Book>>> {
    let items = repo.find_all(auth.user_id()).await?;
    Ok(Json(items))
}

/// Fetch one of the caller's books
async fn find_one(
    auth: AuthUser,
    State(repo): State<BookRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Book>> {
    let item = repo
        .find_by_id(id, auth.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("book", id.to_string()))?;
    Ok(Json(item))
}

/// Delete one of the caller's books
async fn remove(
    auth: AuthUser,
    State(repo): State<BookRepository>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = repo.delete(id, auth.user_id()).await?;
    if !deleted {
        return Err(ApiError::not_found("book", id.to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
