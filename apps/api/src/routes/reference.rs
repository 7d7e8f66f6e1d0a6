//! CRUD route handlers for the shared reference tables
//!
//! Genres, platforms, bookshops and editorials are global lookups shared by
//! every user; endpoints still require authentication.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::models::{Genre, GenreInput, VenueInput};
use crate::repositories::{
    BookshopRepository, EditorialRepository, GenreRepository, PlatformRepository,
};

/// State shared by the reference-data handlers
#[derive(Clone)]
pub struct ReferenceState {
    pub genres: GenreRepository,
    pub platforms: PlatformRepository,
    pub bookshops: BookshopRepository,
    pub editorials: EditorialRepository,
}

/// Create the reference-data router, mounted at the API root
pub fn reference_router(state: ReferenceState) -> Router {
    Router::new()
        .route("/genres", post(create_genre).get(list_genres).put(update_genre))
        .route("/genres/:id", get(find_genre).delete(remove_genre))
        .route(
            "/platforms",
            post(create_platform).get(list_platforms).put(update_platform),
        )
        .route("/platforms/:id", get(find_platform).delete(remove_platform))
        .route(
            "/bookshops",
            post(create_bookshop).get(list_bookshops).put(update_bookshop),
        )
        .route("/bookshops/:id", get(find_bookshop).delete(remove_bookshop))
        .route(
            "/editorials",
            post(create_editorial).get(list_editorials).put(update_editorial),
        )
        .route(
            "/editorials/:id",
            get(find_editorial).delete(remove_editorial),
        )
        .with_state(state)
}

// ========== Genres ==========

/// Query string for genre listing
#[derive(Debug, Deserialize)]
struct GenreQuery {
    /// When present, restrict to literary (non-zero) or audiovisual (0) genres
    literary: Option<i32>,
}

async fn create_genre(
    _auth: AuthUser,
    State(state): State<ReferenceState>,
    Json(input): Json<GenreInput>,
) -> ApiResult<impl IntoResponse> {
    if input.id.is_some() {
        return Err(ApiError::invalid("genre", "id_present"));
    }
    if input.name.trim().is_empty() {
        return Err(ApiError::invalid("genre", "name"));
    }
    let genre = state.genres.create(&input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

async fn update_genre(
    _auth: AuthUser,
    State(state): State<ReferenceState>,
    Json(input): Json<GenreInput>,
) -> ApiResult<Json<Genre>> {
    let id = input.id.ok_or(ApiError::invalid("genre", "id_missing"))?;
    if input.name.trim().is_empty() {
        return Err(ApiError::invalid("genre", "name"));
    }
    let genre = state
        .genres
        .update(id, &input)
        .await?
        .ok_or_else(|| ApiError::not_found("genre", id.to_string()))?;
    Ok(Json(genre))
}

async fn list_genres(
    _auth: AuthUser,
    State(state): State<ReferenceState>,
    Query(query): Query<GenreQuery>,
) -> ApiResult<Json<Vec<Genre>>> {
    let genres = state.genres.find_all(query.literary).await?;
    Ok(Json(genres))
}

async fn find_genre(
    _auth: AuthUser,
    State(state): State<ReferenceState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Genre>> {
    let genre = state
        .genres
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("genre", id.to_string()))?;
    Ok(Json(genre))
}

async fn remove_genre(
    _auth: AuthUser,
    State(state): State<ReferenceState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !state.genres.delete(id).await? {
        return Err(ApiError::not_found("genre", id.to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ========== Venues (platforms / bookshops / editorials) ==========

fn validate_venue(entity: &'static str, input: &VenueInput, require_name: bool) -> ApiResult<()> {
    if require_name && input.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        return Err(ApiError::invalid(entity, "name"));
    }
    if input.url.trim().is_empty() {
        return Err(ApiError::invalid(entity, "url"));
    }
    Ok(())
}

macro_rules! venue_handlers {
    ($entity:literal, $field:ident, $require_name:literal,
     $create:ident, $update:ident, $list:ident, $find:ident, $remove:ident) => {
        async fn $create(
            _auth: AuthUser,
            State(state): State<ReferenceState>,
            Json(input): Json<VenueInput>,
        ) -> ApiResult<impl IntoResponse> {
            if input.id.is_some() {
                return Err(ApiError::invalid($entity, "id_present"));
            }
            validate_venue($entity, &input, $require_name)?;
            let row = state.$field.create(&input).await?;
            Ok((StatusCode::CREATED, Json(row)))
        }

        async fn $update(
            _auth: AuthUser,
            State(state): State<ReferenceState>,
            Json(input): Json<VenueInput>,
        ) -> ApiResult<impl IntoResponse> {
            let id = input.id.ok_or(ApiError::invalid($entity, "id_missing"))?;
            validate_venue($entity, &input, $require_name)?;
            let row = state
                .$field
                .update(id, &input)
                .await?
                .ok_or_else(|| ApiError::not_found($entity, id.to_string()))?;
            Ok(Json(row))
        }

        async fn $list(
            _auth: AuthUser,
            State(state): State<ReferenceState>,
        ) -> ApiResult<impl IntoResponse> {
            let rows = state.$field.find_all().await?;
            Ok(Json(rows))
        }

        async fn $find(
            _auth: AuthUser,
            State(state): State<ReferenceState>,
            Path(id): Path<Uuid>,
        ) -> ApiResult<impl IntoResponse> {
            let row = state
                .$field
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::not_found($entity, id.to_string()))?;
            Ok(Json(row))
        }

        async fn $remove(
            _auth: AuthUser,
            State(state): State<ReferenceState>,
            Path(id): Path<Uuid>,
        ) -> ApiResult<StatusCode> {
            if !state.$field.delete(id).await? {
                return Err(ApiError::not_found($entity, id.to_string()));
            }
            Ok(StatusCode::NO_CONTENT)
        }
    };
}

venue_handlers!(
    "platform", platforms, true,
    create_platform, update_platform, list_platforms, find_platform, remove_platform
);
venue_handlers!(
    "bookshop", bookshops, false,
    create_bookshop, update_bookshop, list_bookshops, find_bookshop, remove_bookshop
);
venue_handlers!(
    "editorial", editorials, false,
    create_editorial, update_editorial, list_editorials, find_editorial, remove_editorial
);

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: Option<&str>, url: &str) -> VenueInput {
        VenueInput {
            id: None,
            name: name.map(String::from),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_validate_venue_requires_url() {
        assert!(validate_venue("bookshop", &venue(None, ""), false).is_err());
        assert!(validate_venue("bookshop", &venue(None, "https://x.example"), false).is_ok());
    }

    #[test]
    fn test_validate_venue_name_requirement() {
        let input = venue(None, "https://x.example");
        assert!(validate_venue("platform", &input, true).is_err());
        assert!(validate_venue("platform", &venue(Some("Netflix"), "https://x.example"), true).is_ok());
    }
}
