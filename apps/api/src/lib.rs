//! watchdue REST API
//!
//! Axum server exposing JWT-authenticated CRUD for tracked audiovisuals and
//! books, shared reference data, title autocomplete suggestions, and the
//! registration/login endpoints.

use axum::{http::header, http::Method, routing::get, Extension, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{ApiError, ApiResult, ErrorResponse};

use repositories::{
    AudiovisualRepository, BookRepository, BookshopRepository, EditorialRepository,
    GenreRepository, PlatformRepository, TitleRepository, UserRepository,
};
use routes::{
    audiovisuals_router, auth_router, books_router, health_router, reference_router,
    titles_router, AuthState, HealthState, ReferenceState,
};
use services::{AuthConfig, AuthService};

/// Build the CORS layer based on configuration.
///
/// In production, only origins listed in `CORS_ORIGINS` are allowed; an empty
/// configuration rejects cross-origin requests. Development without
/// configured origins falls back to permissive CORS for convenience.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let is_production = config.is_production();

    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers([
                        header::AUTHORIZATION,
                        header::CONTENT_TYPE,
                        header::ACCEPT,
                        header::ORIGIN,
                    ])
                    .allow_credentials(true)
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        _ if is_production => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode, CORS requests will be rejected"
            );
            CorsLayer::new()
        }
        _ => {
            tracing::warn!("Using permissive CORS in development mode");
            CorsLayer::permissive()
        }
    }
}

/// Build the full application router
///
/// All endpoints live under `/api`. The auth service and user repository are
/// layered as extensions so the `AuthUser` extractor can reach them.
pub fn build_router(pool: PgPool, config: &Config) -> Router {
    let user_repo = UserRepository::new(pool.clone());

    let auth_config =
        AuthConfig::with_expiry_string(config.jwt_secret.clone(), &config.jwt_access_expiry);
    let auth_service = AuthService::new(user_repo.clone(), auth_config);

    let reference_state = ReferenceState {
        genres: GenreRepository::new(pool.clone()),
        platforms: PlatformRepository::new(pool.clone()),
        bookshops: BookshopRepository::new(pool.clone()),
        editorials: EditorialRepository::new(pool.clone()),
    };

    let api = Router::new()
        .merge(auth_router(AuthState::new(auth_service.clone())))
        .merge(reference_router(reference_state))
        .nest("/health", health_router(HealthState::new(pool.clone())))
        .nest(
            "/audiovisuals",
            audiovisuals_router(AudiovisualRepository::new(pool.clone())),
        )
        .nest("/books", books_router(BookRepository::new(pool.clone())))
        .nest("/titles", titles_router(TitleRepository::new(pool.clone())));

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .layer(Extension(user_repo))
        .layer(Extension(auth_service))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

async fn root() -> &'static str {
    "watchdue API"
}
