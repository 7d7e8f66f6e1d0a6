//! Health check HTTP route handlers
//!
//! - `GET /api/health` - liveness check
//! - `GET /api/health/ready` - readiness check (verifies the database)

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use sqlx::PgPool;

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Database pool, pinged by the readiness probe
    pub db: PgPool,
}

impl HealthState {
    /// Create new health state
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Create the health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/ready", get(readiness))
        .with_state(state)
}

/// Liveness check - returns 200 whenever the server process is up
async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check - verifies database connectivity
async fn readiness(State(state): State<HealthState>) -> impl IntoResponse {
    let database_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();

    let status_code = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if database_ok { "ready" } else { "degraded" },
            "database": if database_ok { "up" } else { "down" },
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let response = liveness().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
