//! Authentication extractor for Axum handlers
//!
//! `AuthUser` requires a valid JWT bearer token and resolves the user row; a
//! missing or bad token rejects the request with 401 before the handler runs.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, ErrorResponse};
use crate::models::{Claims, User};
use crate::repositories::UserRepository;
use crate::services::AuthService;

/// Authenticated user extractor - requires valid authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user
    pub user: User,
    /// JWT claims from the access token
    pub claims: Claims,
}

impl AuthUser {
    /// The authenticated user's id
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

/// Authentication rejection types
#[derive(Debug)]
pub enum AuthRejection {
    /// Missing or invalid Authorization header
    MissingToken,
    /// Token is malformed or expired
    InvalidToken(String),
    /// Database error while fetching user
    DatabaseError(String),
    /// User not found in database
    UserNotFound,
    /// Missing required services in app state
    MissingServices,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AuthRejection::MissingToken => {
                tracing::debug!("Authentication rejected: missing token");
                (StatusCode::UNAUTHORIZED, ApiError::Unauthorized)
            }
            AuthRejection::InvalidToken(reason) => {
                tracing::debug!(reason = %reason, "Authentication rejected: invalid token");
                (StatusCode::UNAUTHORIZED, ApiError::InvalidToken(reason))
            }
            AuthRejection::DatabaseError(e) => {
                tracing::error!(error = %e, "Authentication rejected: database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::Internal(format!("Failed to fetch user: {}", e)),
                )
            }
            AuthRejection::UserNotFound => {
                tracing::warn!("Authentication rejected: user not found");
                (
                    StatusCode::UNAUTHORIZED,
                    ApiError::InvalidToken("user not found".to_string()),
                )
            }
            AuthRejection::MissingServices => {
                tracing::error!("Authentication rejected: missing services in app state");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::Internal("Authentication services not configured".to_string()),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: error.error_code(),
            message: error.to_string(),
            details: None,
        });

        (status, body).into_response()
    }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts).ok_or(AuthRejection::MissingToken)?;

        let auth_service = parts
            .extensions
            .get::<AuthService>()
            .ok_or(AuthRejection::MissingServices)?;

        let claims = auth_service
            .verify_access_token(token)
            .map_err(|e| AuthRejection::InvalidToken(e.to_string()))?;

        let user_repo = parts
            .extensions
            .get::<UserRepository>()
            .ok_or(AuthRejection::MissingServices)?;

        let user = user_repo
            .find_by_id(claims.sub)
            .await
            .map_err(|e| AuthRejection::DatabaseError(e.to_string()))?
            .ok_or(AuthRejection::UserNotFound)?;

        Ok(AuthUser { user, claims })
    }
}
