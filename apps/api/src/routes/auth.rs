//! Authentication REST route handlers
//!
//! - `POST /api/auth/register` - Create a new user account
//! - `POST /api/authenticate` - Authenticate and get a JWT access token

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::models::{AuthTokens, User};
use crate::services::AuthService;

/// Shared application state for auth handlers
#[derive(Clone)]
pub struct AuthState {
    /// Authentication service
    pub auth_service: Arc<AuthService>,
}

impl AuthState {
    /// Create new auth state
    pub fn new(auth_service: AuthService) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
        }
    }
}

/// Create the authentication router
pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/authenticate", post(authenticate))
        .with_state(state)
}

// ========== Request/Response Types ==========

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (min 8 characters)
    pub password: String,
    /// Display name for the user
    pub display_name: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// User's email address
    pub email: String,
    /// User's password
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

/// Authentication response
#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub user: UserResponse,
    pub tokens: AuthTokens,
}

// ========== Route Handlers ==========

/// Register a new user account
///
/// # Response
/// - 201 Created: user registered
/// - 400 Bad Request: invalid input (weak password, invalid email)
/// - 409 Conflict: email already exists
async fn register(
    State(state): State<AuthState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .auth_service
        .register(&req.email, &req.password, &req.display_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    ))
}

/// Authenticate and receive a JWT access token
///
/// # Response
/// - 200 OK: credentials accepted, token in body
/// - 401 Unauthorized: bad credentials (does not reveal which part)
async fn authenticate(
    State(state): State<AuthState>,
    Json(req): Json<AuthenticateRequest>,
) -> ApiResult<Json<AuthenticateResponse>> {
    let (user, tokens) = state
        .auth_service
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(AuthenticateResponse {
        user: user.into(),
        tokens,
    }))
}
