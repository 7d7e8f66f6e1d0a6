//! User model and JWT claim types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2id hash, never serialized
    pub password_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// JWT access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: Uuid,
    /// User email, for logging and display
    pub email: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

/// Token payload returned to clients after login/registration
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    /// Bearer access token
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: &'static str,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}
