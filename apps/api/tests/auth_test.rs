//! Integration tests for the authentication flow
//!
//! Registration (valid, duplicate email, invalid email, weak password) and
//! login (valid and invalid credentials, token verification). Skipped
//! automatically when no test database is reachable.

mod common;

use axum::{http::StatusCode, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;
use watchdue_shared_config::{CommonConfig, DatabaseConfig, Environment};

use watchdue_api::{build_router, Config};

use common::{cleanup_user, json_post_request, parse_body, unique_email, TEST_JWT_SECRET};

// ========== Test Request/Response Types ==========

#[derive(Debug, Serialize)]
struct RegisterRequest {
    email: String,
    password: String,
    display_name: String,
}

#[derive(Debug, Serialize)]
struct AuthenticateRequest {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    user: UserResponse,
}

#[derive(Debug, Deserialize)]
struct AuthenticateResponse {
    user: UserResponse,
    tokens: TokensResponse,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,
    email: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct TokensResponse {
    access_token: String,
    token_type: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

// ========== Fixtures ==========

fn test_config(database_url: &str) -> Config {
    Config {
        common: CommonConfig {
            database: DatabaseConfig::with_url(database_url),
            title_api: None,
            smtp: None,
            environment: Environment::Development,
            log_level: "info".to_string(),
        },
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_access_expiry: "24h".to_string(),
        cors_allowed_origins: None,
    }
}

fn create_test_app(pool: PgPool) -> Router {
    let config = test_config("postgres://unused");
    build_router(pool, &config)
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "secure_password_123".to_string(),
        display_name: "Test User".to_string(),
    }
}

// ========== Registration Tests ==========

#[tokio::test]
async fn test_register_success() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let email = unique_email();
    let response = app
        .oneshot(json_post_request(
            "/api/auth/register",
            &register_request(&email),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: RegisterResponse = parse_body(response).await;
    assert_eq!(body.user.email, email.to_lowercase());
    assert_eq!(body.user.display_name, "Test User");

    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_register_duplicate_email() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let email = unique_email();
    let request = register_request(&email);

    let response = app
        .clone()
        .oneshot(json_post_request("/api/auth/register", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_post_request("/api/auth/register", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: ErrorResponse = parse_body(response).await;
    assert_eq!(body.code, "CONFLICT");
    assert!(body.message.contains("already exists"));

    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_register_invalid_email() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    for invalid_email in ["invalid-email", "@missing-local.com", "no-dots@example", ""] {
        let response = app
            .clone()
            .oneshot(json_post_request(
                "/api/auth/register",
                &register_request(invalid_email),
            ))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected rejection for {:?}",
            invalid_email
        );
    }
}

#[tokio::test]
async fn test_register_weak_password() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let mut request = register_request(&unique_email());
    request.password = "short".to_string();

    let response = app
        .oneshot(json_post_request("/api/auth/register", &request))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Login Tests ==========

#[tokio::test]
async fn test_authenticate_success() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let email = unique_email();
    let response = app
        .clone()
        .oneshot(json_post_request(
            "/api/auth/register",
            &register_request(&email),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_post_request(
            "/api/authenticate",
            &AuthenticateRequest {
                email: email.clone(),
                password: "secure_password_123".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: AuthenticateResponse = parse_body(response).await;
    assert_eq!(body.user.email, email.to_lowercase());
    assert_eq!(body.tokens.token_type, "Bearer");
    assert!(!body.tokens.access_token.is_empty());
    assert!(body.tokens.expires_in > 0);

    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let email = unique_email();
    let response = app
        .clone()
        .oneshot(json_post_request(
            "/api/auth/register",
            &register_request(&email),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_post_request(
            "/api/authenticate",
            &AuthenticateRequest {
                email: email.clone(),
                password: "wrong_password_123".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_authenticate_unknown_email() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let response = app
        .oneshot(json_post_request(
            "/api/authenticate",
            &AuthenticateRequest {
                email: unique_email(),
                password: "secure_password_123".to_string(),
            },
        ))
        .await
        .unwrap();
    // Same status as a wrong password: no account enumeration
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
