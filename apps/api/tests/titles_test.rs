//! Integration tests for the title suggestion endpoints
//!
//! Seeds the `title_info` cache directly and checks the suggestion mapping
//! (genre splitting, platform derivation, kind filtering). Skipped
//! automatically when no test database is reachable.

mod common;

use axum::{http::StatusCode, Router};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;
use watchdue_shared_config::{CommonConfig, DatabaseConfig, Environment};

use watchdue_api::{build_router, Config};

use common::{auth_request, cleanup_user, json_post_request, parse_body, unique_email, TEST_JWT_SECRET};

fn create_test_app(pool: PgPool) -> Router {
    let config = Config {
        common: CommonConfig {
            database: DatabaseConfig::with_url("postgres://unused"),
            title_api: None,
            smtp: None,
            environment: Environment::Development,
            log_level: "info".to_string(),
        },
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_access_expiry: "24h".to_string(),
        cors_allowed_origins: None,
    };
    build_router(pool, &config)
}

async fn register_and_login(app: &Router) -> (String, String) {
    let email = unique_email();

    let response = app
        .clone()
        .oneshot(json_post_request(
            "/api/auth/register",
            &serde_json::json!({
                "email": email,
                "password": "secure_password_123",
                "display_name": "Test User",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_post_request(
            "/api/authenticate",
            &serde_json::json!({ "email": email, "password": "secure_password_123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = parse_body(response).await;
    let token = body["tokens"]["access_token"].as_str().unwrap().to_string();
    (email, token)
}

async fn seed_title(
    pool: &PgPool,
    id: &str,
    title: &str,
    kind: &str,
    genres: &str,
    website: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO title_info (id, title, rank, year, kind, genres, website) \
         VALUES ($1, $2, 1, 2020, $3, $4, $5) \
         ON CONFLICT (id) DO UPDATE SET title = EXCLUDED.title",
    )
    .bind(id)
    .bind(title)
    .bind(kind)
    .bind(genres)
    .bind(website)
    .execute(pool)
    .await
    .expect("seed title");
}

async fn remove_title(pool: &PgPool, id: &str) {
    let _ = sqlx::query("DELETE FROM title_info WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await;
}

#[tokio::test]
async fn test_titles_suggestions_map_cache_rows() {
    require_db!(pool);
    let app = create_test_app(pool.clone());
    let (email, token) = register_and_login(&app).await;

    let id = format!("tt-sugg-{}", Uuid::new_v4());
    let marker = format!("Suggestion {}", Uuid::new_v4());
    seed_title(
        &pool,
        &id,
        &marker,
        "Movie",
        "Crime, Drama",
        Some("https://www.netflix.com/title/1"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(auth_request("GET", "/api/titles", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = parse_body(response).await;
    let suggestion = body
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["title"] == marker.as_str())
        .expect("seeded title in suggestions");

    assert_eq!(suggestion["kind"], "Movie");
    assert_eq!(suggestion["platform"], "Netflix");
    assert_eq!(suggestion["genres"], serde_json::json!(["Crime", "Drama"]));

    remove_title(&pool, &id).await;
    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_titles_filtered_by_kind() {
    require_db!(pool);
    let app = create_test_app(pool.clone());
    let (email, token) = register_and_login(&app).await;

    let movie_id = format!("tt-movie-{}", Uuid::new_v4());
    let show_id = format!("tt-show-{}", Uuid::new_v4());
    let movie_title = format!("Movie {}", Uuid::new_v4());
    let show_title = format!("Show {}", Uuid::new_v4());
    seed_title(&pool, &movie_id, &movie_title, "Movie", "Drama", None).await;
    seed_title(&pool, &show_id, &show_title, "TVSeries", "Drama", None).await;

    let response = app
        .clone()
        .oneshot(auth_request("GET", "/api/titles/TVSeries", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = parse_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["title"].as_str())
        .collect();

    assert!(titles.contains(&show_title.as_str()));
    assert!(!titles.contains(&movie_title.as_str()));

    remove_title(&pool, &movie_id).await;
    remove_title(&pool, &show_id).await;
    cleanup_user(&pool, &email).await;
}

#[tokio::test]
async fn test_titles_require_authentication() {
    require_db!(pool);
    let app = create_test_app(pool.clone());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/api/titles")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
