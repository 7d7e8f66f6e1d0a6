//! Integration tests for the deadline notification sweep queries
//!
//! These tests exercise the window queries against a real database and are
//! skipped automatically when none is reachable.

mod common;

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use watchdue_worker::jobs::deadline_notifications::{
    audiovisuals_ending, audiovisuals_starting, books_ending, notification_window,
};

async fn insert_audiovisual(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    start_date: DateTime<Utc>,
    deadline: DateTime<Utc>,
    check_flag: i32,
) {
    sqlx::query(
        r#"
        INSERT INTO audiovisuals (id, title, platform, platform_url, start_date, deadline, check_flag, user_id)
        VALUES ($1, $2, 'Netflix', 'https://netflix.com', $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(start_date)
    .bind(deadline)
    .bind(check_flag)
    .bind(user_id)
    .execute(pool)
    .await
    .expect("insert audiovisual");
}

async fn insert_book(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    deadline: DateTime<Utc>,
    check_flag: i32,
) {
    sqlx::query(
        r#"
        INSERT INTO books (id, title, bookshop, bookshop_url, start_date, deadline, check_flag, user_id)
        VALUES ($1, $2, 'Casa del Libro', 'https://casadellibro.com', $3, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(deadline)
    .bind(check_flag)
    .bind(user_id)
    .execute(pool)
    .await
    .expect("insert book");
}

#[tokio::test]
async fn starting_window_returns_pending_items_once() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("starting"), "Ana").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);
    let marker = format!("Premiere {}", Uuid::new_v4());

    // starts in 6 hours, deadline well outside the window
    insert_audiovisual(
        &pool,
        user_id,
        &marker,
        now + Duration::hours(6),
        now + Duration::days(30),
        0,
    )
    .await;

    let items = audiovisuals_starting(&pool, from, to).await.unwrap();
    let hits: Vec<_> = items.iter().filter(|i| i.title == marker).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].venue.as_deref(), Some("Netflix"));
    assert_eq!(hits[0].user_name, "Ana");

    // the same row must not surface through the deadline query
    let ending = audiovisuals_ending(&pool, from, to).await.unwrap();
    assert!(ending.iter().all(|i| i.title != marker));
}

#[tokio::test]
async fn ending_window_returns_pending_items() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("ending"), "Bea").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);
    let marker = format!("Leaving {}", Uuid::new_v4());

    insert_audiovisual(
        &pool,
        user_id,
        &marker,
        now - Duration::days(30),
        now + Duration::hours(12),
        0,
    )
    .await;

    let items = audiovisuals_ending(&pool, from, to).await.unwrap();
    assert_eq!(items.iter().filter(|i| i.title == marker).count(), 1);
}

#[tokio::test]
async fn checked_items_are_excluded() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("checked"), "Cruz").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);
    let marker = format!("Seen {}", Uuid::new_v4());

    // in-window on both dates, but already acknowledged
    insert_audiovisual(
        &pool,
        user_id,
        &marker,
        now + Duration::hours(2),
        now + Duration::hours(20),
        1,
    )
    .await;

    let starting = audiovisuals_starting(&pool, from, to).await.unwrap();
    assert!(starting.iter().all(|i| i.title != marker));

    let ending = audiovisuals_ending(&pool, from, to).await.unwrap();
    assert!(ending.iter().all(|i| i.title != marker));
}

#[tokio::test]
async fn out_of_window_items_are_excluded() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("window"), "Drew").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);

    let past = format!("Past {}", Uuid::new_v4());
    let far = format!("Far {}", Uuid::new_v4());

    // deadline an hour ago: too late to remind
    insert_audiovisual(
        &pool,
        user_id,
        &past,
        now - Duration::days(10),
        now - Duration::hours(1),
        0,
    )
    .await;
    // deadline in two days: not due yet
    insert_audiovisual(
        &pool,
        user_id,
        &far,
        now - Duration::days(10),
        now + Duration::days(2),
        0,
    )
    .await;

    let ending = audiovisuals_ending(&pool, from, to).await.unwrap();
    assert!(ending.iter().all(|i| i.title != past && i.title != far));
}

#[tokio::test]
async fn books_alert_on_deadline_with_bookshop_venue() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("books"), "Eli").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);
    let marker = format!("Novel {}", Uuid::new_v4());

    insert_book(&pool, user_id, &marker, now + Duration::hours(3), 0).await;

    let items = books_ending(&pool, from, to).await.unwrap();
    let hits: Vec<_> = items.iter().filter(|i| i.title == marker).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].venue.as_deref(), Some("Casa del Libro"));
    assert_eq!(hits[0].venue_url.as_deref(), Some("https://casadellibro.com"));
}

#[tokio::test]
async fn checked_books_are_excluded() {
    require_db!(pool);
    let user_id = common::insert_user(&pool, &common::unique_email("books-checked"), "Flor").await;

    let now = Utc::now();
    let (from, to) = notification_window(now);
    let marker = format!("Read {}", Uuid::new_v4());

    insert_book(&pool, user_id, &marker, now + Duration::hours(3), 1).await;

    let items = books_ending(&pool, from, to).await.unwrap();
    assert!(items.iter().all(|i| i.title != marker));
}
