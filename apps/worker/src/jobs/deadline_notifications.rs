//! Deadline notification sweep
//!
//! Once per tick, finds tracked items whose start date or deadline falls
//! within the next 24 hours and which have not been acknowledged, and sends
//! one reminder email per item. A failed send is logged and the sweep
//! continues with the next item; there is no retry or dead-letter handling.

use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::WorkerResult;
use crate::mailer::Notification;
use crate::state::AppState;

/// check_flag value of an item awaiting acknowledgment
const PENDING: i32 = 0;

/// A tracked item due for a reminder, joined with its owner
#[derive(Debug, Clone, FromRow)]
pub struct DueItem {
    /// Item title
    pub title: String,
    /// Platform name (audiovisuals) or bookshop name (books)
    pub venue: Option<String>,
    /// Link to the venue
    pub venue_url: Option<String>,
    /// Owner's email address
    pub user_email: String,
    /// Owner's display name
    pub user_name: String,
}

/// The `[now, now + 24h)` window a sweep covers
pub fn notification_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now, now + Duration::days(1))
}

/// Build the reminder payload for a due item
pub fn to_notification(item: &DueItem, is_start_date: bool) -> Notification {
    Notification {
        name: item.title.clone(),
        message: item.venue.clone().unwrap_or_default(),
        url: item.venue_url.clone().unwrap_or_default(),
        is_start_date,
        recipient_email: item.user_email.clone(),
        recipient_name: item.user_name.clone(),
    }
}

/// Pending audiovisuals whose start date falls inside the window
pub async fn audiovisuals_starting(
    db: &PgPool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> WorkerResult<Vec<DueItem>> {
    let items = sqlx::query_as::<_, DueItem>(
        r#"
        SELECT a.title, a.platform AS venue, a.platform_url AS venue_url,
               u.email AS user_email, u.display_name AS user_name
        FROM audiovisuals a
        JOIN users u ON u.id = a.user_id
        WHERE a.check_flag = $1 AND a.start_date >= $2 AND a.start_date < $3
        ORDER BY a.start_date
        "#,
    )
    .bind(PENDING)
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await?;
    Ok(items)
}

/// Pending audiovisuals whose deadline falls inside the window
pub async fn audiovisuals_ending(
    db: &PgPool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> WorkerResult<Vec<DueItem>> {
    let items = sqlx::query_as::<_, DueItem>(
        r#"
        SELECT a.title, a.platform AS venue, a.platform_url AS venue_url,
               u.email AS user_email, u.display_name AS user_name
        FROM audiovisuals a
        JOIN users u ON u.id = a.user_id
        WHERE a.check_flag = $1 AND a.deadline >= $2 AND a.deadline < $3
        ORDER BY a.deadline
        "#,
    )
    .bind(PENDING)
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await?;
    Ok(items)
}

/// Pending books whose deadline falls inside the window
///
/// Books only alert on the deadline; a book being "available" has no
/// meaningful start event the way a release date does.
pub async fn books_ending(
    db: &PgPool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> WorkerResult<Vec<DueItem>> {
    let items = sqlx::query_as::<_, DueItem>(
        r#"
        SELECT b.title, b.bookshop AS venue, b.bookshop_url AS venue_url,
               u.email AS user_email, u.display_name AS user_name
        FROM books b
        JOIN users u ON u.id = b.user_id
        WHERE b.check_flag = $1 AND b.deadline >= $2 AND b.deadline < $3
        ORDER BY b.deadline
        "#,
    )
    .bind(PENDING)
    .bind(from)
    .bind(to)
    .fetch_all(db)
    .await?;
    Ok(items)
}

/// Execute one notification sweep
pub async fn execute(state: &AppState) -> WorkerResult<()> {
    let mailer = match &state.mailer {
        Some(mailer) => mailer,
        None => {
            tracing::debug!("SMTP not configured, skipping notification sweep");
            return Ok(());
        }
    };

    let (from, to) = notification_window(Utc::now());

    tracing::info!(%from, %to, "Starting deadline notification sweep");

    let mut sent = 0;
    let mut failed = 0;

    let starting = audiovisuals_starting(&state.db, from, to).await?;
    for item in &starting {
        deliver(mailer, &to_notification(item, true), &mut sent, &mut failed).await;
    }

    let ending = audiovisuals_ending(&state.db, from, to).await?;
    for item in &ending {
        deliver(mailer, &to_notification(item, false), &mut sent, &mut failed).await;
    }

    let books = books_ending(&state.db, from, to).await?;
    for item in &books {
        deliver(mailer, &to_notification(item, false), &mut sent, &mut failed).await;
    }

    tracing::info!(sent, failed, "Deadline notification sweep completed");
    Ok(())
}

async fn deliver(
    mailer: &crate::mailer::Mailer,
    notification: &Notification,
    sent: &mut usize,
    failed: &mut usize,
) {
    match mailer.send(notification).await {
        Ok(()) => *sent += 1,
        Err(e) => {
            *failed += 1;
            tracing::warn!(
                error = %e,
                to = %notification.recipient_email,
                item = %notification.name,
                "Failed to send notification email"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_window_spans_one_day() {
        let now = Utc::now();
        let (from, to) = notification_window(now);
        assert_eq!(from, now);
        assert_eq!(to - from, Duration::days(1));
    }

    #[test]
    fn test_to_notification_maps_fields() {
        let item = DueItem {
            title: "Dune".to_string(),
            venue: Some("HBO Max".to_string()),
            venue_url: Some("https://hbomax.com".to_string()),
            user_email: "ana@example.com".to_string(),
            user_name: "Ana".to_string(),
        };

        let n = to_notification(&item, true);
        assert_eq!(n.name, "Dune");
        assert_eq!(n.message, "HBO Max");
        assert_eq!(n.url, "https://hbomax.com");
        assert!(n.is_start_date);
        assert_eq!(n.recipient_email, "ana@example.com");
    }

    #[test]
    fn test_to_notification_defaults_missing_venue() {
        let item = DueItem {
            title: "Dune".to_string(),
            venue: None,
            venue_url: None,
            user_email: "ana@example.com".to_string(),
            user_name: "Ana".to_string(),
        };

        let n = to_notification(&item, false);
        assert_eq!(n.message, "");
        assert_eq!(n.url, "");
        assert!(!n.is_start_date);
    }
}
