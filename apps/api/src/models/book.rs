//! Book tracked-item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// A tracked book with a read-by deadline
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub editorial: Option<String>,
    pub bookshop: Option<String>,
    pub bookshop_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    /// 0 = reminder pending, non-zero = acknowledged
    pub check_flag: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating a book
#[derive(Debug, Clone, Deserialize)]
pub struct BookInput {
    /// Must be absent on create and present on update
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub editorial: Option<String>,
    pub bookshop: Option<String>,
    pub bookshop_url: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_flag: i32,
}

impl BookInput {
    /// Validate the required fields, returning them by value
    pub fn validated(&self) -> ApiResult<(String, DateTime<Utc>, DateTime<Utc>)> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::invalid("book", "title"))?;
        let start_date = self
            .start_date
            .ok_or(ApiError::invalid("book", "start_date"))?;
        let deadline = self.deadline.ok_or(ApiError::invalid("book", "deadline"))?;
        Ok((title.to_string(), start_date, deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_rejects_missing_title() {
        let input = BookInput {
            id: None,
            title: None,
            author: None,
            genre: None,
            editorial: None,
            bookshop: None,
            bookshop_url: None,
            start_date: Some(Utc::now()),
            deadline: Some(Utc::now()),
            check_flag: 0,
        };
        assert!(input.validated().is_err());
    }
}
