//! Audiovisual (movie/show) tracked-item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// A tracked movie or show with a watch-by deadline
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Audiovisual {
    pub id: Uuid,
    pub title: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub platform_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    /// 0 = reminder pending, non-zero = acknowledged
    pub check_flag: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating an audiovisual
#[derive(Debug, Clone, Deserialize)]
pub struct AudiovisualInput {
    /// Must be absent on create and present on update
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub platform_url: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_flag: i32,
}

impl AudiovisualInput {
    /// Validate the required fields, returning them by value
    pub fn validated(&self) -> ApiResult<(String, DateTime<Utc>, DateTime<Utc>)> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::invalid("audiovisual", "title"))?;
        let start_date = self
            .start_date
            .ok_or(ApiError::invalid("audiovisual", "start_date"))?;
        let deadline = self
            .deadline
            .ok_or(ApiError::invalid("audiovisual", "deadline"))?;
        Ok((title.to_string(), start_date, deadline))
    }
}
