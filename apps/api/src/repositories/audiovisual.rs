//! Audiovisual repository
//!
//! All queries are scoped to the owning user; a row that exists but belongs
//! to someone else behaves exactly like a missing row.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Audiovisual, AudiovisualInput};

const AUDIOVISUAL_COLUMNS: &str = "id, title, genre, platform, platform_url, start_date, \
     deadline, check_flag, user_id, created_at, updated_at";

/// Repository for audiovisual database operations
#[derive(Clone)]
pub struct AudiovisualRepository {
    pool: PgPool,
}

impl AudiovisualRepository {
    /// Create a new AudiovisualRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find one of the user's audiovisuals by ID
    pub async fn find_by_id(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Audiovisual>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM audiovisuals WHERE id = $1 AND user_id = $2",
            AUDIOVISUAL_COLUMNS
        );
        sqlx::query_as::<_, Audiovisual>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List all of the user's audiovisuals, soonest deadline first
    pub async fn find_all(&self, user_id: Uuid) -> Result<Vec<Audiovisual>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM audiovisuals WHERE user_id = $1 ORDER BY deadline ASC",
            AUDIOVISUAL_COLUMNS
        );
        sqlx::query_as::<_, Audiovisual>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new audiovisual for the user
    pub async fn create(
        &self,
        user_id: Uuid,
        input: &AudiovisualInput,
        title: &str,
    ) -> Result<Audiovisual, sqlx::Error> {
        let sql = format!(
            "INSERT INTO audiovisuals \
             (title, genre, platform, platform_url, start_date, deadline, check_flag, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            AUDIOVISUAL_COLUMNS
        );
        sqlx::query_as::<_, Audiovisual>(&sql)
            .bind(title)
            .bind(&input.genre)
            .bind(&input.platform)
            .bind(&input.platform_url)
            .bind(input.start_date)
            .bind(input.deadline)
            .bind(input.check_flag)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Update one of the user's audiovisuals, returning None when absent
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        input: &AudiovisualInput,
        title: &str,
    ) -> Result<Option<Audiovisual>, sqlx::Error> {
        let sql = format!(
            "UPDATE audiovisuals SET \
             title = $1, genre = $2, platform = $3, platform_url = $4, \
             start_date = $5, deadline = $6, check_flag = $7, updated_at = now() \
             WHERE id = $8 AND user_id = $9 RETURNING {}",
            AUDIOVISUAL_COLUMNS
        );
        sqlx::query_as::<_, Audiovisual>(&sql)
            .bind(title)
            .bind(&input.genre)
            .bind(&input.platform)
            .bind(&input.platform_url)
            .bind(input.start_date)
            .bind(input.deadline)
            .bind(input.check_flag)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete one of the user's audiovisuals, returning whether a row was removed
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audiovisuals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
