//! Read-only access to the worker-maintained title cache

use sqlx::PgPool;

use crate::models::TitleInfo;

const TITLE_COLUMNS: &str = "id, title, rank, year, kind, genres, website";

/// Repository for cached title metadata
#[derive(Clone)]
pub struct TitleRepository {
    pool: PgPool,
}

impl TitleRepository {
    /// Create a new TitleRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All cached titles, best rank first
    pub async fn find_all(&self) -> Result<Vec<TitleInfo>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM title_info ORDER BY rank ASC NULLS LAST, title ASC",
            TITLE_COLUMNS
        );
        sqlx::query_as::<_, TitleInfo>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Cached titles of one kind (`Movie` / `TVSeries`), best rank first
    pub async fn find_by_kind(&self, kind: &str) -> Result<Vec<TitleInfo>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM title_info WHERE kind = $1 \
             ORDER BY rank ASC NULLS LAST, title ASC",
            TITLE_COLUMNS
        );
        sqlx::query_as::<_, TitleInfo>(&sql)
            .bind(kind)
            .fetch_all(&self.pool)
            .await
    }
}
