//! Repositories for the shared reference tables
//!
//! Genres, platforms, bookshops and editorials are simple global lookups, so
//! these repositories are small and near-identical; only the genre table has
//! extra shape (the literary flag).

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Bookshop, Editorial, Genre, GenreInput, Platform, VenueInput};

/// Repository for genre database operations
#[derive(Clone)]
pub struct GenreRepository {
    pool: PgPool,
}

impl GenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a genre by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name, literary FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List genres, optionally restricted to literary (non-zero) or
    /// audiovisual (zero) entries
    pub async fn find_all(&self, literary: Option<i32>) -> Result<Vec<Genre>, sqlx::Error> {
        match literary {
            Some(flag) => {
                sqlx::query_as::<_, Genre>(
                    "SELECT id, name, literary FROM genres WHERE literary = $1 ORDER BY name",
                )
                .bind(flag)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Genre>("SELECT id, name, literary FROM genres ORDER BY name")
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    /// Insert a new genre
    pub async fn create(&self, input: &GenreInput) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name, literary) VALUES ($1, $2) RETURNING id, name, literary",
        )
        .bind(&input.name)
        .bind(input.literary)
        .fetch_one(&self.pool)
        .await
    }

    /// Update a genre, returning None when absent
    pub async fn update(&self, id: Uuid, input: &GenreInput) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $1, literary = $2 WHERE id = $3 \
             RETURNING id, name, literary",
        )
        .bind(&input.name)
        .bind(input.literary)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a genre, returning whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// The three venue tables share a shape; a macro keeps the repositories from
// drifting apart.
macro_rules! venue_repository {
    ($repo:ident, $model:ident, $table:literal) => {
        #[derive(Clone)]
        pub struct $repo {
            pool: PgPool,
        }

        impl $repo {
            pub fn new(pool: PgPool) -> Self {
                Self { pool }
            }

            pub async fn find_by_id(&self, id: Uuid) -> Result<Option<$model>, sqlx::Error> {
                sqlx::query_as::<_, $model>(concat!(
                    "SELECT id, name, url FROM ",
                    $table,
                    " WHERE id = $1"
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
            }

            pub async fn find_all(&self) -> Result<Vec<$model>, sqlx::Error> {
                sqlx::query_as::<_, $model>(concat!(
                    "SELECT id, name, url FROM ",
                    $table,
                    " ORDER BY name"
                ))
                .fetch_all(&self.pool)
                .await
            }

            pub async fn create(&self, input: &VenueInput) -> Result<$model, sqlx::Error> {
                sqlx::query_as::<_, $model>(concat!(
                    "INSERT INTO ",
                    $table,
                    " (name, url) VALUES ($1, $2) RETURNING id, name, url"
                ))
                .bind(&input.name)
                .bind(&input.url)
                .fetch_one(&self.pool)
                .await
            }

            pub async fn update(
                &self,
                id: Uuid,
                input: &VenueInput,
            ) -> Result<Option<$model>, sqlx::Error> {
                sqlx::query_as::<_, $model>(concat!(
                    "UPDATE ",
                    $table,
                    " SET name = $1, url = $2 WHERE id = $3 RETURNING id, name, url"
                ))
                .bind(&input.name)
                .bind(&input.url)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
            }

            pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
                let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = $1"))
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }
        }
    };
}

venue_repository!(PlatformRepository, Platform, "platforms");
venue_repository!(BookshopRepository, Bookshop, "bookshops");
venue_repository!(EditorialRepository, Editorial, "editorials");
