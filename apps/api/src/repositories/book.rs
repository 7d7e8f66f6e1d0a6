//! Book repository
//!
//! User-scoped like the audiovisual repository.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Book, BookInput};

const BOOK_COLUMNS: &str = "id, title, author, genre, editorial, bookshop, bookshop_url, \
     start_date, deadline, check_flag, user_id, created_at, updated_at";

/// Repository for book database operations
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Create a new BookRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find one of the user's books by ID
    pub async fn find_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Book>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM books WHERE id = $1 AND user_id = $2",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// List all of the user's books, soonest deadline first
    pub async fn find_all(&self, user_id: Uuid) -> Result<Vec<Book>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM books WHERE user_id = $1 ORDER BY deadline ASC",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new book for the user
    pub async fn create(
        &self,
        user_id: Uuid,
        input: &BookInput,
        title: &str,
    ) -> Result<Book, sqlx::Error> {
        let sql = format!(
            "INSERT INTO books \
             (title, author, genre, editorial, bookshop, bookshop_url, \
              start_date, deadline, check_flag, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&sql)
            .bind(title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(&input.editorial)
            .bind(&input.bookshop)
            .bind(&input.bookshop_url)
            .bind(input.start_date)
            .bind(input.deadline)
            .bind(input.check_flag)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Update one of the user's books, returning None when absent
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        input: &BookInput,
        title: &str,
    ) -> Result<Option<Book>, sqlx::Error> {
        let sql = format!(
            "UPDATE books SET \
             title = $1, author = $2, genre = $3, editorial = $4, bookshop = $5, \
             bookshop_url = $6, start_date = $7, deadline = $8, check_flag = $9, \
             updated_at = now() \
             WHERE id = $10 AND user_id = $11 RETURNING {}",
            BOOK_COLUMNS
        );
        sqlx::query_as::<_, Book>(&sql)
            .bind(title)
            .bind(&input.author)
            .bind(&input.genre)
            .bind(&input.editorial)
            .bind(&input.bookshop)
            .bind(&input.bookshop_url)
            .bind(input.start_date)
            .bind(input.deadline)
            .bind(input.check_flag)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete one of the user's books, returning whether a row was removed
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
