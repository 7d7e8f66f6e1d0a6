//! Shared reference data models: genres, platforms, bookshops, editorials
//!
//! These are plain name/url lookup tables maintained through the API and used
//! by clients to fill in tracked items. They are not user-scoped.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A genre, tagged as audiovisual or literary
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    /// 0 = audiovisual genre, non-zero = literary genre
    pub literary: i32,
}

/// Request body for creating or updating a genre
#[derive(Debug, Clone, Deserialize)]
pub struct GenreInput {
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub literary: i32,
}

/// A streaming platform
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Platform {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

/// A bookshop
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Bookshop {
    pub id: Uuid,
    pub name: Option<String>,
    pub url: String,
}

/// A publishing house
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Editorial {
    pub id: Uuid,
    pub name: Option<String>,
    pub url: String,
}

/// Request body shared by platforms, bookshops and editorials
#[derive(Debug, Clone, Deserialize)]
pub struct VenueInput {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub url: String,
}
