//! Cached title metadata and the suggestion DTO served to clients

use serde::Serialize;
use sqlx::FromRow;
use watchdue_imdb_client::platform_from_url;

/// A row of the worker-maintained `title_info` cache
#[derive(Debug, Clone, FromRow)]
pub struct TitleInfo {
    /// External API identifier
    pub id: String,
    pub title: String,
    pub rank: Option<i32>,
    pub year: Option<i32>,
    /// `Movie` or `TVSeries`
    pub kind: Option<String>,
    /// Comma-joined genre names as delivered by the external API
    pub genres: Option<String>,
    pub website: Option<String>,
}

/// Autocomplete suggestion derived from a cached title
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TitleSuggestion {
    pub title: String,
    pub kind: Option<String>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    /// Platform name derived from the official website URL
    pub platform: String,
    pub website: Option<String>,
}

impl From<TitleInfo> for TitleSuggestion {
    fn from(info: TitleInfo) -> Self {
        let genres = info
            .genres
            .as_deref()
            .map(|g| {
                g.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let platform = info
            .website
            .as_deref()
            .map(platform_from_url)
            .unwrap_or_default();

        Self {
            title: info.title,
            kind: info.kind,
            year: info.year,
            genres,
            platform,
            website: info.website,
        }
    }
}
