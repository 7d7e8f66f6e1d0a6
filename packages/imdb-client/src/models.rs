//! Title API response models

use serde::{Deserialize, Serialize};

/// Ranked list response, shaped `{ "items": [...] }`
///
/// The API reports failures in-band through `errorMessage` while still
/// returning HTTP 200, so the field is kept and checked by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleListResponse {
    /// Ranked title items, best first
    #[serde(default)]
    pub items: Vec<TitleItem>,

    /// Non-empty when the API rejected the request (bad key, bad filter)
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
}

/// A single title item, used both as a ranked-list stub and as the
/// per-item detail payload
///
/// Every field except `id` is optional; the API returns sparse objects
/// depending on which endpoint produced them. Numeric fields arrive as
/// strings and are parsed at the persistence boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleItem {
    /// External identifier (e.g., `tt0903747`)
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Rank within the requested list, as a decimal string
    #[serde(default)]
    pub rank: Option<String>,

    /// Release year, as a decimal string
    #[serde(default)]
    pub year: Option<String>,

    /// Title kind (`Movie` or `TVSeries`)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Comma-joined genre names
    #[serde(default)]
    pub genres: Option<String>,

    /// Official website URL, only present in `ExternalSites` detail
    #[serde(rename = "officialWebsite", default)]
    pub official_website: Option<String>,
}

impl TitleItem {
    /// Parse the rank string into an integer, if present and well-formed
    pub fn rank_value(&self) -> Option<i32> {
        self.rank.as_deref().and_then(|r| r.parse().ok())
    }

    /// Parse the year string into an integer, if present and well-formed
    pub fn year_value(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.parse().ok())
    }
}

/// Title kind as reported by the external API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleKind {
    /// Feature film
    Movie,
    /// Television series
    TvSeries,
}

impl TitleKind {
    /// The exact string the external API uses for this kind
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvSeries => "TVSeries",
        }
    }

    /// Parse the external API's kind string
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "Movie" => Some(Self::Movie),
            "TVSeries" => Some(Self::TvSeries),
            _ => None,
        }
    }
}

impl std::fmt::Display for TitleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_item_sparse_deserialization() {
        let item: TitleItem = serde_json::from_str(r#"{"id": "tt0903747"}"#).unwrap();
        assert_eq!(item.id, "tt0903747");
        assert!(item.title.is_none());
        assert!(item.official_website.is_none());
    }

    #[test]
    fn test_title_item_full_deserialization() {
        let json = r#"{
            "id": "tt0903747",
            "title": "Breaking Bad",
            "rank": "3",
            "year": "2008",
            "type": "TVSeries",
            "genres": "Crime, Drama, Thriller",
            "officialWebsite": "https://www.netflix.com/title/70143836"
        }"#;
        let item: TitleItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rank_value(), Some(3));
        assert_eq!(item.year_value(), Some(2008));
        assert_eq!(item.kind.as_deref(), Some("TVSeries"));
        assert_eq!(
            item.official_website.as_deref(),
            Some("https://www.netflix.com/title/70143836")
        );
    }

    #[test]
    fn test_malformed_rank_is_none() {
        let item: TitleItem =
            serde_json::from_str(r#"{"id": "tt1", "rank": "n/a"}"#).unwrap();
        assert_eq!(item.rank_value(), None);
    }

    #[test]
    fn test_list_response_error_message() {
        let resp: TitleListResponse =
            serde_json::from_str(r#"{"items": [], "errorMessage": "Invalid API Key"}"#).unwrap();
        assert!(resp.items.is_empty());
        assert_eq!(resp.error_message.as_deref(), Some("Invalid API Key"));
    }

    #[test]
    fn test_title_kind_roundtrip() {
        assert_eq!(TitleKind::from_api_str("Movie"), Some(TitleKind::Movie));
        assert_eq!(TitleKind::from_api_str("TVSeries"), Some(TitleKind::TvSeries));
        assert_eq!(TitleKind::from_api_str("Short"), None);
        assert_eq!(TitleKind::Movie.to_string(), "Movie");
        assert_eq!(TitleKind::TvSeries.to_string(), "TVSeries");
    }
}
