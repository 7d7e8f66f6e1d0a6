//! Mock title metadata server for testing ingestion jobs
//!
//! Provides a [`MockTitleServer`] that simulates the external IMDB-like API
//! endpoints for testing title refresh and suggestion logic without a real
//! upstream service.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock title API server for testing title ingestion
///
/// This struct wraps a [`wiremock::MockServer`] and provides convenience
/// methods for mounting ranked-list and per-title detail responses, plus the
/// API's error scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use watchdue_test_utils::{MockTitleServer, TitleFixture};
///
/// #[tokio::test]
/// async fn test_refresh() {
///     let server = MockTitleServer::start().await;
///     let titles = vec![TitleFixture::ranked("tt0111161", "The Shawshank Redemption", 1)];
///     server.mock_list_success("MostPopularMovies", &titles).await;
///
///     // Configure the TitleClient with server.url() and server.api_key()
/// }
/// ```
pub struct MockTitleServer {
    server: MockServer,
    api_key: String,
}

impl MockTitleServer {
    /// Start a new mock title server with the default API key
    pub async fn start() -> Self {
        Self::start_with_api_key("k_test123").await
    }

    /// Start a new mock title server with a custom API key
    pub async fn start_with_api_key(api_key: &str) -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            api_key: api_key.to_string(),
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Mount a mock for a successful ranked list for the given filter
    pub async fn mock_list_success(&self, filter: &str, titles: &[TitleFixture]) {
        let items: Vec<serde_json::Value> = titles.iter().map(TitleFixture::to_stub_json).collect();

        Mock::given(method("GET"))
            .and(path(format!("/{}/{}", filter, self.api_key)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": items,
                "errorMessage": ""
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an empty ranked list
    pub async fn mock_list_empty(&self, filter: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}/{}", filter, self.api_key)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "errorMessage": ""
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an in-band API error on the ranked list
    pub async fn mock_list_api_error(&self, filter: &str, message: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{}/{}", filter, self.api_key)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "errorMessage": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for an HTTP-level failure on the ranked list
    pub async fn mock_list_http_error(&self, filter: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/{}/{}", filter, self.api_key)))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Mount mocks for both detail endpoints of a title fixture
    pub async fn mock_title_detail(&self, title: &TitleFixture) {
        Mock::given(method("GET"))
            .and(path(format!("/Title/{}/{}", self.api_key, title.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(title.to_detail_json()))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/ExternalSites/{}/{}", self.api_key, title.id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(title.to_external_sites_json()))
            .mount(&self.server)
            .await;
    }

    /// Mount list and detail mocks for a whole filter in one call
    pub async fn mock_filter(&self, filter: &str, titles: &[TitleFixture]) {
        self.mock_list_success(filter, titles).await;
        for title in titles {
            self.mock_title_detail(title).await;
        }
    }
}

/// Builder for title API response fixtures
#[derive(Debug, Clone)]
pub struct TitleFixture {
    /// External title identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Rank within the requested list
    pub rank: i32,
    /// Release year
    pub year: i32,
    /// Title kind string (`Movie` or `TVSeries`)
    pub kind: String,
    /// Comma-joined genres
    pub genres: String,
    /// Official website URL
    pub website: Option<String>,
}

impl TitleFixture {
    /// Create a ranked movie fixture with typical detail fields
    pub fn ranked(id: &str, title: &str, rank: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            rank,
            year: 2020,
            kind: "Movie".to_string(),
            genres: "Drama".to_string(),
            website: Some(format!("https://www.example.com/{}", id)),
        }
    }

    /// Create a ranked show fixture
    pub fn show(id: &str, title: &str, rank: i32) -> Self {
        Self {
            kind: "TVSeries".to_string(),
            ..Self::ranked(id, title, rank)
        }
    }

    /// Set the official website
    pub fn with_website(mut self, website: &str) -> Self {
        self.website = Some(website.to_string());
        self
    }

    /// Set the comma-joined genres
    pub fn with_genres(mut self, genres: &str) -> Self {
        self.genres = genres.to_string();
        self
    }

    /// The stub shape returned in ranked lists (id and rank only matter)
    pub fn to_stub_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "rank": self.rank.to_string(),
        })
    }

    /// The canonical `Title` detail shape
    pub fn to_detail_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "title": self.title,
            "year": self.year.to_string(),
            "type": self.kind,
            "genres": self.genres,
        })
    }

    /// The `ExternalSites` detail shape
    pub fn to_external_sites_json(&self) -> serde_json::Value {
        match &self.website {
            Some(website) => json!({ "id": self.id, "officialWebsite": website }),
            None => json!({ "id": self.id }),
        }
    }
}
