//! Title metadata API client implementation

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};
use watchdue_shared_config::TitleApiConfig;

use crate::error::{TitleApiError, TitleApiResult};
use crate::models::{TitleItem, TitleListResponse};

/// Detail filter for canonical title information
pub const FILTER_TITLE: &str = "Title";

/// Detail filter for external-site information (official website)
pub const FILTER_EXTERNAL_SITES: &str = "ExternalSites";

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Client for the external IMDB-like title metadata API
///
/// All endpoints are plain GETs with the host, filter, API key, and optional
/// title id embedded as path segments. Responses are JSON and may carry an
/// in-band `errorMessage` alongside HTTP 200.
#[derive(Clone)]
pub struct TitleClient {
    http_client: Client,
    config: TitleApiConfig,
}

impl fmt::Debug for TitleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleClient")
            .field("host", &self.config.host)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl TitleClient {
    /// Create a new title API client from configuration
    ///
    /// # Errors
    /// Returns `TitleApiError::MissingCredentials` if the host or API key
    /// is empty.
    pub fn new(config: TitleApiConfig) -> TitleApiResult<Self> {
        if config.host.trim().is_empty() || config.api_key.trim().is_empty() {
            return Err(TitleApiError::MissingCredentials);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent("watchdue/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Fetch the ranked list of title stubs for a category filter
    ///
    /// # Errors
    /// - `TitleApiError::Api` - the API rejected the request in-band
    /// - `TitleApiError::RateLimited` - HTTP 429
    /// - `TitleApiError::Http` / `Timeout` - transport failures
    #[instrument(skip(self))]
    pub async fn get_items(&self, filter: &str) -> TitleApiResult<TitleListResponse> {
        let filter = Self::validate_filter(filter)?;
        let url = self.config.list_url(filter);

        debug!(filter, "Fetching ranked title list");

        let text = self.fetch(&url).await?;
        let response: TitleListResponse = serde_json::from_str(&text)?;

        if let Some(message) = response
            .error_message
            .as_deref()
            .filter(|m| !m.is_empty())
        {
            warn!(filter, message, "Title API returned an error body");
            return Err(TitleApiError::Api(message.to_string()));
        }

        debug!(filter, item_count = response.items.len(), "Fetched title list");
        Ok(response)
    }

    /// Fetch per-title detail for a detail filter (`Title` or `ExternalSites`)
    ///
    /// # Errors
    /// Same taxonomy as [`get_items`](Self::get_items).
    #[instrument(skip(self))]
    pub async fn get_item_info(&self, filter: &str, title_id: &str) -> TitleApiResult<TitleItem> {
        let filter = Self::validate_filter(filter)?;
        if title_id.trim().is_empty() {
            return Err(TitleApiError::InvalidInput(
                "title id cannot be empty".to_string(),
            ));
        }

        let url = self.config.item_url(filter, title_id);

        debug!(filter, title_id, "Fetching title detail");

        let text = self.fetch(&url).await?;
        let item: TitleItem = serde_json::from_str(&text)?;
        Ok(item)
    }

    /// Execute a GET and surface transport-level failures
    async fn fetch(&self, url: &str) -> TitleApiResult<String> {
        let response = self.http_client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TitleApiError::Timeout
            } else {
                TitleApiError::Http(e)
            }
        })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Title API rate limited");
            return Err(TitleApiError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TitleApiError::Api(format!("{}: {}", status, body)));
        }

        response.text().await.map_err(TitleApiError::Http)
    }

    fn validate_filter(filter: &str) -> TitleApiResult<&str> {
        let trimmed = filter.trim();
        if trimmed.is_empty() {
            return Err(TitleApiError::InvalidInput(
                "filter cannot be empty".to_string(),
            ));
        }
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TitleApiConfig {
        TitleApiConfig::new("https://api.example.com", "k_test")
    }

    #[test]
    fn test_client_requires_credentials() {
        let result = TitleClient::new(TitleApiConfig::new("", "k_test"));
        assert!(matches!(result, Err(TitleApiError::MissingCredentials)));

        let result = TitleClient::new(TitleApiConfig::new("https://api.example.com", ""));
        assert!(matches!(result, Err(TitleApiError::MissingCredentials)));
    }

    #[test]
    fn test_client_accepts_valid_config() {
        assert!(TitleClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_client_debug_redacts_api_key() {
        let client = TitleClient::new(test_config()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("k_test"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_validate_filter_empty() {
        let result = TitleClient::validate_filter("  ");
        assert!(matches!(result, Err(TitleApiError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_filter_trims() {
        assert!(matches!(
            TitleClient::validate_filter(" MostPopularMovies "),
            Ok("MostPopularMovies")
        ));
    }
}
