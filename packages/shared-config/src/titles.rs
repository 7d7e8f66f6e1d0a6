//! External title metadata API configuration types

use crate::{get_required_env, parse_env, ConfigError, ConfigResult};
use std::env;

/// Configuration for the external IMDB-like title metadata API
#[derive(Debug, Clone)]
pub struct TitleApiConfig {
    /// API base URL, up to but not including the filter segment
    pub host: String,

    /// API key, embedded as a path segment in every request
    pub api_key: String,

    /// Maximum number of ranked items to ingest per filter
    pub size_limit: usize,

    /// Filter string used to fetch the ranked movie list
    pub filter_movies: String,

    /// Filter string used to fetch the ranked show list
    pub filter_shows: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TitleApiConfig {
    /// Load title API configuration from environment variables
    ///
    /// Returns an error if the required variables (host and API key) are not
    /// set. This allows consumers to call `.ok()` to get `Option<TitleApiConfig>`.
    pub fn from_env() -> ConfigResult<Self> {
        let host = get_required_env("TITLE_API_HOST")?;
        let api_key = get_required_env("TITLE_API_KEY")?;

        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TITLE_API_HOST".to_string(),
                "host cannot be empty".to_string(),
            ));
        }

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "TITLE_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            host,
            api_key,
            size_limit: parse_env("TITLE_API_SIZE_LIMIT", 10)?,
            filter_movies: env::var("TITLE_API_FILTER_MOVIES")
                .unwrap_or_else(|_| "MostPopularMovies".to_string()),
            filter_shows: env::var("TITLE_API_FILTER_SHOWS")
                .unwrap_or_else(|_| "MostPopularTVs".to_string()),
            timeout_secs: parse_env("TITLE_API_TIMEOUT", 30)?,
        })
    }

    /// Check if the title API is configured (both host and API key are set)
    pub fn is_configured() -> bool {
        env::var("TITLE_API_HOST").is_ok() && env::var("TITLE_API_KEY").is_ok()
    }

    /// Create a configuration with custom host and API key (useful for testing)
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            size_limit: 10,
            filter_movies: "MostPopularMovies".to_string(),
            filter_shows: "MostPopularTVs".to_string(),
            timeout_secs: 30,
        }
    }

    /// Build the ranked-list URL for a filter: `{host}/{filter}/{api_key}`
    pub fn list_url(&self, filter: &str) -> String {
        let base = self.host.trim_end_matches('/');
        format!("{}/{}/{}", base, filter, self.api_key)
    }

    /// Build the per-item URL: `{host}/{filter}/{api_key}/{title_id}`
    pub fn item_url(&self, filter: &str, title_id: &str) -> String {
        let base = self.host.trim_end_matches('/');
        format!("{}/{}/{}/{}", base, filter, self.api_key, title_id)
    }
}
