//! Title API error types

use thiserror::Error;

/// Title metadata API client errors
#[derive(Error, Debug)]
pub enum TitleApiError {
    /// API key or host is missing
    #[error("host and API key are required for title API access")]
    MissingCredentials,

    /// Invalid input provided to an API method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse title API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API returned an error body
    #[error("Title API error: {0}")]
    Api(String),

    /// Rate limited by the API
    #[error("Rate limited by title API")]
    RateLimited,

    /// Request timeout
    #[error("Request to title API timed out")]
    Timeout,
}

impl TitleApiError {
    /// Check if this error is a transient failure
    ///
    /// The ingestion job does not retry (a failed filter is skipped until the
    /// next tick), but callers can use this to distinguish transient faults
    /// from permanent ones when logging.
    pub fn is_retryable(&self) -> bool {
        match self {
            TitleApiError::Timeout | TitleApiError::RateLimited => true,
            TitleApiError::Http(e) => {
                if e.is_timeout() || e.is_connect() {
                    return true;
                }
                matches!(e.status(), Some(status) if status.is_server_error())
            }
            _ => false,
        }
    }
}

/// Result type for title API operations
pub type TitleApiResult<T> = Result<T, TitleApiError>;
