//! Error handling for the watchdue worker
//!
//! This module provides a unified error type hierarchy using thiserror
//! for background job processing, with specific variants for each job type.

use thiserror::Error;
use watchdue_imdb_client::TitleApiError;

/// Main worker error type
#[derive(Error, Debug)]
pub enum WorkerError {
    // ========== Database Errors ==========
    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database connection pool exhausted
    #[error("database connection unavailable")]
    DatabaseUnavailable,

    // ========== Title Refresh Errors ==========
    /// Title API integration not configured
    #[error("title API integration not configured")]
    TitleApiNotConfigured,

    /// Title API call failed
    #[error("title API error: {0}")]
    TitleApi(#[from] TitleApiError),

    // ========== Notification Errors ==========
    /// SMTP transport-level failure (authentication, connection, etc.)
    #[error("SMTP transport error: {0}")]
    MailTransport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed
    #[error("email address parse error: {0}")]
    MailAddress(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled
    #[error("email build error: {0}")]
    MailBuild(String),

    // ========== HTTP/External Service Errors ==========
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ========== Configuration Errors ==========
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Missing required configuration
    #[error("missing required configuration: {0}")]
    MissingConfiguration(&'static str),

    // ========== Internal Errors ==========
    /// Internal worker error (catch-all for unexpected errors)
    #[error("internal worker error: {0}")]
    Internal(String),
}

impl WorkerError {
    /// Check if this error is a transient failure
    ///
    /// Jobs never retry within a tick (the failure policy is log and skip),
    /// but transient failures are logged at a lower severity because the
    /// next tick is expected to succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Database(_) | Self::DatabaseUnavailable => true,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::TitleApi(e) => e.is_retryable(),
            Self::MailTransport(_) => true,
            _ => false,
        }
    }

    /// Get a severity level for logging
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration(_) | Self::MissingConfiguration(_) | Self::DatabaseUnavailable => {
                ErrorSeverity::Critical
            }
            Self::Database(_) | Self::Internal(_) => ErrorSeverity::Error,
            Self::TitleApi(_) | Self::Http(_) | Self::MailTransport(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }

    /// Get the job this error is related to, if applicable
    pub fn job_context(&self) -> Option<&'static str> {
        match self {
            Self::TitleApiNotConfigured | Self::TitleApi(_) => Some("title_refresh"),
            Self::MailTransport(_) | Self::MailAddress(_) | Self::MailBuild(_) => {
                Some("deadline_notifications")
            }
            _ => None,
        }
    }

    /// Log the error with appropriate severity
    pub fn log(&self) {
        let context = self.job_context().unwrap_or("general");
        match self.severity() {
            ErrorSeverity::Critical => {
                tracing::error!(
                    error = %self,
                    context = context,
                    retryable = self.is_retryable(),
                    "Critical worker error"
                );
            }
            ErrorSeverity::Error => {
                tracing::error!(
                    error = %self,
                    context = context,
                    retryable = self.is_retryable(),
                    "Worker error"
                );
            }
            ErrorSeverity::Warning => {
                tracing::warn!(
                    error = %self,
                    context = context,
                    retryable = self.is_retryable(),
                    "Worker warning"
                );
            }
            ErrorSeverity::Info => {
                tracing::info!(
                    error = %self,
                    context = context,
                    retryable = self.is_retryable(),
                    "Worker info"
                );
            }
        }
    }
}

/// Error severity levels for logging and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical errors that should trigger alerts
    Critical,
    /// Standard errors
    Error,
    /// Warnings for expected failures
    Warning,
    /// Informational messages
    Info,
}

/// Result type alias for worker operations
pub type WorkerResult<T> = Result<T, WorkerError>;

impl From<anyhow::Error> for WorkerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<WorkerError>() {
            Ok(worker_err) => worker_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(WorkerError::DatabaseUnavailable.is_retryable());
        assert!(WorkerError::TitleApi(TitleApiError::Timeout).is_retryable());
        assert!(WorkerError::TitleApi(TitleApiError::RateLimited).is_retryable());

        assert!(!WorkerError::TitleApiNotConfigured.is_retryable());
        assert!(!WorkerError::Configuration("bad".to_string()).is_retryable());
        assert!(!WorkerError::MailBuild("bad body".to_string()).is_retryable());
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(
            WorkerError::Configuration("test".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            WorkerError::DatabaseUnavailable.severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            WorkerError::Database(sqlx::Error::PoolClosed).severity(),
            ErrorSeverity::Error
        );
        assert_eq!(
            WorkerError::TitleApi(TitleApiError::Timeout).severity(),
            ErrorSeverity::Warning
        );
    }

    #[test]
    fn test_job_context() {
        assert_eq!(
            WorkerError::TitleApiNotConfigured.job_context(),
            Some("title_refresh")
        );
        assert_eq!(
            WorkerError::MailBuild("x".to_string()).job_context(),
            Some("deadline_notifications")
        );
        assert_eq!(WorkerError::DatabaseUnavailable.job_context(), None);
    }
}
