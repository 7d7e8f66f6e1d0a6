//! SMTP mail delivery configuration types

use crate::parse_env;
use std::env;

/// Default SMTP port (STARTTLS)
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set
const DEFAULT_FROM_ADDRESS: &str = "noreply@watchdue.local";

/// Configuration for the SMTP mail delivery service
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port (defaults to 587)
    pub port: u16,

    /// RFC 5322 "From" address
    pub from_address: String,

    /// Optional SMTP username
    pub username: Option<String>,

    /// Optional SMTP password
    pub password: Option<String>,

    /// Base URL of the web UI, linked from notification mails
    pub base_url: String,
}

impl SmtpConfig {
    /// Load SMTP configuration from environment variables
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that mail
    /// delivery is not configured and notifications should be skipped.
    pub fn from_env() -> Option<Self> {
        let host = env::var("SMTP_HOST").ok()?;
        Some(Self {
            host,
            port: parse_env("SMTP_PORT", DEFAULT_SMTP_PORT).ok()?,
            from_address: env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            username: env::var("SMTP_USER").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            base_url: env::var("MAIL_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }

    /// Create a configuration with a custom host (useful for testing)
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_SMTP_PORT,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            username: None,
            password: None,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}
