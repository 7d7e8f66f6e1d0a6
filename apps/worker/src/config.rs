//! Worker configuration loaded from environment variables
//!
//! This module provides configuration management for the watchdue worker
//! service. Configuration is loaded from environment variables with sensible
//! defaults for development environments.

use anyhow::Result;
use watchdue_shared_config::{
    CommonConfig, DatabaseConfig, Environment, SmtpConfig, TitleApiConfig,
};

/// Default interval between deadline notification sweeps (24 hours)
const DEFAULT_NOTIFICATION_INTERVAL_SECS: u64 = 24 * 3600;

/// Default interval between title cache refreshes (24 hours)
const DEFAULT_TITLE_REFRESH_INTERVAL_SECS: u64 = 24 * 3600;

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Seconds between deadline notification sweeps
    pub notification_interval_secs: u64,

    /// Seconds between title cache refreshes
    pub title_refresh_interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Self {
            common,
            notification_interval_secs: watchdue_shared_config::parse_env(
                "WORKER_NOTIFICATION_INTERVAL",
                DEFAULT_NOTIFICATION_INTERVAL_SECS,
            )?,
            title_refresh_interval_secs: watchdue_shared_config::parse_env(
                "WORKER_TITLE_REFRESH_INTERVAL",
                DEFAULT_TITLE_REFRESH_INTERVAL_SECS,
            )?,
        })
    }

    // Convenience accessors for common config fields

    /// Get database configuration
    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    /// Get title API configuration (if configured)
    pub fn title_api(&self) -> Option<&TitleApiConfig> {
        self.common.title_api.as_ref()
    }

    /// Get SMTP configuration (if configured)
    pub fn smtp(&self) -> Option<&SmtpConfig> {
        self.common.smtp.as_ref()
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if the title API integration is configured
    pub fn has_title_api(&self) -> bool {
        self.common.has_title_api()
    }

    /// Check if mail delivery is configured
    pub fn has_smtp(&self) -> bool {
        self.common.has_smtp()
    }
}
