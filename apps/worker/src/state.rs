//! Shared state handed to every job invocation

use sqlx::PgPool;
use watchdue_imdb_client::TitleClient;

use crate::config::Config;
use crate::error::WorkerResult;
use crate::mailer::Mailer;

/// Shared application state for worker jobs
///
/// Built once at startup and borrowed by each job tick. Optional members
/// reflect optional integrations: without a title API the refresh job skips,
/// without SMTP the notification job skips.
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Worker configuration
    pub config: Config,

    /// Title API client, when configured
    pub titles: Option<TitleClient>,

    /// SMTP mailer, when configured
    pub mailer: Option<Mailer>,
}

impl AppState {
    /// Assemble worker state from configuration and a connected pool
    pub fn new(db: PgPool, config: Config) -> WorkerResult<Self> {
        let titles = match config.title_api() {
            Some(api_config) => Some(TitleClient::new(api_config.clone())?),
            None => None,
        };

        let mailer = match config.smtp() {
            Some(smtp_config) => Some(Mailer::new(smtp_config.clone())?),
            None => None,
        };

        Ok(Self {
            db,
            config,
            titles,
            mailer,
        })
    }
}
