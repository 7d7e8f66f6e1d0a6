use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use watchdue_worker::{scheduler, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchdue_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Starting watchdue worker");

    if !config.has_title_api() {
        tracing::warn!("Title API not configured, title refresh will be skipped");
    }
    if !config.has_smtp() {
        tracing::warn!("SMTP not configured, deadline notifications will be skipped");
    }

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database().max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database().connect_timeout_secs,
        ))
        .connect(&config.database().url)
        .await?;
    tracing::info!("Database connection established");

    let state = AppState::new(pool, config)?;

    scheduler::run(&state).await;

    tracing::info!("watchdue worker stopped");
    Ok(())
}
