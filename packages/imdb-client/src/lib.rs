//! IMDB-like title metadata API client for watchdue
//!
//! This crate provides the thin HTTP client consumed by the title refresh
//! job and the suggestion endpoints:
//! - Ranked title lists per category filter (popular movies, popular shows)
//! - Per-title detail and external-site lookups
//! - Platform name derivation from official website URLs
//!
//! # Example
//!
//! ```rust,no_run
//! use watchdue_imdb_client::{TitleClient, FILTER_TITLE};
//! use watchdue_shared_config::TitleApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TitleClient::new(TitleApiConfig::from_env()?)?;
//!
//! let list = client.get_items("MostPopularMovies").await?;
//! for stub in list.items.iter().take(5) {
//!     let detail = client.get_item_info(FILTER_TITLE, &stub.id).await?;
//!     println!("{:?}", detail.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `TITLE_API_HOST`: base URL of the title API (required)
//! - `TITLE_API_KEY`: API key (required)

mod client;
mod error;
mod models;
mod platform;

pub use client::{TitleClient, FILTER_EXTERNAL_SITES, FILTER_TITLE};
pub use error::{TitleApiError, TitleApiResult};
pub use models::{TitleItem, TitleKind, TitleListResponse};
pub use platform::platform_from_url;
