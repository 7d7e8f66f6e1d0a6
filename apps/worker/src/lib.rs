//! watchdue background job runner
//!
//! Hosts the two scheduled tasks behind the watchdue API: the deadline
//! notification sweep and the daily title cache refresh. See the module
//! documentation in [`jobs`] for the individual job contracts.

pub mod config;
pub mod error;
pub mod jobs;
pub mod mailer;
pub mod scheduler;
pub mod state;

pub use config::Config;
pub use error::{WorkerError, WorkerResult};
pub use state::AppState;
