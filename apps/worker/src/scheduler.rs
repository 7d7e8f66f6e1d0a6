//! Periodic job scheduling
//!
//! Drives the two background jobs on independent intervals. Jobs run on the
//! scheduler task itself, so a tick never overlaps a still-running job; with
//! [`MissedTickBehavior::Delay`] an overrunning job pushes later ticks back
//! instead of firing them in a burst.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::jobs::{deadline_notifications, title_refresh};
use crate::state::AppState;

/// Run the scheduler loop until ctrl-c
///
/// Both jobs fire once at startup and then on their configured intervals.
pub async fn run(state: &AppState) {
    let mut notification_tick = interval(Duration::from_secs(
        state.config.notification_interval_secs,
    ));
    notification_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut refresh_tick = interval(Duration::from_secs(
        state.config.title_refresh_interval_secs,
    ));
    refresh_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        notification_interval_secs = state.config.notification_interval_secs,
        title_refresh_interval_secs = state.config.title_refresh_interval_secs,
        "Scheduler started"
    );

    loop {
        tokio::select! {
            _ = notification_tick.tick() => {
                if let Err(e) = deadline_notifications::execute(state).await {
                    e.log();
                }
            }
            _ = refresh_tick.tick() => {
                if let Err(e) = title_refresh::execute(state).await {
                    e.log();
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping scheduler");
                break;
            }
        }
    }
}
