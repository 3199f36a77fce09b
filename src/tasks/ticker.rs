//! The one-second tick source

use std::{sync::Arc, time::Duration};

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// What the tick source should currently be doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerCommand {
    Idle,
    /// Tick once per period on behalf of this run epoch
    Run { epoch: u64 },
}

/// Background task that delivers ticks while the countdown is running.
///
/// There is exactly one of these per [`AppState`]. Re-arming for a new
/// epoch replaces the interval, so two tick streams never overlap.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut commands = state.subscribe_ticker();

    loop {
        let command = *commands.borrow_and_update();
        let TickerCommand::Run { epoch } = command else {
            if commands.changed().await.is_err() {
                debug!("Ticker command channel closed");
                return;
            }
            continue;
        };

        debug!("Ticker armed for epoch {}", epoch);
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick(epoch) {
                        error!("Failed to deliver tick: {}", e);
                    }
                }

                changed = commands.changed() => {
                    if changed.is_err() {
                        debug!("Ticker command channel closed");
                        return;
                    }
                    debug!("Ticker for epoch {} disarmed", epoch);
                    break;
                }
            }
        }
    }
}
