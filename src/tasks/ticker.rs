//! Ticker background task

use std::sync::Arc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::{AppState, TICK_PERIOD};

/// Background task that ticks the timer once per second while it runs.
///
/// The task owns at most one interval at a time. Every toggle or reset
/// drops the current interval, and a fresh one is created only if the
/// timer is still running afterwards.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut control_rx = state.control_tx.subscribe();

    loop {
        let control = *control_rx.borrow_and_update();

        if !control.running {
            debug!("Timer idle, waiting for start (epoch {})", control.epoch);
            if control_rx.changed().await.is_err() {
                break;
            }
            continue;
        }

        debug!("Timer running, starting interval (epoch {})", control.epoch);
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // A control change must win over a tick that is due at the
                // same instant, otherwise the old interval fires once more.
                biased;

                changed = control_rx.changed() => {
                    if changed.is_err() {
                        info!("Ticker task stopping");
                        return;
                    }
                    debug!("Run control changed, cancelling interval");
                    break;
                }

                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to tick timer: {}", e);
                    }
                }
            }
        }
    }

    info!("Ticker task stopping");
}
