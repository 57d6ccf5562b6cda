//! One-second tick task driving a countdown

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use crate::state::{TickOutcome, TimerEvent, TimerKind, TimerSnapshot, TimerState};

/// Drive a running countdown at a one-tick-per-second cadence.
///
/// The task owns no state of its own: each tick locks the shared state,
/// applies one decrement and republishes the snapshot. It exits on
/// completion or as soon as a tick finds the timer no longer running,
/// whichever comes first; the owner aborts it on pause/reset anyway.
pub async fn tick_loop(
    kind: TimerKind,
    state: Arc<Mutex<TimerState>>,
    update_tx: watch::Sender<TimerSnapshot>,
    event_tx: broadcast::Sender<TimerEvent>,
) {
    debug!("Tick loop started for {} timer", kind.as_str());

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first interval tick completes immediately; the countdown should
    // lose its first second one second from now.
    interval.tick().await;

    loop {
        interval.tick().await;

        let (outcome, snapshot) = {
            let mut state = match state.lock() {
                Ok(state) => state,
                Err(e) => {
                    error!("Tick loop lost the {} timer state: {}", kind.as_str(), e);
                    return;
                }
            };
            let outcome = state.tick();
            (outcome, state.snapshot())
        };

        match outcome {
            TickOutcome::Ignored => {
                debug!("Stale tick for {} timer ignored", kind.as_str());
                return;
            }
            TickOutcome::Counted => {
                if let Err(e) = update_tx.send(snapshot) {
                    warn!("Failed to send timer update: {}", e);
                }
            }
            TickOutcome::Completed => {
                if let Err(e) = update_tx.send(snapshot) {
                    warn!("Failed to send timer update: {}", e);
                }
                info!("{} timer ran down to zero", kind.as_str());
                if let Err(e) = event_tx.send(TimerEvent::Completed { kind }) {
                    warn!("Failed to send completion event: {}", e);
                }
                return;
            }
        }
    }
}
