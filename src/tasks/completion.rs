//! Completion watcher background task

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::{AppState, DetoxView, TimerEvent, TimerKind};

/// Background task that turns completion events into user-visible
/// notifications and drives the detox view to its finished screen.
pub async fn completion_watcher_task(state: Arc<AppState>) {
    info!("Starting completion watcher task");

    let mut events = state.event_tx.subscribe();

    loop {
        match events.recv().await {
            Ok(TimerEvent::Completed { kind }) => {
                let message = match kind {
                    TimerKind::Activity => {
                        "Activity timer complete! Great job taking time for yourself."
                    }
                    TimerKind::Detox => "Congratulations! You completed your digital detox.",
                };
                info!("{}", message);
                state.record_action(&format!("{} timer completed", kind.as_str()));

                if kind == TimerKind::Detox {
                    if let Err(e) = state.set_detox_view(DetoxView::Complete) {
                        warn!("Failed to update detox view after completion: {}", e);
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Completion watcher lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Completion event channel closed, watcher exiting");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::tempdir;
    use tokio::time::sleep;

    use crate::journal::JournalStore;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn detox_completion_flips_the_view_and_records_the_action() {
        let dir = tempdir().unwrap();
        let journal = JournalStore::load(dir.path()).unwrap();
        let state = Arc::new(AppState::new(5000, "127.0.0.1".to_string(), journal));
        state.set_detox_view(DetoxView::Countdown).unwrap();

        tokio::spawn(completion_watcher_task(Arc::clone(&state)));

        state.detox_timer.configure(2).unwrap();
        state.detox_timer.start().unwrap();
        sleep(Duration::from_secs(5)).await;

        assert_eq!(state.detox_view().unwrap(), DetoxView::Complete);
        let (action, _) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("detox timer completed"));
    }

    #[tokio::test(start_paused = true)]
    async fn activity_completion_leaves_the_detox_view_alone() {
        let dir = tempdir().unwrap();
        let journal = JournalStore::load(dir.path()).unwrap();
        let state = Arc::new(AppState::new(5000, "127.0.0.1".to_string(), journal));

        tokio::spawn(completion_watcher_task(Arc::clone(&state)));

        state.activity_timer.configure(2).unwrap();
        state.activity_timer.start().unwrap();
        sleep(Duration::from_secs(5)).await;

        assert_eq!(state.detox_view().unwrap(), DetoxView::Setup);
        let (action, _) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("activity timer completed"));
    }
}
