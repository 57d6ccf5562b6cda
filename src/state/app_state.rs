//! Main application state management

use std::sync::Mutex;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::info;

use crate::journal::JournalStore;

use super::{CountdownTimer, TimerEvent, TimerKind};

/// Which detox screen the client should be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetoxView {
    /// Duration picker; no session configured yet
    Setup,
    /// A session is configured or counting down
    Countdown,
    /// The session finished, naturally or by an early stop
    Complete,
}

/// Shared application state: both countdown timers, the detox view, the
/// journal store and request bookkeeping. Lives behind one `Arc`; every
/// field guards its own short critical section and no lock is ever held
/// across an await point.
#[derive(Debug)]
pub struct AppState {
    pub activity_timer: CountdownTimer,
    pub detox_timer: CountdownTimer,
    detox_view: Mutex<DetoxView>,
    pub journal: Mutex<JournalStore>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Completion events from both timers
    pub event_tx: broadcast::Sender<TimerEvent>,
}

impl AppState {
    /// Create a new AppState around a loaded journal store
    pub fn new(port: u16, host: String, journal: JournalStore) -> Self {
        let (event_tx, _) = broadcast::channel(16);

        Self {
            activity_timer: CountdownTimer::new(TimerKind::Activity, event_tx.clone()),
            detox_timer: CountdownTimer::new(TimerKind::Detox, event_tx.clone()),
            detox_view: Mutex::new(DetoxView::Setup),
            journal: Mutex::new(journal),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            event_tx,
        }
    }

    /// The countdown belonging to a timer kind
    pub fn timer(&self, kind: TimerKind) -> &CountdownTimer {
        match kind {
            TimerKind::Activity => &self.activity_timer,
            TimerKind::Detox => &self.detox_timer,
        }
    }

    pub fn detox_view(&self) -> Result<DetoxView, String> {
        self.detox_view
            .lock()
            .map(|view| *view)
            .map_err(|e| format!("Failed to lock detox view: {}", e))
    }

    pub fn set_detox_view(&self, view: DetoxView) -> Result<(), String> {
        let mut current = self
            .detox_view
            .lock()
            .map_err(|e| format!("Failed to lock detox view: {}", e))?;
        if *current != view {
            info!("Detox view: {:?} -> {:?}", *current, view);
            *current = view;
        }
        Ok(())
    }

    /// Remember the most recent user-visible action for `/status`
    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let journal = JournalStore::load(dir.path()).unwrap();
        (AppState::new(5000, "127.0.0.1".to_string(), journal), dir)
    }

    #[tokio::test]
    async fn timers_are_addressable_by_kind() {
        let (state, _dir) = test_state();
        assert_eq!(state.timer(TimerKind::Activity).kind(), TimerKind::Activity);
        assert_eq!(state.timer(TimerKind::Detox).kind(), TimerKind::Detox);
    }

    #[tokio::test]
    async fn detox_view_transitions_are_recorded() {
        let (state, _dir) = test_state();
        assert_eq!(state.detox_view().unwrap(), DetoxView::Setup);

        state.set_detox_view(DetoxView::Countdown).unwrap();
        state.set_detox_view(DetoxView::Complete).unwrap();
        assert_eq!(state.detox_view().unwrap(), DetoxView::Complete);
    }

    #[tokio::test]
    async fn last_action_round_trips() {
        let (state, _dir) = test_state();
        assert_eq!(state.get_last_action().0, None);

        state.record_action("detox timer started");
        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("detox timer started"));
        assert!(time.is_some());
    }
}
