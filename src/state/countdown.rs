//! Cancellable countdown runtime wrapping the timer state machine

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::tasks::tick_loop;

use super::{TimerKind, TimerSnapshot, TimerState};

/// Events published when a countdown runs down to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Completed { kind: TimerKind },
}

/// A countdown timer plus the machinery that drives it: at most one spawned
/// tick task, a watch channel republishing snapshots on every mutation, and
/// the shared completion event channel.
///
/// Pause, reset and configure abort the tick task before returning; a tick
/// body that races the cancellation finds `running == false` and does
/// nothing.
#[derive(Debug)]
pub struct CountdownTimer {
    kind: TimerKind,
    state: Arc<Mutex<TimerState>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    update_tx: watch::Sender<TimerSnapshot>,
    /// Keep one receiver alive to prevent channel closure
    _update_rx: watch::Receiver<TimerSnapshot>,
    event_tx: broadcast::Sender<TimerEvent>,
}

impl CountdownTimer {
    /// Create an idle countdown publishing completions to `event_tx`
    pub fn new(kind: TimerKind, event_tx: broadcast::Sender<TimerEvent>) -> Self {
        let state = TimerState::new(kind);
        let (update_tx, update_rx) = watch::channel(state.snapshot());

        Self {
            kind,
            state: Arc::new(Mutex::new(state)),
            ticker: Mutex::new(None),
            update_tx,
            _update_rx: update_rx,
            event_tx,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Subscribe to snapshot updates published on every state change
    pub fn updates(&self) -> watch::Receiver<TimerSnapshot> {
        self.update_tx.subscribe()
    }

    /// Set a new duration in seconds, cancelling any active cadence
    pub fn configure(&self, seconds: u64) -> Result<TimerSnapshot, String> {
        let mut ticker = self.lock_ticker()?;
        cancel(&mut ticker);

        let mut state = self.lock_state()?;
        state.configure(seconds);
        let snapshot = state.snapshot();
        drop(state);

        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Begin or resume the countdown. Repeated calls while running are
    /// no-ops; the handle slot guarantees a single tick source.
    pub fn start(&self) -> Result<TimerSnapshot, String> {
        let mut ticker = self.lock_ticker()?;
        let mut state = self.lock_state()?;

        if !state.start() {
            return Ok(state.snapshot());
        }
        let snapshot = state.snapshot();
        drop(state);

        cancel(&mut ticker);
        *ticker = Some(tokio::spawn(tick_loop(
            self.kind,
            Arc::clone(&self.state),
            self.update_tx.clone(),
            self.event_tx.clone(),
        )));

        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// Stop the cadence, keeping the remaining time for a later resume
    pub fn pause(&self) -> Result<TimerSnapshot, String> {
        let mut ticker = self.lock_ticker()?;

        let mut state = self.lock_state()?;
        state.pause();
        let snapshot = state.snapshot();
        drop(state);

        cancel(&mut ticker);
        self.publish(&snapshot);
        Ok(snapshot)
    }

    /// End the countdown early without firing the completion event
    pub fn stop(&self) -> Result<TimerSnapshot, String> {
        self.pause()
    }

    /// Cancel any cadence and restore the kind's defaults. Idempotent.
    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        let mut ticker = self.lock_ticker()?;
        cancel(&mut ticker);

        let mut state = self.lock_state()?;
        state.reset();
        let snapshot = state.snapshot();
        drop(state);

        self.publish(&snapshot);
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.lock_state().map(|state| state.snapshot())
    }

    fn publish(&self, snapshot: &TimerSnapshot) {
        if let Err(e) = self.update_tx.send(snapshot.clone()) {
            warn!("Failed to send timer update: {}", e);
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, TimerState>, String> {
        self.state
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    fn lock_ticker(&self) -> Result<MutexGuard<'_, Option<JoinHandle<()>>>, String> {
        self.ticker
            .lock()
            .map_err(|e| format!("Failed to lock tick task handle: {}", e))
    }
}

/// Abort the tick task, if one is active. Abort takes effect before the next
/// tick can touch the state, and the `running` flag covers a tick body that
/// was already past the interval when the abort landed.
fn cancel(slot: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = slot.take() {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::broadcast;
    use tokio::time::sleep;

    use super::*;
    use crate::state::TimerPhase;

    fn detox_timer() -> (CountdownTimer, broadcast::Receiver<TimerEvent>) {
        let (event_tx, event_rx) = broadcast::channel(16);
        (CountdownTimer::new(TimerKind::Detox, event_tx), event_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn one_decrement_per_second_despite_repeated_starts() {
        let (timer, _events) = detox_timer();
        timer.configure(10).unwrap();

        timer.start().unwrap();
        timer.start().unwrap();
        timer.start().unwrap();

        sleep(Duration::from_millis(3500)).await;

        let snapshot = timer.snapshot().unwrap();
        assert_eq!(snapshot.remaining_seconds, 7);
        assert!(snapshot.running);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_the_cadence_and_resume_continues_exactly() {
        let (timer, _events) = detox_timer();
        timer.configure(10).unwrap();
        timer.start().unwrap();

        sleep(Duration::from_millis(2500)).await;
        let paused = timer.pause().unwrap();
        assert_eq!(paused.remaining_seconds, 8);
        assert_eq!(paused.phase, TimerPhase::Paused);

        // No stale tick may fire while paused
        sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 8);

        timer.start().unwrap();
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn run_down_fires_exactly_one_completion_event() {
        let (timer, mut events) = detox_timer();
        timer.configure(3).unwrap();
        timer.start().unwrap();

        sleep(Duration::from_secs(10)).await;

        let snapshot = timer.snapshot().unwrap();
        assert_eq!(snapshot.remaining_seconds, 0);
        assert!(!snapshot.running);
        assert_eq!(snapshot.phase, TimerPhase::Completed);

        assert_eq!(
            events.try_recv(),
            Ok(TimerEvent::Completed {
                kind: TimerKind::Detox
            })
        );
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn early_stop_preserves_remaining_and_stays_silent() {
        let (timer, mut events) = detox_timer();
        timer.configure(60).unwrap();
        timer.start().unwrap();

        sleep(Duration::from_millis(2500)).await;
        let stopped = timer.stop().unwrap();
        assert_eq!(stopped.remaining_seconds, 58);
        assert!(!stopped.running);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 58);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_while_running_returns_to_defaults() {
        let (timer, _events) = detox_timer();
        timer.configure(30).unwrap();
        timer.start().unwrap();
        sleep(Duration::from_millis(1500)).await;

        let reset = timer.reset().unwrap();
        assert_eq!(reset.remaining_seconds, 0);
        assert_eq!(reset.phase, TimerPhase::Idle);

        // A stale tick after reset must not resurrect the countdown
        sleep(Duration::from_secs(3)).await;
        assert_eq!(timer.snapshot().unwrap().remaining_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn watch_channel_republishes_each_tick() {
        let (timer, _events) = detox_timer();
        let mut updates = timer.updates();

        timer.configure(5).unwrap();
        timer.start().unwrap();
        sleep(Duration::from_millis(1500)).await;

        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().remaining_seconds, 4);
    }
}
