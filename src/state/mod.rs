//! State management module
//!
//! The pure countdown state machine, its cancellable runtime, and the
//! shared application state.

pub mod app_state;
pub mod countdown;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, DetoxView};
pub use countdown::{CountdownTimer, TimerEvent};
pub use timer_state::{format_clock, TickOutcome, TimerKind, TimerPhase, TimerSnapshot, TimerState};
