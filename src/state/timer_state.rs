//! Countdown timer state machine shared by the activity and detox timers

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which countdown a piece of state belongs to.
///
/// Both timers run the same machine; they differ only in their reset
/// defaults and the upper bound accepted by `configure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    /// Timer attached to a suggested activity, 5 minutes by default
    Activity,
    /// Digital detox timer, unset until the user picks a duration
    Detox,
}

impl TimerKind {
    /// Seconds restored by `reset`
    pub fn default_seconds(&self) -> u64 {
        match self {
            TimerKind::Activity => 300,
            TimerKind::Detox => 0,
        }
    }

    /// Largest duration `configure` will accept, in seconds
    pub fn max_seconds(&self) -> u64 {
        match self {
            TimerKind::Activity => u64::MAX,
            TimerKind::Detox => 180 * 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::Activity => "activity",
            TimerKind::Detox => "detox",
        }
    }
}

impl FromStr for TimerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" => Ok(TimerKind::Activity),
            "detox" => Ok(TimerKind::Detox),
            other => Err(format!("Unknown timer '{}'", other)),
        }
    }
}

/// Derived view of where a timer sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

/// What a single tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running; the tick was a stale callback and changed nothing
    Ignored,
    /// One second counted down, timer still running
    Counted,
    /// The countdown just reached zero; fired exactly once per run-down
    Completed,
}

/// Countdown timer state.
///
/// Invariant: `remaining_seconds <= total_seconds`, and `running` is true
/// only while the owning runtime has a tick source active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub kind: TimerKind,
    pub remaining_seconds: u64,
    pub total_seconds: u64,
    pub running: bool,
}

impl TimerState {
    /// Create a timer at its kind's reset defaults
    pub fn new(kind: TimerKind) -> Self {
        let seconds = kind.default_seconds();
        Self {
            kind,
            remaining_seconds: seconds,
            total_seconds: seconds,
            running: false,
        }
    }

    /// Set a new duration, clamped into `[1, kind max]`, and stop the clock.
    ///
    /// Out-of-range user input is rejected before reaching this point; the
    /// clamp keeps the invariant even for internal callers.
    pub fn configure(&mut self, seconds: u64) {
        let seconds = seconds.clamp(1, self.kind.max_seconds());
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.running = false;
    }

    /// Begin (or resume) the countdown. Returns false when the call was a
    /// no-op: already running, or nothing left to count.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_seconds == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop the cadence, preserving the remaining time. Returns false when
    /// the timer was not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Back to the kind's defaults, from any phase
    pub fn reset(&mut self) {
        let seconds = self.kind.default_seconds();
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.running = false;
    }

    /// Count one elapsed second. Ticks that arrive after a pause or reset
    /// see `running == false` and leave the state untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Counted
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.total_seconds > 0 && self.remaining_seconds == 0 {
            TimerPhase::Completed
        } else if self.remaining_seconds == self.total_seconds {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let (minutes, seconds) = format_clock(self.remaining_seconds);
        TimerSnapshot {
            kind: self.kind,
            phase: self.phase(),
            running: self.running,
            remaining_seconds: self.remaining_seconds,
            total_seconds: self.total_seconds,
            minutes,
            seconds,
        }
    }
}

/// Serializable view of a timer, published to observers on every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub kind: TimerKind,
    pub phase: TimerPhase,
    pub running: bool,
    pub remaining_seconds: u64,
    pub total_seconds: u64,
    /// Zero-padded clock display, e.g. "04" / "59"
    pub minutes: String,
    pub seconds: String,
}

/// Split a second count into zero-padded minute/second strings
pub fn format_clock(total_seconds: u64) -> (String, String) {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    (format!("{:02}", minutes), format!("{:02}", seconds))
}
