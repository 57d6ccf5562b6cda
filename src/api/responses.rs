//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::journal::JournalEntry;
use crate::state::{DetoxView, TimerSnapshot};
use crate::wellness::{ActivitySuggestion, Mood};

/// Response for timer command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl TimerResponse {
    pub fn new(message: impl Into<String>, timer: TimerSnapshot) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Full server status, including both timers and journal bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub activity: TimerSnapshot,
    pub detox: TimerSnapshot,
    pub detox_view: DetoxView,
    pub journal_entries: usize,
    pub current_prompt: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalListResponse {
    pub entries: Vec<JournalEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSavedResponse {
    pub message: String,
    pub entry: JournalEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDeletedResponse {
    pub message: String,
    pub entry: JournalEntry,
}

/// A drawn activity, with the activity timer already set to its duration
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub message: String,
    pub suggestion: ActivitySuggestion,
    pub timer: TimerSnapshot,
}

/// One row of the mood catalog
#[derive(Debug, Clone, Serialize)]
pub struct MoodTrackInfo {
    pub mood: Mood,
    pub title: &'static str,
    pub description: &'static str,
    pub frequency_hz: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodCatalogResponse {
    pub moods: Vec<MoodTrackInfo>,
}

/// Outcome of a playback request. `played` is false when the audio
/// subsystem was unavailable and `message` carries the textual fallback.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackResponse {
    pub mood: Mood,
    pub title: &'static str,
    pub description: &'static str,
    pub frequency_hz: f64,
    pub played: bool,
    pub message: String,
}
