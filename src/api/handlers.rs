//! HTTP endpoint handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Deserialize;
use tracing::info;

use crate::state::{AppState, DetoxView, TimerKind};
use crate::wellness::{activities, moods, Mood, PlaybackOutcome};

use super::error::ApiError;
use super::responses::{
    HealthResponse, JournalDeletedResponse, JournalListResponse, JournalSavedResponse,
    MoodCatalogResponse, MoodTrackInfo, PlaybackResponse, PromptResponse, StatusResponse,
    SuggestionResponse, TimerResponse,
};

#[derive(Debug, Deserialize)]
pub struct ConfigureRequest {
    pub minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub text: String,
}

fn parse_kind(raw: &str) -> Result<TimerKind, ApiError> {
    raw.parse::<TimerKind>().map_err(ApiError::invalid)
}

/// Handle POST /timers/:kind/configure - Set a countdown duration
pub async fn timer_configure_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Json(request): Json<ConfigureRequest>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;

    // Out-of-range input leaves the prior timer state untouched
    match kind {
        TimerKind::Detox if !(1..=180).contains(&request.minutes) => {
            return Err(ApiError::invalid(
                "Please enter a valid time between 1 and 180 minutes.",
            ));
        }
        TimerKind::Activity if request.minutes < 1 => {
            return Err(ApiError::invalid("Timer duration must be at least 1 minute."));
        }
        _ => {}
    }

    // Activity durations are unbounded above; saturate rather than wrap
    let seconds = (request.minutes as u64).saturating_mul(60);
    let snapshot = state.timer(kind).configure(seconds).map_err(ApiError::internal)?;

    if kind == TimerKind::Detox {
        state
            .set_detox_view(DetoxView::Countdown)
            .map_err(ApiError::internal)?;
    }

    info!("{} timer configured for {} minutes", kind.as_str(), request.minutes);
    state.record_action(&format!("{} timer configured", kind.as_str()));

    Ok(Json(TimerResponse::new(
        format!("{} timer set to {} minutes", kind.as_str(), request.minutes),
        snapshot,
    )))
}

/// Handle POST /timers/:kind/start - Begin or resume the countdown
pub async fn timer_start_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let snapshot = state.timer(kind).start().map_err(ApiError::internal)?;

    let message = if !snapshot.running {
        format!(
            "{} timer not started; configure a duration first",
            kind.as_str()
        )
    } else {
        match kind {
            TimerKind::Detox => {
                "Digital detox started! Enjoy your time away from screens.".to_string()
            }
            TimerKind::Activity => "Activity timer started".to_string(),
        }
    };

    if snapshot.running {
        info!("{} timer started with {}s remaining", kind.as_str(), snapshot.remaining_seconds);
        state.record_action(&format!("{} timer started", kind.as_str()));
    }

    Ok(Json(TimerResponse::new(message, snapshot)))
}

/// Handle POST /timers/:kind/pause - Stop the cadence, keep the remaining time
pub async fn timer_pause_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let snapshot = state.timer(kind).pause().map_err(ApiError::internal)?;

    info!("{} timer paused at {}s remaining", kind.as_str(), snapshot.remaining_seconds);
    state.record_action(&format!("{} timer paused", kind.as_str()));

    Ok(Json(TimerResponse::new(
        format!("{} timer paused", kind.as_str()),
        snapshot,
    )))
}

/// Handle POST /timers/:kind/reset - Back to the kind's defaults
pub async fn timer_reset_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let snapshot = state.timer(kind).reset().map_err(ApiError::internal)?;

    if kind == TimerKind::Detox {
        state
            .set_detox_view(DetoxView::Setup)
            .map_err(ApiError::internal)?;
    }

    info!("{} timer reset", kind.as_str());
    state.record_action(&format!("{} timer reset", kind.as_str()));

    Ok(Json(TimerResponse::new(
        format!("{} timer reset", kind.as_str()),
        snapshot,
    )))
}

/// Handle POST /timers/:kind/stop - End a detox session early
pub async fn timer_stop_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    if kind != TimerKind::Detox {
        return Err(ApiError::invalid("Only the detox timer can be stopped early"));
    }

    // Stop is only reachable from the countdown screen
    if state.detox_view().map_err(ApiError::internal)? != DetoxView::Countdown {
        return Err(ApiError::invalid("No detox session in progress"));
    }

    let snapshot = state.detox_timer.stop().map_err(ApiError::internal)?;
    state
        .set_detox_view(DetoxView::Complete)
        .map_err(ApiError::internal)?;

    info!("Detox session ended early with {}s remaining", snapshot.remaining_seconds);
    state.record_action("detox timer stopped");

    Ok(Json(TimerResponse::new("Digital detox ended early", snapshot)))
}

/// Handle GET /timers/:kind - Current snapshot of one timer
pub async fn timer_status_handler(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<TimerResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let snapshot = state.timer(kind).snapshot().map_err(ApiError::internal)?;
    Ok(Json(TimerResponse::new(
        format!("{} timer status", kind.as_str()),
        snapshot,
    )))
}

/// Handle GET /journal - All saved entries, newest first
pub async fn journal_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JournalListResponse>, ApiError> {
    let journal = state
        .journal
        .lock()
        .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;

    Ok(Json(JournalListResponse {
        entries: journal.entries().to_vec(),
        total: journal.len(),
    }))
}

/// Handle POST /journal - Save an entry under the current prompt
pub async fn journal_save_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JournalRequest>,
) -> Result<Json<JournalSavedResponse>, ApiError> {
    let mut journal = state
        .journal
        .lock()
        .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;

    let entry = journal.add(&request.text)?;
    drop(journal);

    info!("Journal entry {} saved", entry.id);
    state.record_action("journal entry saved");

    Ok(Json(JournalSavedResponse {
        message: "Journal entry saved successfully!".to_string(),
        entry,
    }))
}

/// Handle DELETE /journal/:id - Remove one entry
pub async fn journal_delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<JournalDeletedResponse>, ApiError> {
    let mut journal = state
        .journal
        .lock()
        .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;

    let entry = journal.delete(id)?;
    drop(journal);

    info!("Journal entry {} deleted", id);
    state.record_action("journal entry deleted");

    Ok(Json(JournalDeletedResponse {
        message: "Journal entry deleted successfully".to_string(),
        entry,
    }))
}

/// Handle GET /journal/prompt - The prompt the next entry will use
pub async fn prompt_current_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PromptResponse>, ApiError> {
    let journal = state
        .journal
        .lock()
        .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;

    Ok(Json(PromptResponse {
        prompt: journal.current_prompt().to_string(),
    }))
}

/// Handle POST /journal/prompt - Draw a fresh random prompt
pub async fn prompt_new_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PromptResponse>, ApiError> {
    let mut journal = state
        .journal
        .lock()
        .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;

    let prompt = journal.new_prompt()?.to_string();
    drop(journal);

    state.record_action("new journal prompt drawn");
    Ok(Json(PromptResponse { prompt }))
}

/// Handle GET /activities/suggestion - Draw an activity and prime its timer
pub async fn activity_suggestion_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuggestionResponse>, ApiError> {
    let suggestion = activities::suggest();

    let snapshot = state
        .activity_timer
        .configure(suggestion.duration_minutes * 60)
        .map_err(ApiError::internal)?;

    info!("Suggested activity: {}", suggestion.activity);
    state.record_action("activity suggested");

    Ok(Json(SuggestionResponse {
        message: "New activity suggested! Use the timer if helpful.".to_string(),
        suggestion: suggestion.clone(),
        timer: snapshot,
    }))
}

/// Handle GET /moods - The mood-to-track catalog
pub async fn mood_catalog_handler() -> Json<MoodCatalogResponse> {
    let moods = Mood::ALL
        .iter()
        .map(|&mood| {
            let track = moods::track(mood);
            MoodTrackInfo {
                mood,
                title: track.title,
                description: track.description,
                frequency_hz: track.frequency_hz,
            }
        })
        .collect();

    Json(MoodCatalogResponse { moods })
}

/// Handle POST /moods/:mood/play - Best-effort tone for a mood
pub async fn mood_play_handler(
    State(state): State<Arc<AppState>>,
    Path(mood): Path<String>,
) -> Result<Json<PlaybackResponse>, ApiError> {
    let mood = mood.parse::<Mood>().map_err(ApiError::invalid)?;
    let track = moods::track(mood);

    let (played, message) = match moods::play(mood).await {
        PlaybackOutcome::Tone => (
            true,
            format!("Playing calming sounds for your {} mood", mood.as_str()),
        ),
        PlaybackOutcome::Notice(notice) => (false, notice),
    };

    state.record_action(&format!("{} mood selected", mood.as_str()));

    Ok(Json(PlaybackResponse {
        mood,
        title: track.title,
        description: track.description,
        frequency_hz: track.frequency_hz,
        played,
        message,
    }))
}

/// Handle GET /status - Return current server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    let activity = state.activity_timer.snapshot().map_err(ApiError::internal)?;
    let detox = state.detox_timer.snapshot().map_err(ApiError::internal)?;
    let detox_view = state.detox_view().map_err(ApiError::internal)?;

    let (journal_entries, current_prompt) = {
        let journal = state
            .journal
            .lock()
            .map_err(|e| ApiError::internal(format!("Failed to lock journal store: {}", e)))?;
        (journal.len(), journal.current_prompt().to_string())
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        activity,
        detox,
        detox_view,
        journal_entries,
        current_prompt,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
