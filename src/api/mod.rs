//! HTTP API module
//!
//! The explicit command interface over the timers, journal and wellness
//! content: endpoint handlers, response structures and the router.

pub mod error;
pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timers/:kind", get(timer_status_handler))
        .route("/timers/:kind/configure", post(timer_configure_handler))
        .route("/timers/:kind/start", post(timer_start_handler))
        .route("/timers/:kind/pause", post(timer_pause_handler))
        .route("/timers/:kind/reset", post(timer_reset_handler))
        .route("/timers/:kind/stop", post(timer_stop_handler))
        .route("/journal", get(journal_list_handler).post(journal_save_handler))
        .route("/journal/prompt", get(prompt_current_handler).post(prompt_new_handler))
        .route("/journal/:id", delete(journal_delete_handler))
        .route("/activities/suggestion", get(activity_suggestion_handler))
        .route("/moods", get(mood_catalog_handler))
        .route("/moods/:mood/play", post(mood_play_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
