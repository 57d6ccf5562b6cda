//! Eunoia - A state-managed HTTP server for a personal wellness companion
//!
//! This library re-expresses the wellness app's client logic behind an
//! explicit command interface: cancellable countdown timers (guided
//! activity and digital detox), journaling prompts with a local journal
//! store, and mood-based audio suggestions.

pub mod api;
pub mod config;
pub mod journal;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod wellness;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use journal::JournalStore;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
