//! Wellness content module
//!
//! The fixed content tables the app serves: journaling prompts, activity
//! suggestions and mood-based audio tracks.

pub mod activities;
pub mod moods;
pub mod prompts;

pub use activities::ActivitySuggestion;
pub use moods::{Mood, MoodTrack, PlaybackOutcome};
