//! Background tasks module
//!
//! Tasks that run alongside the HTTP server: the per-timer tick loops and
//! the completion watcher.

pub mod completion;
pub mod tick;

// Re-export main functions
pub use completion::completion_watcher_task;
pub use tick::tick_loop;
