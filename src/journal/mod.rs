//! Journal persistence module

pub mod store;

pub use store::{JournalEntry, JournalStore, StoreError};
