//! Whole-file JSON persistence for journal entries and the prompt cursor
//!
//! Mirrors the app's original local storage layout: one document holding the
//! full entries array (newest first) and one holding the last-used prompt
//! index. Both are read once on load and overwritten wholesale on every
//! save or delete.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wellness::prompts;

const ENTRIES_FILE: &str = "journal-entries.json";
const PROMPT_FILE: &str = "prompt-index.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Please write something in your journal entry before saving")]
    EmptyEntry,
    #[error("Journal entry {0} not found")]
    NotFound(i64),
    #[error("Journal storage error: {0}")]
    Io(#[from] io::Error),
    #[error("Journal data is corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A saved journal entry. `id` is the creation timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub prompt: String,
    pub text: String,
}

/// In-memory journal backed by JSON files under one data directory
#[derive(Debug)]
pub struct JournalStore {
    dir: PathBuf,
    entries: Vec<JournalEntry>,
    prompt_index: usize,
}

impl JournalStore {
    /// Open (or create) the store under `dir`, reading any persisted state
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let entries = match fs::read_to_string(dir.join(ENTRIES_FILE)) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let prompt_index = match fs::read_to_string(dir.join(PROMPT_FILE)) {
            Ok(raw) => serde_json::from_str::<usize>(&raw)? % prompts::count(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            dir,
            entries,
            prompt_index,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The prompt the next saved entry will be attached to
    pub fn current_prompt(&self) -> &'static str {
        prompts::get(self.prompt_index)
    }

    /// Draw a fresh random prompt and persist the cursor
    pub fn new_prompt(&mut self) -> Result<&'static str, StoreError> {
        self.prompt_index = prompts::random_index();
        self.save_prompt_index()?;
        Ok(self.current_prompt())
    }

    /// Save a new entry under the current prompt. Empty (or all-whitespace)
    /// text is rejected before anything is mutated.
    pub fn add(&mut self, text: &str) -> Result<JournalEntry, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyEntry);
        }

        let now = Local::now();
        let entry = JournalEntry {
            id: Utc::now().timestamp_millis(),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            prompt: self.current_prompt().to_string(),
            text: text.to_string(),
        };

        self.entries.insert(0, entry.clone());
        self.save_entries()?;
        Ok(entry)
    }

    /// Remove the entry with the given id and rewrite the file
    pub fn delete(&mut self, id: i64) -> Result<JournalEntry, StoreError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = self.entries.remove(position);
        self.save_entries()?;
        Ok(removed)
    }

    fn save_entries(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(self.dir.join(ENTRIES_FILE), raw)?;
        Ok(())
    }

    fn save_prompt_index(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.prompt_index)?;
        fs::write(self.dir.join(PROMPT_FILE), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_creates_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = JournalStore::load(dir.path()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.current_prompt(), prompts::get(0));
    }

    #[test]
    fn saved_entries_survive_a_reload() {
        let dir = tempdir().unwrap();

        let mut store = JournalStore::load(dir.path()).unwrap();
        let first = store.add("Grateful for quiet mornings.").unwrap();
        let second = store.add("Walked without my phone.").unwrap();

        let reloaded = JournalStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        // Newest first, as the journal view displays them
        assert_eq!(reloaded.entries()[0].text, second.text);
        assert_eq!(reloaded.entries()[1], first);
    }

    #[test]
    fn empty_text_is_rejected_without_mutation() {
        let dir = tempdir().unwrap();
        let mut store = JournalStore::load(dir.path()).unwrap();

        assert!(matches!(store.add(""), Err(StoreError::EmptyEntry)));
        assert!(matches!(store.add("   \n\t"), Err(StoreError::EmptyEntry)));
        assert!(store.is_empty());
        assert!(!dir.path().join(ENTRIES_FILE).exists());
    }

    #[test]
    fn delete_rewrites_the_file_wholesale() {
        let dir = tempdir().unwrap();
        let mut store = JournalStore::load(dir.path()).unwrap();
        let entry = store.add("A short note.").unwrap();

        store.delete(entry.id).unwrap();
        assert!(store.is_empty());

        let reloaded = JournalStore::load(dir.path()).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn deleting_a_missing_entry_reports_not_found() {
        let dir = tempdir().unwrap();
        let mut store = JournalStore::load(dir.path()).unwrap();
        assert!(matches!(store.delete(42), Err(StoreError::NotFound(42))));
    }

    #[test]
    fn prompt_cursor_is_persisted() {
        let dir = tempdir().unwrap();

        let drawn = {
            let mut store = JournalStore::load(dir.path()).unwrap();
            store.new_prompt().unwrap().to_string()
        };

        let reloaded = JournalStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.current_prompt(), drawn);
    }

    #[test]
    fn entries_are_stamped_with_prompt_and_timestamps() {
        let dir = tempdir().unwrap();
        let mut store = JournalStore::load(dir.path()).unwrap();
        let entry = store.add("  padded text  ").unwrap();

        assert_eq!(entry.text, "padded text");
        assert_eq!(entry.prompt, store.current_prompt());
        assert!(entry.id > 0);
        assert!(!entry.date.is_empty());
        assert!(!entry.time.is_empty());
    }
}
