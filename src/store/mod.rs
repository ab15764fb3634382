//! Local journal store.
//!
//! The whole journal log lives in one JSON file: an array of entries,
//! most-recent-first, capped at [`HISTORY_CAPACITY`](crate::constants::HISTORY_CAPACITY)
//! elements. Every append is a full read-modify-write of that file — the file
//! is the single source of truth, nothing is cached in memory across calls.
//!
//! Reads fail soft: a missing, unreadable, or malformed file loads as an
//! empty log (logged at warn level). Writes propagate their error so the
//! caller can surface a non-fatal warning.

use crate::constants::{HISTORY_CAPACITY, STORAGE_FILE_NAME};
use crate::errors::{AppResult, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One journal entry.
///
/// Entries are immutable once appended. The `date` is set at creation time
/// and serializes as an ISO-8601 instant; `emotion` is the label exactly as
/// the user typed it (free text, not validated against any vocabulary);
/// `prompts` is the ordered list that was shown for this entry; `answer` may
/// be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Creation instant.
    pub date: DateTime<Utc>,
    /// Emotion label as typed.
    pub emotion: String,
    /// Prompts attached to the entry, in display order.
    pub prompts: Vec<String>,
    /// Free-text answer, possibly empty.
    pub answer: String,
}

impl JournalEntry {
    /// Creates an entry stamped with the current instant.
    pub fn new(emotion: impl Into<String>, prompts: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            date: Utc::now(),
            emotion: emotion.into(),
            prompts,
            answer: answer.into(),
        }
    }
}

/// The append/truncate-only journal persistence handle.
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Creates a store rooted in the given data directory.
    ///
    /// The directory itself is created lazily on the first append.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORAGE_FILE_NAME),
        }
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the journal log, most-recent-first.
    ///
    /// Never fails: a missing file is an empty log, and an unreadable or
    /// malformed file degrades to an empty log with a warning in the
    /// diagnostic log.
    pub fn load(&self) -> Vec<JournalEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No journal history at {:?} yet", self.path);
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read journal history from {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Journal history at {:?} is not valid JSON, treating as empty: {}",
                    self.path, e
                );
                Vec::new()
            }
        }
    }

    /// Appends an entry to the front of the log and rewrites the whole file.
    ///
    /// The log is truncated to the capacity bound after the prepend, so the
    /// 51st entry evicts the oldest one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteFailed` when the data directory or log
    /// file cannot be written. Callers treat this as a non-fatal warning:
    /// the entry is lost but the operation that produced it still succeeds.
    pub fn append(&self, entry: JournalEntry) -> AppResult<()> {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }

        // Entries only hold strings and timestamps; serialization cannot fail.
        let raw = serde_json::to_string(&entries).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        fs::write(&self.path, raw).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        debug!("Journal history now holds {} entries", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(emotion: &str) -> JournalEntry {
        JournalEntry::new(emotion, vec!["A prompt".to_string()], "an answer")
    }

    #[test]
    fn test_load_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_on_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());

        let original = entry("Happy");
        store.append(original.clone()).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], original);
    }

    #[test]
    fn test_append_prepends() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());

        store.append(entry("first")).unwrap();
        store.append(entry("second")).unwrap();

        let loaded = store.load();
        assert_eq!(loaded[0].emotion, "second");
        assert_eq!(loaded[1].emotion, "first");
    }

    #[test]
    fn test_capacity_bound_evicts_oldest() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());

        for i in 0..HISTORY_CAPACITY + 5 {
            store.append(entry(&format!("emotion-{}", i))).unwrap();
        }

        let loaded = store.load();
        assert_eq!(loaded.len(), HISTORY_CAPACITY);
        // Most recent first; the five oldest are unrecoverable.
        assert_eq!(loaded[0].emotion, format!("emotion-{}", HISTORY_CAPACITY + 4));
        assert_eq!(loaded[HISTORY_CAPACITY - 1].emotion, "emotion-5");
        assert!(!loaded.iter().any(|e| e.emotion == "emotion-4"));
    }

    #[test]
    fn test_entry_serializes_with_wire_field_names() {
        let e = entry("Calm");
        let json = serde_json::to_value(&e).unwrap();
        assert!(json.get("date").is_some());
        assert_eq!(json["emotion"], "Calm");
        assert_eq!(json["prompts"][0], "A prompt");
        assert_eq!(json["answer"], "an answer");
    }

    #[test]
    fn test_append_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper").join("still");
        let store = EntryStore::new(&nested);

        store.append(entry("Hope")).unwrap();
        assert_eq!(store.load().len(), 1);
    }
}
