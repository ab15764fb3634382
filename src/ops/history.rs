//! Reading back the journal log.

use crate::store::{EntryStore, JournalEntry};
use tracing::debug;

/// Returns the stored entries, most-recent-first.
///
/// Storage problems degrade to an empty list by the store's contract, so
/// this never fails.
pub fn list_entries(store: &EntryStore) -> Vec<JournalEntry> {
    let entries = store.load();
    debug!("Loaded {} journal entries", entries.len());
    entries
}
