//! The submit action: resolve prompts and append a journal entry.

use crate::ai::OpenAiClient;
use crate::errors::AppResult;
use crate::gateway;
use crate::store::{EntryStore, JournalEntry};
use tracing::{info, warn};

/// Resolves prompts for `emotion`, appends the entry, and returns the
/// prompts for display.
///
/// # Flow
///
/// 1. Resolve prompts (lexicon first, remote on miss)
/// 2. Build an entry stamped with the current instant
/// 3. Append it to the store
///
/// A storage failure on step 3 is downgraded to a warning: the entry is
/// lost, but the prompts the user asked for are still returned. A gateway
/// failure on step 1 aborts the whole operation — there is nothing worth
/// persisting without prompts.
///
/// # Errors
///
/// Returns an error if prompt resolution fails (remote path only).
pub async fn write_entry(
    store: &EntryStore,
    ai: &OpenAiClient,
    emotion: &str,
    answer: &str,
) -> AppResult<Vec<String>> {
    info!("Writing journal entry for emotion '{}'", emotion);

    let prompts = gateway::get_prompts(ai, emotion).await?;

    let entry = JournalEntry::new(emotion, prompts.clone(), answer);
    if let Err(e) = store.append(entry) {
        warn!("Journal entry was not saved: {}", e);
        eprintln!("Warning: your entry could not be saved ({})", e);
    }

    Ok(prompts)
}
