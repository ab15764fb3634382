//! Deriving the statistics view from the journal log.

use crate::stats::{aggregate, AggregatedStats, Granularity};
use crate::store::EntryStore;
use tracing::debug;

/// Loads the journal log and derives the full statistics view.
///
/// Recomputed from scratch on every call; nothing is cached or persisted.
pub fn summarize(store: &EntryStore, granularity: Granularity) -> AggregatedStats {
    let entries = store.load();
    debug!(
        "Aggregating {} entries at {:?} granularity",
        entries.len(),
        granularity
    );
    aggregate(&entries, granularity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JournalEntry;
    use tempfile::TempDir;

    #[test]
    fn test_summarize_reads_from_store() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());
        store
            .append(JournalEntry::new("Happy", Vec::new(), ""))
            .unwrap();
        store
            .append(JournalEntry::new("Happy", Vec::new(), ""))
            .unwrap();

        let stats = summarize(&store, Granularity::Month);
        assert_eq!(stats.frequency.len(), 1);
        assert_eq!(stats.frequency[0].count, 2);
        assert_eq!(stats.balance.positive, 2);
    }

    #[test]
    fn test_summarize_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = EntryStore::new(dir.path());

        let stats = summarize(&store, Granularity::Day);
        assert!(stats.frequency.is_empty());
        assert!(stats.trend.buckets.is_empty());
        assert_eq!(stats.balance, Default::default());
    }
}
