//! User-facing operations.
//!
//! Each submodule implements one CLI operation by wiring the gateways, the
//! entry store, and the aggregator together. Operations return data; the
//! caller decides how to print it.

pub mod classify;
pub mod history;
pub mod stats;
pub mod write;

pub use classify::classify_answer;
pub use history::list_entries;
pub use stats::summarize;
pub use write::write_entry;
