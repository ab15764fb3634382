/*!
# InnerPrompt

InnerPrompt is an emotional-journaling tool: enter a feeling, receive
reflective journaling prompts, write a response, and watch aggregate
statistics build up over time. Prompts come from a built-in lexicon when the
feeling is a common one, and from a hosted completion API otherwise; the same
API can classify the dominant emotion of a written answer.

## Core Features

- Append journal entries to a capacity-bounded local log
- Resolve reflective prompts, static-lexicon-first
- Classify the dominant emotion of free text (display-only)
- Derive frequency, day/week/month trend, and mood-balance statistics
- Serve the two gateway contracts over HTTP

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `lexicon`: Static emotion-to-prompts table
- `ai`: Completion API client and fixed prompt builders
- `gateway`: The classify and prompt-resolution contracts
- `store`: The append/truncate-only journal log
- `stats`: Pure statistics aggregation
- `server`: The gateway HTTP service
- `ops`: One orchestration function per user operation

## Usage Example

```rust,no_run
use innerprompt::{Config, EntryStore};
use innerprompt::stats::Granularity;

fn main() -> innerprompt::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let store = EntryStore::new(&config.data_dir);
    let stats = innerprompt::ops::summarize(&store, Granularity::Month);
    println!("{} distinct emotions", stats.frequency.len());
    Ok(())
}
```
*/

/// Completion API client and prompt builders
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Stateless gateways to the completion API
pub mod gateway;
/// Static emotion lexicon
pub mod lexicon;
/// User-facing operations
pub mod ops;
/// Gateway HTTP service
pub mod server;
/// Statistics aggregation
pub mod stats;
/// Local journal store
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use store::{EntryStore, JournalEntry};
