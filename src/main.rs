/*!
# InnerPrompt - Emotional Journaling

InnerPrompt is a command-line tool for emotional journaling. Tell it how you
feel and it answers with reflective prompts (from a built-in lexicon, or a
hosted completion API for less common feelings), keeps a bounded local log of
your entries, classifies the dominant emotion of what you wrote, and derives
statistics over your history. It can also serve the two gateway contracts
over HTTP.

## Usage

```
innerprompt <COMMAND>

Commands:
  write     Resolve prompts for an emotion and append a journal entry
  classify  Classify the dominant emotion of a piece of text (display-only)
  history   Print the journal history, most recent first
  stats     Show emotion frequency, trends, and mood balance
  serve     Run the gateway HTTP service
```

## Configuration

The application can be configured with the following environment variables:
- `INNERPROMPT_DIR`: Data directory for the journal log (defaults to "~/.innerprompt")
- `OPENAI_API_KEY`: Completion API credential (needed for remote calls only)
- `OPENAI_BASE_URL`: Completion API base URL
- `INNERPROMPT_MODEL`: Chat-completion model name
- `INNERPROMPT_BIND`: Gateway service bind address
*/

use innerprompt::ai::OpenAiClient;
use innerprompt::cli::{CliArgs, Command};
use innerprompt::config::Config;
use innerprompt::errors::AppResult;
use innerprompt::stats::AggregatedStats;
use innerprompt::store::{EntryStore, JournalEntry};
use innerprompt::{constants, ops, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The main entry point for the innerprompt application.
///
/// Coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes structured logging
/// 3. Loads and validates configuration
/// 4. Dispatches to the requested operation and prints its result
#[tokio::main]
async fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose {
        constants::VERBOSE_LOG_LEVEL
    } else {
        constants::DEFAULT_LOG_LEVEL
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting innerprompt");

    let mut config = Config::load()?;
    if let Command::Serve { bind: Some(bind) } = &args.command {
        config.bind_addr = bind.clone();
    }
    config.validate()?;

    match args.command {
        Command::Write { emotion, answer } => {
            let store = EntryStore::new(&config.data_dir);
            let ai = OpenAiClient::from_config(&config);
            let prompts = ops::write_entry(&store, &ai, &emotion, &answer).await?;
            print_prompts(&emotion, &prompts);
        }
        Command::Classify { text } => {
            let ai = OpenAiClient::from_config(&config);
            let label = ops::classify_answer(&ai, &text).await?;
            println!("{}", label);
        }
        Command::History => {
            let store = EntryStore::new(&config.data_dir);
            print_history(&ops::list_entries(&store));
        }
        Command::Stats { range } => {
            let store = EntryStore::new(&config.data_dir);
            let stats = ops::summarize(&store, range.into());
            print_stats(&stats);
        }
        Command::Serve { .. } => {
            server::serve(&config).await?;
        }
    }

    Ok(())
}

fn print_prompts(emotion: &str, prompts: &[String]) {
    println!("Prompts for {}:", emotion);
    for prompt in prompts {
        println!("  - {}", prompt);
    }
}

fn print_history(entries: &[JournalEntry]) {
    if entries.is_empty() {
        println!("No journal entries yet.");
        return;
    }

    for entry in entries {
        println!("{}  {}", entry.date.format("%Y-%m-%d %H:%M"), entry.emotion);
        for prompt in &entry.prompts {
            println!("    - {}", prompt);
        }
        if !entry.answer.is_empty() {
            println!("    > {}", entry.answer);
        }
    }
}

fn print_stats(stats: &AggregatedStats) {
    if stats.frequency.is_empty() {
        println!("No journal entries yet.");
        return;
    }

    println!("Emotion frequency:");
    for c in &stats.frequency {
        println!("  {}: {}", c.emotion, c.count);
    }

    println!("Top emotions:");
    for (i, c) in stats.top_emotions.iter().enumerate() {
        println!("  {}. {} ({} times)", i + 1, c.emotion, c.count);
    }

    println!("Trend:");
    for series in &stats.trend.series {
        let cells: Vec<String> = stats
            .trend
            .buckets
            .iter()
            .zip(&series.counts)
            .map(|(bucket, count)| format!("{}={}", bucket, count))
            .collect();
        println!("  {}: {}", series.emotion, cells.join(" "));
    }

    println!(
        "Mood balance: {} positive / {} negative",
        stats.balance.positive, stats.balance.negative
    );
}
