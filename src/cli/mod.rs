use crate::stats::Granularity;
use clap::{Parser, Subcommand, ValueEnum};

/// Emotional journaling with reflective prompts
#[derive(Parser, Debug)]
#[clap(name = "innerprompt", about = "Emotional journaling with reflective prompts")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve prompts for an emotion and append a journal entry
    Write {
        /// How you are feeling, in your own words
        emotion: String,

        /// Your free-text response to the prompts
        #[clap(short, long, default_value = "")]
        answer: String,
    },

    /// Classify the dominant emotion of a piece of text (display-only)
    Classify {
        /// The text to classify
        text: String,
    },

    /// Print the journal history, most recent first
    History,

    /// Show emotion frequency, trends, and mood balance
    Stats {
        /// Trend bucket granularity
        #[clap(short, long, value_enum, default_value_t = TrendRange::Month)]
        range: TrendRange,
    },

    /// Run the gateway HTTP service
    Serve {
        /// Bind address as host:port (overrides INNERPROMPT_BIND)
        #[clap(short, long)]
        bind: Option<String>,
    },
}

/// CLI-facing spelling of the trend granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrendRange {
    Day,
    Week,
    Month,
}

impl From<TrendRange> for Granularity {
    fn from(range: TrendRange) -> Self {
        match range {
            TrendRange::Day => Granularity::Day,
            TrendRange::Week => Granularity::Week,
            TrendRange::Month => Granularity::Month,
        }
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
