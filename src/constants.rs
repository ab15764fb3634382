//! Constants used throughout the application.
//!
//! This module contains all constants used in the InnerPrompt application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "innerprompt";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Emotional journaling with reflective prompts";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_DATA_DIR: &str = "INNERPROMPT_DIR";
/// Environment variable holding the completion API credential.
pub const ENV_VAR_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the completion API base URL.
pub const ENV_VAR_API_BASE_URL: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the completion model.
pub const ENV_VAR_MODEL: &str = "INNERPROMPT_MODEL";
/// Environment variable overriding the gateway service bind address.
pub const ENV_VAR_BIND_ADDR: &str = "INNERPROMPT_BIND";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".innerprompt";

// Journal Store Parameters
/// File name of the serialized journal log inside the data directory.
pub const STORAGE_FILE_NAME: &str = "journal_history.json";
/// Maximum number of entries retained in the journal log. Appending past
/// this bound evicts the oldest entry.
pub const HISTORY_CAPACITY: usize = 50;

// Completion API Parameters
/// Default base URL of the completion API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat-completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Sampling temperature for emotion classification (near-deterministic).
pub const CLASSIFY_TEMPERATURE: f32 = 0.2;
/// Token budget for emotion classification; the reply is a single word.
pub const CLASSIFY_MAX_TOKENS: u32 = 10;
/// Sampling temperature for prompt generation.
pub const GENERATE_TEMPERATURE: f32 = 0.7;
/// Token budget for prompt generation (3 short prompts).
pub const GENERATE_MAX_TOKENS: u32 = 150;

// Gateway Service Parameters
/// Default bind address for the gateway HTTP service.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

// Logging Configuration
/// Default log level when RUST_LOG is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when --verbose is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";
