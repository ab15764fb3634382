//! Configuration management for the innerprompt application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! data directory, the completion API endpoint and credential, and the gateway
//! service bind address.
//!
//! # Environment Variables
//!
//! - `INNERPROMPT_DIR`: Path to the data directory (defaults to ~/.innerprompt)
//! - `OPENAI_API_KEY`: Credential for the completion API (optional until a
//!   remote call is made)
//! - `OPENAI_BASE_URL`: Base URL of the completion API
//! - `INNERPROMPT_MODEL`: Chat-completion model name
//! - `INNERPROMPT_BIND`: Bind address for the gateway HTTP service

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the innerprompt application.
///
/// This struct holds the settings needed across the application: where the
/// journal log lives, how to reach the completion API, and where the gateway
/// service listens.
///
/// # Examples
///
/// Creating a configuration manually (useful in tests):
/// ```
/// use innerprompt::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/tmp/journal"),
///     api_key: Some("sk-test".to_string()),
///     api_base_url: "http://127.0.0.1:9999/v1".to_string(),
///     model: "gpt-3.5-turbo".to_string(),
///     bind_addr: "127.0.0.1:8787".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the journal log file is stored.
    ///
    /// Loaded from `INNERPROMPT_DIR` with a fallback to `~/.innerprompt`.
    pub data_dir: PathBuf,

    /// Credential for the completion API, if set.
    ///
    /// The lexicon-backed prompt path works without it; the first remote
    /// call fails with a configuration error naming the variable.
    pub api_key: Option<String>,

    /// Base URL of the completion API.
    pub api_base_url: String,

    /// Chat-completion model name.
    pub model: String,

    /// Bind address for the gateway HTTP service, as `host:port`.
    pub bind_addr: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("api_key", &constants::REDACTED_PLACEHOLDER)
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand` so `~` and embedded
    /// environment variable references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path expansion fails.
    pub fn load() -> AppResult<Self> {
        let data_dir_raw = env::var(constants::ENV_VAR_DATA_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        let data_dir = shellexpand::full(&data_dir_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand data directory path: {}", e)))?
            .into_owned();

        let api_key = env::var(constants::ENV_VAR_API_KEY)
            .ok()
            .filter(|key| !key.is_empty());

        let api_base_url = env::var(constants::ENV_VAR_API_BASE_URL)
            .unwrap_or_else(|_| constants::DEFAULT_API_BASE_URL.to_string());

        let model = env::var(constants::ENV_VAR_MODEL)
            .unwrap_or_else(|_| constants::DEFAULT_MODEL.to_string());

        let bind_addr = env::var(constants::ENV_VAR_BIND_ADDR)
            .unwrap_or_else(|_| constants::DEFAULT_BIND_ADDR.to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            api_key,
            api_base_url,
            model,
            bind_addr,
        })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory is empty
    /// - The model name is empty
    /// - The bind address does not parse as `host:port`
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory cannot be empty. Set INNERPROMPT_DIR or HOME.".to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(AppError::Config("Model name cannot be empty".to_string()));
        }

        self.bind_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!(
                "Invalid bind address '{}': {}",
                self.bind_addr, e
            ))
        })?;

        Ok(())
    }

    /// Returns the configured API key.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` naming the environment variable when no
    /// key is set.
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set. Export it to enable remote classification and prompt generation.",
                constants::ENV_VAR_API_KEY
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            data_dir: PathBuf::from("/tmp/innerprompt-test"),
            api_key: Some("sk-test".to_string()),
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            bind_addr: constants::DEFAULT_BIND_ADDR.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_data_dir() {
        let mut config = test_config();
        config.data_dir = PathBuf::from("");
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("Data directory"));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = test_config();
        config.model = String::new();
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("Model"));
    }

    #[test]
    fn test_validate_rejects_bad_bind_addr() {
        let mut config = test_config();
        config.bind_addr = "not-an-address".to_string();
        let err = config.validate().unwrap_err();
        assert!(format!("{}", err).contains("bind address"));
    }

    #[test]
    fn test_require_api_key() {
        let config = test_config();
        assert_eq!(config.require_api_key().unwrap(), "sk-test");

        let mut keyless = test_config();
        keyless.api_key = None;
        let err = keyless.require_api_key().unwrap_err();
        assert!(format!("{}", err).contains(constants::ENV_VAR_API_KEY));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = test_config();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-test"));
        assert!(debug.contains(constants::REDACTED_PLACEHOLDER));
    }
}
