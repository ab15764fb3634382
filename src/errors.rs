//! Error handling utilities for the innerprompt application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when talking to the
/// remote completion API.
///
/// Gateway failures are retryable from the caller's point of view: the user
/// re-triggers the action. The underlying cause is logged, never shown verbatim.
///
/// # Examples
///
/// ```
/// use innerprompt::errors::GatewayError;
///
/// let error = GatewayError::InvalidResponse("missing choices".to_string());
/// assert!(format!("{}", error).contains("missing choices"));
/// ```
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The completion API could not be reached at all.
    #[error("Completion API is unreachable: {0}")]
    Offline(#[source] reqwest::Error),

    /// The completion API answered with a non-success status.
    #[error("Completion API returned HTTP {status}: {body}")]
    Upstream {
        /// HTTP status code returned by the upstream service
        status: u16,
        /// Response body text, for the diagnostic log only
        body: String,
    },

    /// The completion API answered 2xx but the payload was not usable.
    #[error("Invalid response from completion API: {0}")]
    InvalidResponse(String),
}

/// Represents specific error cases that can occur against the local journal store.
///
/// Read-side failures are swallowed by the store (`load` degrades to an empty
/// log); write-side failures propagate so callers can surface a non-fatal
/// warning instead of losing data silently.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The journal log file could not be read.
    #[error("Failed to read journal history from {path}: {source}")]
    ReadFailed {
        /// Path of the journal log file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The journal log file could not be written.
    #[error("Failed to write journal history to {path}: {source}")]
    WriteFailed {
        /// Path of the journal log file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The journal log file exists but does not hold a valid entry list.
    #[error("Journal history at {path} is not valid JSON: {source}")]
    Malformed {
        /// Path of the journal log file
        path: PathBuf,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the innerprompt application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unusable caller input (empty answer text, etc.). Fixable
    /// by the caller, so surfaced immediately without a retry hint.
    #[error("{0}")]
    Validation(String),

    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or network listener operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from the remote completion gateways.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Errors from the local journal store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use innerprompt::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Validation("please write something first".to_string()));
///     }
///     Ok("ok".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
