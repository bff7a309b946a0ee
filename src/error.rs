//! Error types for the compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Classification itself is total over its input domain (an unparseable
//! expiry date classifies as `missing`, it never raises), so the variants
//! here cover configuration loading and validation only.

use thiserror::Error;

/// The main error type for the compliance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The classifier threshold table was inconsistent.
    #[error("Invalid classifier thresholds: {message}")]
    InvalidThresholds {
        /// A description of what made the thresholds invalid.
        message: String,
    },

    /// The scoring configuration was inconsistent.
    #[error("Invalid scoring configuration: {message}")]
    InvalidScoring {
        /// A description of what made the scoring configuration invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
