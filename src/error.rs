//! Error types for the shift voucher engine.
//!
//! The roster and payroll calculations are total and never fail. Errors only
//! arise at the edges: loading configuration, reading or writing persisted
//! state, and rejecting user actions on days that are not the user's shifts.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Crew;

/// The main error type for the shift voucher engine.
///
/// # Example
///
/// ```
/// use shift_voucher::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
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

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Persisted state exists but could not be read.
    #[error("Failed to read saved state '{path}': {message}")]
    StateReadError {
        /// Where the state was expected.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// Persisted state was read but is not a valid state blob.
    #[error("Failed to parse saved state: {message}")]
    StateParseError {
        /// A description of the parse error.
        message: String,
    },

    /// State could not be written.
    #[error("Failed to save state '{path}': {message}")]
    StateWriteError {
        /// The destination of the write.
        path: String,
        /// The underlying error.
        message: String,
    },

    /// An absence was toggled on a day the crew is not on duty.
    #[error("{date} is not a duty day for {crew}")]
    NotOnDuty {
        /// The rejected date.
        date: NaiveDate,
        /// The crew the user is working in.
        crew: Crew,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
