//! Error types for the Shift Roster & Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scheduling and payroll
//! computation.

use thiserror::Error;

/// The main error type for the Shift Roster & Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A work block was invalid or contained inconsistent data.
    ///
    /// Raised at the validation boundary; invalid blocks never reach the
    /// layout or aggregation components.
    #[error("Invalid work block '{block_id}': {message}")]
    InvalidWorkBlock {
        /// The ID of the invalid work block.
        block_id: String,
        /// A description of what made the block invalid.
        message: String,
    },

    /// An employee was not found by a caller-supplied identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee ID that was not found.
        id: String,
    },

    /// A work block was not found by a caller-supplied identifier.
    #[error("Work block not found: {id}")]
    WorkBlockNotFound {
        /// The work block ID that was not found.
        id: String,
    },

    /// A client was not found by a caller-supplied identifier.
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The client ID that was not found.
        id: String,
    },

    /// A textual duration could not be parsed into decimal hours.
    #[error("Invalid duration: '{value}'")]
    InvalidDuration {
        /// The text that failed to parse.
        value: String,
    },

    /// A (year, week) pair does not name a valid ISO week.
    #[error("Invalid ISO week {week} for year {year}")]
    InvalidWeek {
        /// The requested year.
        year: i32,
        /// The requested ISO week number.
        week: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
