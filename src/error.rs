//! Error types for the Leave and Compensation Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Validation
/// failures (invalid leave ranges, future payslip periods) are ordinary
/// variants of this enum, never panics.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A month name could not be parsed.
    #[error("Unknown month name: {name}")]
    UnknownMonth {
        /// The month name that was not recognised.
        name: String,
    },

    /// A leave request's date range was invalid (end before start).
    #[error("Invalid leave range: end date {end} is before start date {start}")]
    InvalidLeaveRange {
        /// The start date of the range.
        start: NaiveDate,
        /// The end date of the range.
        end: NaiveDate,
    },

    /// A payslip was requested for a period that has not started yet.
    #[error("Cannot generate payslip for future period {month} {year}")]
    FuturePeriod {
        /// The requested month name.
        month: String,
        /// The requested year.
        year: i32,
    },

    /// No compensation record was in effect for the employee on the date.
    #[error("No CTC record found for employee '{employee_id}' effective on {date}")]
    CtcNotFound {
        /// The employee the lookup was for.
        employee_id: String,
        /// The date for which an active record was requested.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
