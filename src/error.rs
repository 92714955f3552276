//! Error types for the room occupancy report.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can terminate a report run. Per-row data
//! problems are never errors; the row filter counts and skips those.

use thiserror::Error;

/// The main error type for the room occupancy report.
///
/// Only file-level, column-level, and argument-level problems are
/// represented here; they propagate to the caller and end the run.
///
/// # Example
///
/// ```
/// use room_occupancy::error::ReportError;
///
/// let error = ReportError::InputNotFound {
///     path: "/missing/schedule.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Schedule file not found: /missing/schedule.csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The schedule file was not found at the specified path.
    #[error("Schedule file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The schedule file could not be read.
    #[error("Failed to read schedule file '{path}': {message}")]
    InputRead {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The schedule file is not valid UTF-8.
    ///
    /// The reader must not proceed with partially decoded data, so this is
    /// fatal rather than a per-row rejection.
    #[error("Failed to decode '{path}' as UTF-8: {message}")]
    InvalidEncoding {
        /// The path to the file that failed to decode.
        path: String,
        /// A description of the decoding error.
        message: String,
    },

    /// The schedule table contains no header row.
    #[error("Schedule data is empty: no header row found")]
    MissingHeader,

    /// A CSV record could not be parsed at all.
    #[error("Failed to parse schedule data: {message}")]
    Csv {
        /// A description of the parse error.
        message: String,
    },

    /// A required column is absent from the header row.
    #[error("Schedule header is missing required column: {name}")]
    MissingColumn {
        /// The column name that was not found.
        name: String,
    },

    /// A START or END field that reached the numeric-range checks was not
    /// an integer.
    #[error("Row {row}: {field} value '{value}' is not a whole number")]
    InvalidTime {
        /// The file line number of the offending row.
        row: u64,
        /// The field name, START or END.
        field: String,
        /// The raw field content.
        value: String,
    },

    /// A command-line argument was malformed.
    #[error("Invalid {name} argument '{value}': {message}")]
    InvalidArgument {
        /// The argument name.
        name: String,
        /// The value that was supplied.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The report file could not be written.
    #[error("Failed to write report '{path}': {message}")]
    OutputWrite {
        /// The path to the file that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
