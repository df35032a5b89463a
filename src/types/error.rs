//! Error types for the benefit data generator
//!
//! This module defines all error types that can occur during data generation
//! and export. Errors are designed to be descriptive and user-friendly for
//! CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed date text, inverted ranges and windows
//! - **Capacity Errors**: more unique client codes requested than the code
//!   space holds
//! - **Export Errors**: I/O and CSV failures while writing tables

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for the benefit data generator
///
/// This enum represents all possible errors that can occur while generating
/// or exporting tables. Each variant includes relevant context to help
/// diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    /// Date text did not parse as an ISO `YYYY-MM-DD` value
    ///
    /// This is a fatal error for the call that received the text; no partial
    /// table is produced.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The text that failed to parse
        input: String,
        /// Description of the parse failure
        message: String,
    },

    /// More unique client codes were requested than the code space holds
    ///
    /// The sampler rejects such requests up front: rejection sampling over an
    /// exhausted space would never terminate.
    #[error("Cannot sample {requested} unique client codes from a space of {capacity}")]
    IdSpaceExhausted {
        /// Number of unique codes requested
        requested: usize,
        /// Total size of the client code space
        capacity: usize,
    },

    /// Balance range with min greater than max
    ///
    /// A uniform draw over an empty range is undefined; the walk rejects the
    /// range before drawing.
    #[error("Invalid balance range: min {min} is greater than max {max}")]
    InvalidBalanceRange {
        /// Lower balance bound
        min: i64,
        /// Upper balance bound
        max: i64,
    },

    /// Client date window with end before start
    ///
    /// Open dates are drawn from the inclusive window, which requires
    /// start <= end. A zero-length window (start == end) is valid.
    #[error("Invalid date window: end {end} is before start {start}")]
    InvalidDateWindow {
        /// Window start
        start: NaiveDate,
        /// Window end
        end: NaiveDate,
    },

    /// I/O error occurred while writing a table
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error occurred while writing a table
    #[error("CSV error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },
}

// Conversion from io::Error to GeneratorError
impl From<std::io::Error> for GeneratorError {
    fn from(error: std::io::Error) -> Self {
        GeneratorError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to GeneratorError
impl From<csv::Error> for GeneratorError {
    fn from(error: csv::Error) -> Self {
        GeneratorError::Csv {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl GeneratorError {
    /// Create an InvalidDate error from the offending text and a parse failure
    pub fn invalid_date(input: &str, message: impl ToString) -> Self {
        GeneratorError::InvalidDate {
            input: input.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an IdSpaceExhausted error
    pub fn id_space_exhausted(requested: usize, capacity: usize) -> Self {
        GeneratorError::IdSpaceExhausted {
            requested,
            capacity,
        }
    }

    /// Create an InvalidBalanceRange error
    pub fn invalid_balance_range(min: i64, max: i64) -> Self {
        GeneratorError::InvalidBalanceRange { min, max }
    }

    /// Create an InvalidDateWindow error
    pub fn invalid_date_window(start: NaiveDate, end: NaiveDate) -> Self {
        GeneratorError::InvalidDateWindow { start, end }
    }
}
