//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::RecordValidationError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A record failed validation (non-positive amount, unknown category)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// User-supplied text could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backing file exists but cannot be parsed
    #[error("Corrupt expense store at {}: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// The backing file parses but holds an amount outside the decimal range
    ///
    /// Unlike `CorruptStore` this is never read as empty, so an append
    /// cannot overwrite the other records.
    #[error(
        "Expense store at {} holds an unrepresentable amount at index {index}: {value}",
        path.display()
    )]
    UnrepresentableAmount {
        path: PathBuf,
        index: usize,
        value: String,
    },

    /// A running total left the representable range
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    /// Reading or writing the backing file failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal or other non-store I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecord(_))
    }

    /// Check if summing or reading amounts went out of range
    pub fn is_amount_range(&self) -> bool {
        matches!(
            self,
            Self::UnrepresentableAmount { .. } | Self::AmountOverflow(_)
        )
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<RecordValidationError> for TrackerError {
    fn from(err: RecordValidationError) -> Self {
        Self::InvalidRecord(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_corrupt_store_display() {
        let err = TrackerError::CorruptStore {
            path: PathBuf::from("expenses.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt expense store at expenses.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: TrackerError = RecordValidationError::UnknownCategory("Rent".into()).into();
        assert!(err.is_invalid_record());
        assert_eq!(err.to_string(), "Invalid record: Unknown category: Rent");
    }

    #[test]
    fn test_amount_range_errors() {
        let err = TrackerError::UnrepresentableAmount {
            path: PathBuf::from("expenses.json"),
            index: 1,
            value: "1e300".into(),
        };
        assert!(err.is_amount_range());
        assert_eq!(
            err.to_string(),
            "Expense store at expenses.json holds an unrepresentable amount at index 1: 1e300"
        );
        assert!(TrackerError::AmountOverflow("x".into()).is_amount_range());
        assert!(!TrackerError::Io("x".into()).is_amount_range());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
        assert!(!err.is_persistence());
    }
}
