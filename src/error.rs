//! Custom error types for cash-forecast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failure in the forecast is fatal, so
//! errors travel up to `main`, which prints them and exits.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for cash-forecast operations
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The input header does not match the required field set
    #[error("Input file does not contain the correct fields.")]
    InputFields,

    /// Malformed CSV input (ragged rows, undecodable data)
    #[error("Import error: {0}")]
    Import(String),

    /// A row with an empty name
    #[error("Transaction on row {row} is missing a name.")]
    MissingName { row: usize },

    #[error("Transaction_type for {name} must be 'income' or 'expense'.")]
    InvalidTransactionType { name: String },

    #[error("Amount of '{value}' for {name} is invalid.")]
    InvalidAmount { name: String, value: String },

    #[error("Invalid frequency for {name}.")]
    InvalidFrequency { name: String },

    #[error("next_date for {name} is in an invalid format. Use YYYY-MM-DD.")]
    InvalidDate { name: String },

    /// Stepping a due date left the supported calendar range
    #[error("next_date for {name} is outside the supported calendar range.")]
    DateOutOfRange { name: String },

    /// Posting a transaction pushed the running balance out of range
    #[error("Balance after posting {name} is outside the supported range.")]
    BalanceOutOfRange { name: String },

    /// The input path does not exist or is not a regular file
    #[error("Input file '{}' not found.", .0.display())]
    InputNotFound(PathBuf),

    /// Forecast horizon must be positive
    #[error("Forecast days must be greater than 0 (got {0}).")]
    InvalidHorizon(i64),

    /// The horizon runs past the supported calendar range
    #[error("Forecast of {0} days runs past the supported calendar range.")]
    HorizonOutOfRange(i64),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Export requested with no ledger entries
    #[error("Nothing to export: the ledger is empty.")]
    EmptyLedger,
}

// Implement From traits for common error types

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for cash-forecast operations
pub type ForecastResult<T> = Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ForecastError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_messages_name_the_transaction() {
        let err = ForecastError::InvalidAmount {
            name: "Rent".into(),
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "Amount of 'abc' for Rent is invalid.");

        let err = ForecastError::InvalidDate { name: "Rent".into() };
        assert!(err.to_string().contains("Use YYYY-MM-DD"));
    }

    #[test]
    fn test_input_not_found_display() {
        let err = ForecastError::InputNotFound(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "Input file 'missing.csv' not found.");
    }

    #[test]
    fn test_balance_out_of_range_display() {
        let err = ForecastError::BalanceOutOfRange { name: "Big".into() };
        assert_eq!(
            err.to_string(),
            "Balance after posting Big is outside the supported range."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let forecast_err: ForecastError = io_err.into();
        assert!(matches!(forecast_err, ForecastError::Io(_)));
    }
}
