//! Solar Analyzer Library
//!
//! A Rust library for analysing time-series electrical measurements from a
//! solar panel (voltage, current, power, temperature).
//!
//! This library provides tools for:
//! - Loading delimited measurement files into typed, column-complete records
//! - Validating measurements against physical plausibility bounds
//! - Aggregating raw records into hourly and daily summaries
//! - Classifying sky conditions (CLEAR / MARGINAL / CLOUDY) from a
//!   power-ratio heuristic with confidence scoring
//! - Comprehensive error handling with distinct, branchable error kinds
//!
//! The pipeline is strictly staged: the loader output feeds the validator,
//! the aggregator, and the classifier; every stage returns a fresh snapshot
//! and never mutates its input.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod classifier;
        pub mod csv_loader;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Measurement, SkyCondition};
pub use config::Config;

/// Result type alias for the solar analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the measurement analysis pipeline
///
/// Fatal pipeline conditions each get their own variant so callers can
/// branch on kind: a missing file, a bad schema, and bad content all need
/// different user guidance.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("Measurement file not found: {path}")]
    FileNotFound { path: String },

    /// Input file exceeds the configured size ceiling
    #[error("File '{path}' is {size_mb:.1}MB, exceeds {limit_mb}MB limit")]
    FileTooLarge {
        path: String,
        size_mb: f64,
        limit_mb: usize,
    },

    /// CSV content could not be parsed as tabular data
    #[error("CSV parsing error in '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// One or more required columns are absent from the header
    #[error("Missing required columns: {columns}")]
    MissingColumns { columns: String },

    /// A timestamp value could not be parsed; fatal for the whole load
    #[error(
        "Unparseable timestamp '{value}' at data row {row} (expected 'YYYY-MM-DD HH:MM:SS' or an ISO variant)"
    )]
    TimestampParsing { row: usize, value: String },

    /// Row count is below the configured minimum
    #[error("Dataset too small: {rows} rows (minimum {min_rows})")]
    DatasetTooSmall { rows: usize, min_rows: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Date/time parsing error outside the loader's row context
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A report could not be serialized for output
    #[error("Report serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a file too large error
    pub fn file_too_large(path: impl Into<String>, size_mb: f64, limit_mb: usize) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            size_mb,
            limit_mb,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing columns error from the list of absent column names
    pub fn missing_columns(columns: &[&str]) -> Self {
        Self::MissingColumns {
            columns: columns.join(", "),
        }
    }

    /// Create a timestamp parsing error for a specific data row
    pub fn timestamp_parsing(row: usize, value: impl Into<String>) -> Self {
        Self::TimestampParsing {
            row,
            value: value.into(),
        }
    }

    /// Create a dataset too small error
    pub fn dataset_too_small(rows: usize, min_rows: usize) -> Self {
        Self::DatasetTooSmall { rows, min_rows }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "Report serialization failed".to_string(),
            source: error,
        }
    }
}
