//! Error types for validation runs.

use expectations_core::ExpectationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that abort a validation run.
///
/// None of these are recoverable mid-pass: the run stops and no report is
/// produced.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The data file could not be opened
    #[error("Failed to open data file {}: {source}", .path.display())]
    Io {
        /// Data file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The delimited data could not be decoded
    #[error("Failed to read delimited data: {0}")]
    Csv(#[from] csv::Error),

    /// An expectation could not evaluate a row
    #[error("Row {row}: expectation '{code}' failed to evaluate: {source}")]
    Expectation {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Expectation code
        code: String,
        /// Underlying error
        source: ExpectationError,
    },
}

impl ValidationError {
    /// Creates a new I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
