//! Error types for xing-io.

use thiserror::Error;
use xing_core::XingError;

/// Errors raised while reading intervals or writing results.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column {0:?} not found in header")]
    MissingColumn(String),

    #[error("line {line}: cannot parse {value:?} as a number")]
    Parse { line: u64, value: String },

    #[error("line {line}: interval must be positive and finite, got {value}")]
    NonPositive { line: u64, value: f64 },

    #[error(transparent)]
    Core(#[from] XingError),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
