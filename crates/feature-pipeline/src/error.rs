//! Feature Pipeline Error Types

use hurst::HurstError;
use thiserror::Error;

/// Errors while building or transforming sensor tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Estimator failure
    #[error(transparent)]
    Hurst(#[from] HurstError),

    /// Column labels and data disagree
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Requested column is not in the table
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Window or stride cannot be used
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// Cell holds NaN or infinity
    #[error("Non-finite value in column {column} at row {row}")]
    NonFinite { column: String, row: usize },

    /// Value out of allowed range
    #[error("{column} value {value} at row {row} is out of range [{min}, {max}]")]
    OutOfRange {
        column: String,
        row: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}
