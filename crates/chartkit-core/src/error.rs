//! Error types for chartkit-rs.

use thiserror::Error;

/// The main error type for chartkit-rs operations.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A column with the given name was not found in the input table.
    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    /// A column with the given name already exists in the table.
    #[error("column '{0}' already exists")]
    ColumnExists(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An axis index outside `0..3` was used.
    #[error("axis index {0} out of range (expected 0, 1 or 2)")]
    InvalidAxisIndex(usize),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for chartkit-rs operations.
pub type Result<T> = std::result::Result<T, ChartError>;
