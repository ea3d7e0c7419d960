//! Error types for image sources.

use thiserror::Error;

/// Errors produced while generating an image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// An extent whose minimum exceeds its maximum on some axis.
    #[error("invalid extent on axis {axis}: min {min} > max {max}")]
    InvalidExtent { axis: usize, min: i32, max: i32 },
}

/// A specialized Result type for image sources.
pub type Result<T> = std::result::Result<T, SourceError>;
