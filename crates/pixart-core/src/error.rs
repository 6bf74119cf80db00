//! Error types for the editing engine.

use thiserror::Error;

/// Errors raised by grid construction and document management.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Invalid grid dimension {width}x{height} (allowed range is 8..=128)")]
    InvalidDimension { width: u32, height: u32 },
    #[error("Index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("Pixel data has {actual} entries, expected {expected}")]
    InvalidPixelData { expected: usize, actual: usize },
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
