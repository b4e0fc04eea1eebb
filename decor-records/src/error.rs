//! Error types for Decor records

use thiserror::Error;

/// Decor error types
#[derive(Debug, Error)]
pub enum DecorError {
    /// Data row index is outside `[0, len)`.
    #[error("Index {index} out of range (store has {len} data rows)")]
    IndexOutOfRange {
        /// Requested data row index
        index: usize,
        /// Number of data rows in the store
        len: usize,
    },
    /// Data row field count differs from the header's.
    #[error("Ragged row {row}: expected {expected} fields, found {found}")]
    RaggedRow {
        /// Data row position (0-based, header excluded)
        row: usize,
        /// Header field count
        expected: usize,
        /// Field count of the offending row
        found: usize,
    },
    /// Field name does not appear in the header.
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// Wrapper configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O operation failed while reading or writing data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DecorError>;
