use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for parse/query operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type returned across parsing, projection, and export.
///
/// All variants are raised synchronously at the call that detects them and
/// are never retried internally. Malformed row ranges are *not* errors (see
/// [`crate::query::RowRange::new`]), and aggregates over empty columns return
/// the reduction's identity value instead of failing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not structured data, JSON text, or a file path.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The input string was treated as a path, but no file exists there.
    #[error("csv file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but cannot be read.
    #[error("cannot read file, permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Underlying I/O error other than missing-file or permission.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error during export.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// No header row/element exists at the configured offset.
    #[error("header not found at offset {offset}")]
    HeaderNotFound { offset: usize },

    /// A requested projection column is absent from the resolved header (or
    /// out of positional bounds). The message preserves the caller's casing.
    #[error("'{column}' header not found")]
    ColumnNotFound { column: String },
}
