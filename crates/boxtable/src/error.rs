//! Error types for table construction and configuration.

use thiserror::Error;

/// Errors that can occur when building a [`Table`](crate::Table) or loading
/// its options.
#[derive(Debug, Error)]
pub enum TableError {
    /// The header list is empty, so the table has no columns.
    #[error("table has no columns: at least one header is required")]
    NoColumns,

    /// A content row does not have one cell per header.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An options document could not be parsed.
    #[error("invalid table options: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
