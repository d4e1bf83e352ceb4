//! Errors returned by grid operations.

use thiserror::Error;

/// Errors from table operations.
///
/// Only programmer errors end up here: the grid itself only ever addresses
/// rows it is currently displaying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row index outside `0..len`.
    #[error("row index {index} out of range for table of {len} rows")]
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows in the table at the time.
        len: usize,
    },

    /// A field name other than `one`, `two` or `three`.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
