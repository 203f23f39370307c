//! Error types for console rendering operations.

use thiserror::Error;

/// Error type for all fallible [`StyledConsole`](crate::StyledConsole)
/// operations.
///
/// Style descriptors are validated when parsed, so draw calls only fail on
/// malformed table input or when writing to the terminal itself fails.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A table row did not supply one cell per column.
    #[error("table row {row} has {found} cells, expected {expected}")]
    TableShape {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns declared for the table.
        expected: usize,
        /// Number of cells the row actually supplied.
        found: usize,
    },

    /// Writing to the terminal failed, or an external command could not be
    /// spawned.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
