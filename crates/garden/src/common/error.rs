//! Garden construction errors.
//!
//! The only failure mode in the whole simulation is handing the constructor a
//! matrix that is not a proper rectangle with at least one cell. Every other
//! input (ties, boundary reads, already-grazed cells) has defined behavior.

use thiserror::Error;

/// Errors raised when validating a carrot matrix.
///
/// Raised before any simulation state is created; a partially-constructed
/// garden never exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GardenError {
    /// The matrix has zero rows or zero columns.
    #[error("garden must have at least one row and one column (got {rows}x{cols})")]
    Empty {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the first row, or zero when there are no rows.
        cols: usize,
    },

    /// A row's length differs from the first row's.
    #[error("garden row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        found: usize,
    },
}
