//! Error types for the rules engine.

use derive_more::{Display, Error};

/// Error returned when a move cannot be applied.
///
/// An occupied target cell is not an error; `place_mark` reports it as
/// `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column outside `0..=2`.
    #[display("Position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },
}

/// Error returned when board notation cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Notation did not contain exactly three rows.
    #[display("Expected 3 rows, found {_0}")]
    RowCount(#[error(not(source))] usize),

    /// A row did not contain exactly three cells.
    #[display("Row {row} has {width} cells (expected 3)")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of characters found.
        width: usize,
    },

    /// A character was not a valid cell.
    #[display("Invalid cell {ch:?} in row {row}")]
    InvalidChar {
        /// Zero-based row index.
        row: usize,
        /// Offending character.
        ch: char,
    },
}
