//! Validated board coordinates.

use crate::error::MoveError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A (row, col) pair that is guaranteed to lie on the board.
///
/// Deserialization goes through [`Coord::new`], so out-of-range input is
/// rejected with the [`MoveError::OutOfBounds`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unvalidated wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: isize,
    col: isize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = MoveError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Validates a signed row/column pair.
    ///
    /// Negative or too-large indices fail with [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn new(row: isize, col: isize) -> Result<Self, MoveError> {
        match (Self::axis(row), Self::axis(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(MoveError::OutOfBounds { row, col }),
        }
    }

    /// Builds a coordinate from indices already known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn axis(index: isize) -> Option<usize> {
        usize::try_from(index).ok().filter(|&i| i < SIZE)
    }

    /// Row index (0 is the top row).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 is the left column).
    pub fn col(self) -> usize {
        self.col
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord::at(row, col)))
    }
}
