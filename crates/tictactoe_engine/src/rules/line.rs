//! The eight winning lines.

use crate::coord::Coord;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A row, column or diagonal of three cells.
///
/// Declaration order is evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals. When several lines are
/// complete, the first one in this order decides the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The three coordinates on this line.
    pub fn coords(self) -> [Coord; 3] {
        match self {
            Line::TopRow => Self::row(0),
            Line::MiddleRow => Self::row(1),
            Line::BottomRow => Self::row(2),
            Line::LeftColumn => Self::column(0),
            Line::CenterColumn => Self::column(1),
            Line::RightColumn => Self::column(2),
            Line::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }

    fn row(r: usize) -> [Coord; 3] {
        [Coord::at(r, 0), Coord::at(r, 1), Coord::at(r, 2)]
    }

    fn column(c: usize) -> [Coord; 3] {
        [Coord::at(0, c), Coord::at(1, c), Coord::at(2, c)]
    }
}
