//! The 3x3 board.

use crate::coord::{Coord, SIZE};
use crate::error::{BoardParseError, MoveError};
use crate::rules;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The grid shape is fixed by the type; every cell is one of
/// [`Cell::Empty`], [`Cell::X`] or [`Cell::O`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a validated coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Gets the cell at a signed row/column pair.
    #[instrument(skip(self))]
    pub fn cell(&self, row: isize, col: isize) -> Result<Cell, MoveError> {
        Ok(self.get(Coord::new(row, col)?))
    }

    /// Overwrites the cell at a validated coordinate.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Coordinates of every empty cell, in row-major order.
    #[instrument(skip(self))]
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// True when no empty cell remains.
    ///
    /// Same check as [`crate::is_full`].
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Parses three rows of `X`, `O` and blanks, separated by newlines or `/`.
///
/// ```
/// use tictactoe_engine::{Board, Cell};
///
/// let board: Board = "XXX/ OO/   ".parse().unwrap();
/// assert_eq!(board.rows()[1], [Cell::Empty, Cell::O, Cell::O]);
/// ```
impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('\n').unwrap_or(s);
        let rows: Vec<&str> = s.split(['\n', '/']).collect();
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != SIZE {
                return Err(BoardParseError::RowWidth { row: r, width });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(BoardParseError::InvalidChar { row: r, ch })?;
                board.set(Coord::at(r, c), cell);
            }
        }
        Ok(board)
    }
}
