//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, EnumIter)]
pub enum Mark {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the board.
///
/// Rendered as `X`, `O`, or a space when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    #[display(" ")]
    Empty,
    /// Holds an X.
    #[display("X")]
    X,
    /// Holds an O.
    #[display("O")]
    O,
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// True when no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Parses a notation character.
    ///
    /// `X` and `O` are marks; a space, `.` or `_` is an empty cell.
    pub(crate) fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            ' ' | '.' | '_' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    #[display("{_0} wins")]
    Won(Mark),
    /// Board full with no complete line.
    #[display("draw")]
    Draw,
    /// No complete line and at least one empty cell left.
    #[display("in progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
