//! The board engine operations.
//!
//! Stateless functions over caller-owned [`Board`] values. Out-of-range
//! coordinates are an error; an occupied cell is a normal `false` result.

use crate::board::Board;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::rules::{is_full, winning_line};
use crate::types::{Mark, Outcome};
use tracing::{debug, instrument, warn};

/// Creates a new board with every cell empty.
#[instrument]
pub fn create() -> Board {
    Board::new()
}

/// Places `mark` at (`row`, `col`).
///
/// Returns `Ok(true)` when the mark was placed and `Ok(false)` when the cell
/// was already taken; the board is left untouched in the latter case.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] if `row` or `col` is outside `0..=2`. The board
/// is not modified.
#[instrument(skip(board))]
pub fn place_mark(
    board: &mut Board,
    row: isize,
    col: isize,
    mark: Mark,
) -> Result<bool, MoveError> {
    let coord = Coord::new(row, col).inspect_err(|e| warn!(error = %e, "Rejected move"))?;

    if !board.is_empty_at(coord) {
        debug!(%coord, occupant = %board.get(coord), "Cell already occupied");
        return Ok(false);
    }

    board.set(coord, mark.into());
    debug!(%coord, "Mark placed");
    Ok(true)
}

/// Evaluates the board.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// complete line decides the winner. Without a winner the game is a
/// [`Outcome::Draw`] on a full board and [`Outcome::InProgress`] otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Outcome {
    let outcome = if let Some((line, mark)) = winning_line(board) {
        debug!(%line, %mark, "Complete line found");
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    debug!(%outcome, "Board evaluated");
    outcome
}

/// Returns a fresh empty board.
///
/// Does not touch any existing board; callers rebind to the returned value.
#[instrument]
pub fn reset() -> Board {
    create()
}
