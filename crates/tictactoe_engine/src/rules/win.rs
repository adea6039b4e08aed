//! Win detection logic for tic-tac-toe.

use super::line::Line;
use crate::board::Board;
use crate::types::Mark;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first complete line on the board.
///
/// Returns `Some((line, mark))` when all three cells of `line` hold `mark`,
/// `None` otherwise. Lines are checked in [`Line`] declaration order, so on
/// a board with several complete lines the earliest one wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.coords().map(|coord| board.get(coord));
        match a.mark() {
            Some(mark) if a == b && b == c => Some((line, mark)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(
            winning_line(&parse("XXX/ OO/   ")),
            Some((Line::TopRow, Mark::X))
        );
    }

    #[test]
    fn test_winner_middle_row() {
        assert_eq!(
            winning_line(&parse("XXO/OOO/X  ")),
            Some((Line::MiddleRow, Mark::O))
        );
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(
            winning_line(&parse(" XO/ XO/ X ")),
            Some((Line::CenterColumn, Mark::X))
        );
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(
            winning_line(&parse("O X/XO /  O")),
            Some((Line::MainDiagonal, Mark::O))
        );
        assert_eq!(
            winning_line(&parse("O X/ X /XO ")),
            Some((Line::AntiDiagonal, Mark::X))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winning_line(&parse("XX /   /   ")), None);
    }

    #[test]
    fn test_earlier_row_wins() {
        let board = parse("XXX/OOO/   ");
        assert_eq!(winning_line(&board), Some((Line::TopRow, Mark::X)));

        let board = parse("   /OOO/XXX");
        assert_eq!(winning_line(&board), Some((Line::MiddleRow, Mark::O)));
    }

    #[test]
    fn test_row_reported_before_column() {
        let board = parse("XXX/X O/X O");
        assert_eq!(winning_line(&board), Some((Line::TopRow, Mark::X)));
    }

    #[test]
    fn test_earlier_column_wins() {
        let board = parse("XOO/XO /XO ");
        assert_eq!(winning_line(&board), Some((Line::LeftColumn, Mark::X)));
    }
}
