//! Tests for board notation, lines and serialization.

use strum::IntoEnumIterator;
use tictactoe_engine::{
    Board, BoardParseError, Cell, Coord, Line, Mark, MoveError, Outcome, check_winner, is_full,
    place_mark, winning_line,
};

#[test]
fn test_display_round_trips_through_parse() {
    let mut board = Board::new();
    place_mark(&mut board, 0, 2, Mark::X).unwrap();
    place_mark(&mut board, 1, 1, Mark::O).unwrap();

    let text = board.to_string();
    assert_eq!(text, "  X\n O \n   ");
    assert_eq!(text.parse::<Board>(), Ok(board));
}

#[test]
fn test_parse_accepts_trailing_newline() {
    let board: Board = "XO \n   \n  X\n".parse().unwrap();
    assert_eq!(board.cell(2, 2), Ok(Cell::X));
}

#[test]
fn test_parse_rejects_bad_notation() {
    assert_eq!("".parse::<Board>(), Err(BoardParseError::RowCount(1)));
    assert!(matches!(
        "XXXX/   /   ".parse::<Board>(),
        Err(BoardParseError::RowWidth { row: 0, width: 4 })
    ));
    assert!(matches!(
        "   /   / -X".parse::<Board>(),
        Err(BoardParseError::InvalidChar { row: 2, ch: '-' })
    ));
}

#[test]
fn test_empty_coords_are_legal_targets() {
    let mut board: Board = "XO /  X/O  ".parse().unwrap();
    let free = board.empty_coords();
    assert_eq!(free.len(), 5);

    for coord in free {
        let (row, col) = (coord.row() as isize, coord.col() as isize);
        assert_eq!(place_mark(&mut board, row, col, Mark::O), Ok(true));
    }
    assert!(is_full(&board));
}

#[test]
fn test_cell_lookup_bounds() {
    let board = Board::new();
    assert_eq!(
        board.cell(0, 5),
        Err(MoveError::OutOfBounds { row: 0, col: 5 })
    );
    assert!(Coord::new(2, 2).is_ok());
}

#[test]
fn test_each_line_wins_alone() {
    for line in Line::iter() {
        let mut board = Board::new();
        for coord in line.coords() {
            let (row, col) = (coord.row() as isize, coord.col() as isize);
            place_mark(&mut board, row, col, Mark::O).unwrap();
        }
        assert_eq!(winning_line(&board), Some((line, Mark::O)), "{line}");
        assert_eq!(check_winner(&board), Outcome::Won(Mark::O));
    }
}

#[test]
fn test_two_rows_reports_upper() {
    let board: Board = "   /OOO/XXX".parse().unwrap();
    assert_eq!(check_winner(&board), Outcome::Won(Mark::O));
}

#[test]
fn test_board_serializes_as_rows() {
    let board: Board = "X  / O /   ".parse().unwrap();
    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "cells": [
                ["X", "Empty", "Empty"],
                ["Empty", "O", "Empty"],
                ["Empty", "Empty", "Empty"],
            ]
        })
    );
    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_coord_deserialize_validates_range() {
    let coord: Coord = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
    assert_eq!(coord, Coord::new(2, 1).unwrap());
    assert_eq!(serde_json::to_string(&coord).unwrap(), r#"{"row":2,"col":1}"#);

    for json in [r#"{"row":5,"col":7}"#, r#"{"row":-1,"col":0}"#, r#"{"row":0,"col":3}"#] {
        let err = serde_json::from_str::<Coord>(json).unwrap_err();
        assert!(err.to_string().contains("out of bounds"), "{json}: {err}");
    }
}

#[test]
fn test_outcome_serializes() {
    let json = serde_json::to_string(&Outcome::Won(Mark::X)).unwrap();
    assert_eq!(json, r#"{"Won":"X"}"#);
}
