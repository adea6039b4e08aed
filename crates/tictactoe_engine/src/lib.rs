//! Tic-tac-toe rules engine.
//!
//! A 3x3 board of [`Cell`]s plus four operations: [`create`],
//! [`place_mark`], [`check_winner`] and [`reset`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Mark, MoveError, Outcome, check_winner, create, place_mark};
//!
//! # fn main() -> Result<(), MoveError> {
//! let mut board = create();
//! for col in 0..3 {
//!     assert!(place_mark(&mut board, 0, col, Mark::X)?);
//! }
//! assert!(!place_mark(&mut board, 0, 0, Mark::O)?);
//! assert_eq!(check_winner(&board), Outcome::Won(Mark::X));
//! assert!(place_mark(&mut board, 3, 0, Mark::O).is_err());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coord;
mod engine;
mod error;
mod rules;
mod types;

pub use board::Board;
pub use coord::{Coord, SIZE};
pub use engine::{check_winner, create, place_mark, reset};
pub use error::{BoardParseError, MoveError};
pub use rules::{Line, is_full, winning_line};
pub use types::{Cell, Mark, Outcome};
