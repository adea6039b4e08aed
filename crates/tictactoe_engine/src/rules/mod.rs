//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the engine operations can compose them.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::is_full;
pub use line::Line;
pub use win::winning_line;
