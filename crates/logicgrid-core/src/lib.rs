//! Core data structures for the logicgrid puzzle engine.
//!
//! This crate provides the board model shared by the solving, generation,
//! and game-session components:
//!
//! - [`digit`]: Type-safe representation of the digits 1-9
//! - [`position`]: Board position (x, y) coordinates and peer lookup
//! - [`digit_set`]: Sets of digits 1-9 as 9-bit bitmasks
//! - [`position_set`]: Sets of board positions as 81-bit bitmasks
//! - [`board`]: The 9×9 board with its given mask, validity checks,
//!   candidate derivation, and the 81-character text encoding
//!
//! Candidate sets are always derived on demand from the board; they are
//! never stored alongside it, so they can never go stale.
//!
//! # Examples
//!
//! ```
//! use logicgrid_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(4, 4), Some(Digit::D5));
//!
//! let candidates = board.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(Digit::D5)); // 5 is taken in the column
//! assert!(board.is_valid());
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod position;
pub mod position_set;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
    position_set::PositionSet,
};
