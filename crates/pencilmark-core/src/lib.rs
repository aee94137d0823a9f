//! Core data structures for the pencilmark propagation engine.
//!
//! This crate provides the data model for candidate-elimination solving of
//! 9×9 number-place (Sudoku) grids:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`candidates`]: 9-bit candidate masks for open cells
//! - [`position`]: coordinates and the static row/column/box grouping tables
//! - [`grid`]: the external 0..9 grid encoding with text parsing/formatting
//! - [`board`]: the mutable propagation state (cell states, per-box coverage
//!   aggregates, and the [`Board::fix`] propagation primitive)
//!
//! The deduction rules and the driver loop live in the companion
//! `pencilmark-solver` crate; this crate owns everything they read and write.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.fix(Position::new(4, 4), Digit::from_value(5));
//!
//! // fixing a cell removes the digit from all row/column/box peers
//! assert!(!board
//!     .candidates_at(Position::new(4, 0))
//!     .contains(Digit::from_value(5)));
//! ```

pub mod board;
pub mod candidates;
pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    board::{Board, Cell},
    candidates::CandidateSet,
    digit::Digit,
    grid::{DigitGrid, DigitOutOfRange, ParseGridError},
    position::Position,
};
