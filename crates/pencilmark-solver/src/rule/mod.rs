//! Deduction rules over a [`Board`](pencilmark_core::Board).
//!
//! Two kinds of rule exist:
//!
//! - [`find_forced_cell`] is read-only: it locates one cell whose digit is
//!   forced (a hidden single or a naked single) and reports it without
//!   touching the board. The driver performs the actual fix.
//! - [`apply_pointing_pairs`] is read/write: it narrows candidate sets
//!   without fixing any cell, which can unblock the forced-cell scan on
//!   puzzles that singles alone cannot finish.
//!
//! Every scan order in this module is pinned (boxes 0-8, digits ascending,
//! cells row-major within a box, aligned pairs in the
//! [`Position::ALIGNED_PAIRS`](pencilmark_core::Position::ALIGNED_PAIRS)
//! order), so a given board state always yields the same deduction.

pub use self::{
    forced::{ForcedCell, ForcedRule, find_forced_cell},
    pointing::apply_pointing_pairs,
};

mod forced;
mod pointing;
