//! A propagation-only solver for 9×9 number-place (Sudoku) puzzles.
//!
//! The solver works purely by candidate elimination on the
//! [`pencilmark_core`] board: it repeatedly finds a forced cell (a hidden or
//! naked single), fixes it, and optionally narrows candidate sets with the
//! pointing-pair rule, until nothing more is forced or the step budget runs
//! out. There is no backtracking and no guessing, so the result on a
//! too-hard puzzle is an honest partial: every deduction made, plus the
//! count of cells still open.
//!
//! - [`rule`]: the individual deduction rules
//! - [`PropagationSolver`]: the fixed-point driver and its [`SolveReport`]
//!
//! # Examples
//!
//! ```
//! use pencilmark_solver::PropagationSolver;
//!
//! let grid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! let report = PropagationSolver::new().solve(&grid);
//! assert!(report.is_solved());
//! # Ok::<(), pencilmark_core::ParseGridError>(())
//! ```

pub mod rule;

mod driver;

pub use self::driver::{FixTrace, PropagationSolver, SolveReport};

#[cfg(test)]
mod testing;
