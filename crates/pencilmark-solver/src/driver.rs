use log::trace;
use pencilmark_core::{Board, DigitGrid};
use tinyvec::ArrayVec;

use crate::rule::{ForcedCell, apply_pointing_pairs, find_forced_cell};

/// The sequence of cells fixed during one solve, in order.
///
/// A solve can fix at most 81 cells, so the trace is a fixed-capacity vector
/// that never allocates.
pub type FixTrace = ArrayVec<[ForcedCell; 81]>;

/// A propagation-only solver: repeated forced-cell deduction with optional
/// pointing-pair narrowing between steps.
///
/// The solver performs no backtracking or guessing. Each iteration finds one
/// forced cell, fixes it (which propagates candidate removals to all peers),
/// and optionally runs one pointing-pair pass. It stops when no forced cell
/// remains or the step budget runs out, whichever comes first. The puzzle
/// may then be fully solved, partially solved, or contradictory; the
/// [`SolveReport`] says which.
///
/// For a given input grid the solver is fully deterministic: the sequence of
/// fixed cells, and therefore the output grid, is identical on every run.
///
/// # Examples
///
/// ```
/// use pencilmark_solver::PropagationSolver;
///
/// let grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// let report = PropagationSolver::new().solve(&grid);
/// assert!(report.is_solved());
/// assert_eq!(report.fixes().len(), 51);
/// # Ok::<(), pencilmark_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PropagationSolver {
    step_budget: usize,
    pointing_pairs: bool,
}

impl Default for PropagationSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagationSolver {
    /// The default step budget.
    ///
    /// Every step fixes one open cell, so 81 steps bound any possible run;
    /// the budget is a safety valve against misconfiguration, not a
    /// termination proof for the loop (which terminates because the open
    /// cell count strictly decreases).
    pub const DEFAULT_STEP_BUDGET: usize = 81;

    /// Creates a solver with the default step budget and pointing pairs
    /// enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            step_budget: Self::DEFAULT_STEP_BUDGET,
            pointing_pairs: true,
        }
    }

    /// Sets the maximum number of deduction steps per solve.
    ///
    /// A smaller budget can leave a solvable puzzle partially solved; the
    /// report still carries everything deduced up to the cap.
    #[must_use]
    pub const fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = budget;
        self
    }

    /// Enables or disables the pointing-pair pass between deduction steps.
    ///
    /// With the pass disabled the solver uses hidden and naked singles only,
    /// which finishes easy puzzles but stalls earlier on harder ones.
    #[must_use]
    pub const fn with_pointing_pairs(mut self, enabled: bool) -> Self {
        self.pointing_pairs = enabled;
        self
    }

    /// Solves `grid` as far as propagation allows and reports the result.
    #[must_use]
    pub fn solve(&self, grid: &DigitGrid) -> SolveReport {
        let mut board = Board::from_grid(grid);
        let fixes = self.run(&mut board);
        SolveReport {
            grid: board.read_grid(),
            fixes,
            open_cells: board.open_cell_count(),
            contradiction: board.has_contradiction(),
        }
    }

    /// Runs the deduction loop on an already-seeded board.
    fn run(&self, board: &mut Board) -> FixTrace {
        let mut fixes = FixTrace::new();
        let mut steps = self.step_budget;
        while steps > 0 {
            let Some(forced) = find_forced_cell(board) else {
                break;
            };
            trace!(
                "step {}: {} forces {} at {}",
                fixes.len() + 1,
                forced.rule,
                forced.digit,
                forced.position
            );
            board.fix(forced.position, forced.digit);
            // cannot overflow: each step closes one of at most 81 open cells
            fixes.push(forced);
            if self.pointing_pairs {
                apply_pointing_pairs(board);
            }
            steps -= 1;
        }
        fixes
    }
}

/// The outcome of one [`PropagationSolver::solve`] call.
#[derive(Debug, Clone)]
pub struct SolveReport {
    grid: DigitGrid,
    fixes: FixTrace,
    open_cells: usize,
    contradiction: bool,
}

impl SolveReport {
    /// The board after propagation: fixed digits, 0 for still-open cells.
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// The cells fixed by the solver (seeding clues are not included), in
    /// deduction order.
    #[must_use]
    pub fn fixes(&self) -> &[ForcedCell] {
        &self.fixes
    }

    /// The number of cells still open after propagation stopped.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.open_cells
    }

    /// `true` if propagation drove some open cell's candidate set empty,
    /// meaning the input (or an earlier deduction) admits no solution.
    #[must_use]
    pub fn contradiction(&self) -> bool {
        self.contradiction
    }

    /// `true` if every cell was decided and no contradiction arose.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.open_cells == 0 && !self.contradiction
    }
}
