//! Mutable propagation state: cell states plus per-box coverage aggregates.
//!
//! [`Board`] is created fresh per solve, seeded from a [`DigitGrid`], mutated
//! in place by [`Board::fix`] and [`Board::remove_candidate`], and read back
//! out with [`Board::read_grid`]. It never persists across solves and is
//! never shared between threads.
//!
//! # Coverage aggregates
//!
//! For every box `b` and digit `d`, `coverage(b, d)` is the number of open
//! cells in `b` whose candidate set still contains `d`; fixed cells
//! contribute 0. The aggregate is maintained incrementally on every candidate
//! removal, so the hidden-single test (`coverage == 1`) and the
//! pointing-pair precondition (`coverage == 2`) are O(1) lookups.

use crate::{
    candidates::CandidateSet,
    digit::Digit,
    grid::DigitGrid,
    position::Position,
};

/// The state of a single cell: a fixed digit, or the set of digits still
/// possible there. The two are mutually exclusive; a fixed cell has no
/// candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The cell holds this digit, either as a clue or by deduction.
    Fixed(Digit),
    /// The cell is undecided; the set lists the digits still possible.
    Open(CandidateSet),
}

impl Cell {
    /// Returns the candidate set, which is empty for a fixed cell.
    #[must_use]
    pub const fn candidates(self) -> CandidateSet {
        match self {
            Cell::Fixed(_) => CandidateSet::EMPTY,
            Cell::Open(set) => set,
        }
    }

    /// Returns the fixed digit, or `None` for an open cell.
    #[must_use]
    pub const fn fixed_digit(self) -> Option<Digit> {
        match self {
            Cell::Fixed(digit) => Some(digit),
            Cell::Open(_) => None,
        }
    }

    /// Returns `true` if the cell is still undecided.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open(_))
    }
}

/// The 81 cell states plus the per-box per-digit coverage aggregate.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// board.fix(Position::new(0, 0), Digit::from_value(1));
///
/// // the digit is gone from every peer's candidate set
/// assert!(!board
///     .candidates_at(Position::new(8, 0))
///     .contains(Digit::from_value(1)));
/// // and no cell in the box still offers it
/// assert_eq!(board.coverage(0, Digit::from_value(1)), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
    /// `coverage[b][d.index()]`: open cells in box `b` whose set contains `d`.
    coverage: [[u8; 9]; 9],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with every cell open with the full candidate set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Open(CandidateSet::FULL); 81],
            coverage: [[9; 9]; 9],
        }
    }

    /// Creates a board seeded from a grid of clues.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut board = Self::new();
        board.seed(grid);
        board
    }

    /// Fixes every clue of `grid` on this board, in row-major scan order.
    ///
    /// Each clue is propagated through [`fix`](Self::fix), so after seeding
    /// the candidate sets and aggregates already reflect every given. The
    /// grid is not validated first; a clue that conflicts with an earlier one
    /// is dropped by the `fix` guard, and any resulting inconsistency shows
    /// up through [`has_contradiction`](Self::has_contradiction).
    pub fn seed(&mut self, grid: &DigitGrid) {
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                self.fix(pos, digit);
            }
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the candidate set at `pos`, empty for a fixed cell.
    #[must_use]
    pub const fn candidates_at(&self, pos: Position) -> CandidateSet {
        self.cell(pos).candidates()
    }

    /// Returns the number of open cells in box `box_index` whose candidate
    /// set contains `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub const fn coverage(&self, box_index: u8, digit: Digit) -> u8 {
        self.coverage[box_index as usize][digit.index()]
    }

    /// Fixes `digit` at `pos` and propagates: the digit is removed from the
    /// candidate set of every open cell in the same row, column, and box,
    /// with the coverage aggregates updated per removal.
    ///
    /// Callers are expected to fix only proven cells: `pos` open and `digit`
    /// in its candidate set. The operation is guarded rather than fallible:
    /// fixing an already-fixed cell is a no-op (so aggregates can never be
    /// double-decremented), and fixing a digit the cell no longer offers
    /// leaves the board untouched.
    pub fn fix(&mut self, pos: Position, digit: Digit) {
        let Cell::Open(set) = self.cells[pos.index()] else {
            return;
        };
        if !set.contains(digit) {
            return;
        }

        // The cell stops being open, so every one of its candidates (the
        // chosen digit included) leaves the box aggregates.
        let box_index = pos.box_index() as usize;
        for d in set.iter() {
            self.coverage[box_index][d.index()] -= 1;
        }
        self.cells[pos.index()] = Cell::Fixed(digit);

        for peer in Position::ROWS[pos.y() as usize] {
            self.remove_candidate(peer, digit);
        }
        for peer in Position::COLUMNS[pos.x() as usize] {
            self.remove_candidate(peer, digit);
        }
        for peer in Position::BOXES[box_index] {
            self.remove_candidate(peer, digit);
        }
    }

    /// Removes `digit` from the candidate set at `pos`, decrementing the
    /// box's coverage aggregate. Returns whether anything changed; fixed
    /// cells and absent candidates are left alone.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        let removed = match &mut self.cells[pos.index()] {
            Cell::Open(set) => set.remove(digit),
            Cell::Fixed(_) => false,
        };
        if removed {
            self.coverage[pos.box_index() as usize][digit.index()] -= 1;
        }
        removed
    }

    /// Reads the fixed cells back out as a grid, blanks for open cells.
    #[must_use]
    pub fn read_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::empty();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).fixed_digit());
        }
        grid
    }

    /// Returns `true` if any open cell has an empty candidate set, meaning
    /// the clues (or an earlier deduction) admit no solution.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| matches!(cell, Cell::Open(set) if set.is_empty()))
    }

    /// Returns the number of cells still open.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const MEDIUM: &str = "
        53. .7. ...
        6.. 195 ...
        .98 ... .6.
        8.. .6. ..3
        4.. 8.3 ..1
        7.. .2. ..6
        .6. ... 28.
        ... 419 ..5
        ... .8. .79
    ";

    fn d(value: u8) -> Digit {
        Digit::from_value(value)
    }

    /// Recomputes what the coverage table should be from the cell states.
    fn recount_coverage(board: &Board) -> [[u8; 9]; 9] {
        let mut expected = [[0u8; 9]; 9];
        for (b, cells) in Position::BOXES.iter().enumerate() {
            for &pos in cells {
                for digit in board.candidates_at(pos).iter() {
                    expected[b][digit.index()] += 1;
                }
            }
        }
        expected
    }

    fn assert_coverage_consistent(board: &Board) {
        let expected = recount_coverage(board);
        for b in 0..9u8 {
            for digit in Digit::ALL {
                assert_eq!(
                    board.coverage(b, digit),
                    expected[b as usize][digit.index()],
                    "coverage mismatch for box {b}, digit {digit}"
                );
            }
        }
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for pos in Position::ALL {
            assert_eq!(board.candidates_at(pos), CandidateSet::FULL);
        }
        for b in 0..9 {
            for digit in Digit::ALL {
                assert_eq!(board.coverage(b, digit), 9);
            }
        }
        assert_eq!(board.open_cell_count(), 81);
        assert!(!board.has_contradiction());
    }

    #[test]
    fn test_single_clue_propagation() {
        let mut board = Board::new();
        board.fix(Position::new(0, 0), d(1));

        assert_eq!(board.cell(Position::new(0, 0)), Cell::Fixed(d(1)));
        assert!(board.candidates_at(Position::new(0, 0)).is_empty());
        // no cell in box 0 still offers digit 1
        assert_eq!(board.coverage(0, d(1)), 0);
        // the other digits lost only the fixed cell itself
        for digit in Digit::ALL {
            if digit != d(1) {
                assert_eq!(board.coverage(0, digit), 8);
            }
        }
        // row and column peers outside the box lost digit 1
        assert!(!board.candidates_at(Position::new(8, 0)).contains(d(1)));
        assert!(!board.candidates_at(Position::new(0, 8)).contains(d(1)));
        // an unrelated cell is untouched
        assert_eq!(board.candidates_at(Position::new(4, 4)), CandidateSet::FULL);
        assert_coverage_consistent(&board);
    }

    #[test]
    fn test_sequential_fills_in_one_box() {
        let mut board = Board::new();

        board.fix(Position::new(0, 0), d(1));
        assert_eq!(board.coverage(0, d(1)), 0);
        assert_eq!(board.coverage(0, d(2)), 8);

        board.fix(Position::new(1, 0), d(2));
        assert_eq!(board.coverage(0, d(2)), 0);
        assert_eq!(board.coverage(0, d(3)), 7);

        board.fix(Position::new(2, 0), d(3));
        assert_eq!(board.coverage(0, d(3)), 0);
        assert_eq!(board.coverage(0, d(4)), 6);

        assert_coverage_consistent(&board);
    }

    #[test]
    fn test_fix_is_idempotent() {
        let mut board = Board::new();
        board.fix(Position::new(4, 4), d(7));
        let snapshot = board.clone();

        board.fix(Position::new(4, 4), d(7));
        assert_eq!(board, snapshot);

        // refixing with a different digit is also a guarded no-op
        board.fix(Position::new(4, 4), d(3));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_fix_without_candidate_is_a_no_op() {
        let mut board = Board::new();
        board.fix(Position::new(0, 0), d(5));
        let snapshot = board.clone();

        // (1, 0) no longer offers 5; the contract-violating call is dropped
        board.fix(Position::new(1, 0), d(5));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_remove_candidate_maintains_coverage() {
        let mut board = Board::new();
        let pos = Position::new(3, 3);

        assert!(board.remove_candidate(pos, d(6)));
        assert_eq!(board.coverage(4, d(6)), 8);
        // second removal reports no change and leaves the aggregate alone
        assert!(!board.remove_candidate(pos, d(6)));
        assert_eq!(board.coverage(4, d(6)), 8);
        assert_coverage_consistent(&board);
    }

    #[test]
    fn test_seed_and_read_grid_round_trip() {
        let grid: DigitGrid = MEDIUM.parse().unwrap();
        let board = Board::from_grid(&grid);

        // every clue came back fixed, every blank is still open
        for pos in Position::ALL {
            match grid.get(pos) {
                Some(digit) => assert_eq!(board.cell(pos), Cell::Fixed(digit)),
                None => assert!(board.cell(pos).is_open()),
            }
        }
        assert_eq!(board.open_cell_count(), 51);
        assert!(!board.has_contradiction());
        assert_coverage_consistent(&board);

        // read_grid reproduces exactly the fixed cells
        assert_eq!(board.read_grid(), grid);
    }

    #[test]
    fn test_contradiction_detected() {
        // clues 1-8 along row 0 and a 9 below (0, 0): cell (0, 0) has no
        // candidate left
        let mut grid = DigitGrid::empty();
        for value in 1..=8u8 {
            grid.set(Position::new(value, 0), Some(d(value)));
        }
        grid.set(Position::new(0, 1), Some(d(9)));

        let board = Board::from_grid(&grid);
        assert!(board.has_contradiction());
        assert!(board.candidates_at(Position::new(0, 0)).is_empty());
        assert_coverage_consistent(&board);
    }

    #[test]
    fn test_no_duplicate_fixed_digits_in_any_group() {
        let grid: DigitGrid = MEDIUM.parse().unwrap();
        let board = Board::from_grid(&grid);
        assert_groups_duplicate_free(&board);
    }

    fn assert_groups_duplicate_free(board: &Board) {
        let groups = Position::ROWS
            .iter()
            .chain(Position::COLUMNS.iter())
            .chain(Position::BOXES.iter());
        for group in groups {
            let mut seen = CandidateSet::new();
            for &pos in group {
                if let Some(digit) = board.cell(pos).fixed_digit() {
                    assert!(!seen.contains(digit), "duplicate {digit} in a group");
                    seen.insert(digit);
                }
            }
        }
    }

    proptest! {
        /// Any sequence of legal fixes keeps the aggregates exactly in sync
        /// with the candidate sets and never places a duplicate in a group.
        #[test]
        fn prop_fix_sequences_keep_aggregates_consistent(
            ops in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..40),
        ) {
            let mut board = Board::new();
            for (x, y, value) in ops {
                let pos = Position::new(x, y);
                let digit = Digit::from_value(value);
                if board.candidates_at(pos).contains(digit) {
                    board.fix(pos, digit);
                }
            }
            assert_coverage_consistent(&board);
            assert_groups_duplicate_free(&board);
        }

        /// Candidate removals (as the pointing-pair rule performs them)
        /// maintain the same aggregate invariant.
        #[test]
        fn prop_candidate_removals_keep_aggregates_consistent(
            ops in prop::collection::vec((0u8..9, 0u8..9, 1u8..=9), 0..60),
        ) {
            let mut board = Board::new();
            for (x, y, value) in ops {
                board.remove_candidate(Position::new(x, y), Digit::from_value(value));
            }
            assert_coverage_consistent(&board);
        }
    }
}
