use pencilmark_core::{Board, Digit, Position};

/// The rule that proved a cell forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ForcedRule {
    /// The digit's box coverage dropped to one: only a single cell in the
    /// box still offers it, even if that cell has other candidates.
    #[display("hidden single")]
    HiddenSingle,
    /// The cell's candidate set reduced to a single digit.
    #[display("naked single")]
    NakedSingle,
}

/// A cell whose digit is forced by the current board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedCell {
    /// Where the digit must go.
    pub position: Position,
    /// The forced digit.
    pub digit: Digit,
    /// Which rule proved it.
    pub rule: ForcedRule,
}

impl Default for ForcedCell {
    fn default() -> Self {
        Self {
            position: Position::default(),
            digit: Digit::ALL[0],
            rule: ForcedRule::NakedSingle,
        }
    }
}

/// Finds one forced cell, or `None` if no box yields one.
///
/// Boxes are scanned in index order (row-major across the board). Within a
/// box the hidden-single test runs first, for digits in ascending order; the
/// naked-single test follows, for cells in row-major order within the box.
/// The first hit across the whole scan is returned, which makes the
/// deduction sequence for a given board state fully deterministic.
///
/// The board is not modified; the caller decides whether to fix the result.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Board;
/// use pencilmark_solver::rule::find_forced_cell;
///
/// // an empty board forces nothing: every coverage count is 9 and every
/// // cell still has nine candidates
/// assert_eq!(find_forced_cell(&Board::new()), None);
/// ```
#[must_use]
pub fn find_forced_cell(board: &Board) -> Option<ForcedCell> {
    for box_index in 0..9u8 {
        let cells = &Position::BOXES[box_index as usize];

        for digit in Digit::ALL {
            if board.coverage(box_index, digit) != 1 {
                continue;
            }
            // exactly one open cell in the box still offers this digit
            if let Some(&position) = cells
                .iter()
                .find(|pos| board.candidates_at(**pos).contains(digit))
            {
                return Some(ForcedCell {
                    position,
                    digit,
                    rule: ForcedRule::HiddenSingle,
                });
            }
        }

        for &position in cells {
            if let Some(digit) = board.candidates_at(position).as_single() {
                return Some(ForcedCell {
                    position,
                    digit,
                    rule: ForcedRule::NakedSingle,
                });
            }
        }
    }
    None
}
