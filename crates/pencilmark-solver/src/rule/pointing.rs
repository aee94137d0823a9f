use log::debug;
use pencilmark_core::{Board, Digit, Position};

/// Applies the pointing-pair rule once across the whole board.
///
/// For each box (index order) and digit (ascending): when the box's coverage
/// for the digit is exactly 2, any aligned pair whose two cells both hold the
/// digit is necessarily the box's only holders: the digit is confined to
/// that row or column within the box, so it cannot appear elsewhere on the
/// same line. The first such pair found (in the pinned
/// [`Position::ALIGNED_PAIRS`] order) licenses eliminating the digit from
/// every cell on the shared line outside the box; the scan then moves on to
/// the next digit.
///
/// Each `(box, digit)` combination gets exactly one elimination attempt per
/// call. The pass does not re-scan boxes narrowed earlier in the same call;
/// the driver decides when to run the rule again.
///
/// Returns whether any candidate was removed.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Board, Digit, Position};
/// use pencilmark_solver::rule::apply_pointing_pairs;
///
/// let mut board = Board::new();
/// // confine digit 5 in box 0 to the pair (0, 0) / (1, 0)
/// let five = Digit::from_value(5);
/// for &pos in &Position::BOXES[0] {
///     if pos != Position::new(0, 0) && pos != Position::new(1, 0) {
///         board.remove_candidate(pos, five);
///     }
/// }
///
/// assert!(apply_pointing_pairs(&mut board));
/// // digit 5 is gone from the rest of row 0
/// assert!(!board.candidates_at(Position::new(5, 0)).contains(five));
/// ```
pub fn apply_pointing_pairs(board: &mut Board) -> bool {
    let mut changed = false;
    for box_index in 0..9u8 {
        for digit in Digit::ALL {
            if board.coverage(box_index, digit) != 2 {
                continue;
            }
            for &(p1, p2) in &Position::ALIGNED_PAIRS[box_index as usize] {
                if board.candidates_at(p1).contains(digit)
                    && board.candidates_at(p2).contains(digit)
                {
                    changed |= eliminate_along_line(board, box_index, digit, p1, p2);
                    break;
                }
            }
        }
    }
    changed
}

/// Removes `digit` from the cells sharing the pair's line but lying outside
/// the pair's box.
fn eliminate_along_line(
    board: &mut Board,
    box_index: u8,
    digit: Digit,
    p1: Position,
    p2: Position,
) -> bool {
    let line = if p1.y() == p2.y() {
        &Position::ROWS[p1.y() as usize]
    } else {
        &Position::COLUMNS[p1.x() as usize]
    };
    let mut changed = false;
    for &pos in line {
        if pos.box_index() != box_index && board.remove_candidate(pos, digit) {
            debug!("pointing pair {p1}/{p2}: removed {digit} from {pos}");
            changed = true;
        }
    }
    changed
}
