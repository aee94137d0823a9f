//! Shared helpers for the test modules of this crate.

use pencilmark_core::{Board, Digit, DigitGrid};

/// 30-clue puzzle solvable by singles alone; used across the rule and driver
/// tests. It needs 51 deductions.
pub const MEDIUM_PUZZLE: &str = "
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

/// Shorthand for [`Digit::from_value`].
pub fn d(value: u8) -> Digit {
    Digit::from_value(value)
}

/// Parses a grid, panicking on malformed test input.
pub fn grid_from_str(s: &str) -> DigitGrid {
    s.parse().unwrap()
}

/// Parses a grid and seeds a board from it.
pub fn board_from_str(s: &str) -> Board {
    Board::from_grid(&grid_from_str(s))
}
