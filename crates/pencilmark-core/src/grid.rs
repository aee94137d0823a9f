//! The external 9×9 grid encoding: digits 1-9 plus 0 for blanks.
//!
//! [`DigitGrid`] is the input and output format of the engine. It carries no
//! candidate information; [`Board::seed`](crate::Board::seed) turns clues
//! into propagated candidate state, and
//! [`Board::read_grid`](crate::Board::read_grid) reads the fixed cells back
//! out. Validation of untrusted input (range checks, cell counts) happens
//! here, before anything reaches the propagation core.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// A 9×9 grid of clues: `Some(digit)` for a filled cell, `None` for a blank.
///
/// # Text format
///
/// `FromStr` accepts 81 cells in row-major order, where `1`-`9` are clues and
/// `0`, `.`, or `_` are blanks; all whitespace is ignored. `Display` emits
/// the same format (with `.` for blanks), so formatting and parsing
/// round-trip.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{DigitGrid, Digit, Position};
///
/// let grid: DigitGrid = "
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
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::from_value(5)));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// assert_eq!(grid.filled_count(), 30);
/// # Ok::<(), pencilmark_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell blank.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the clue at `pos`, or `None` for a blank cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the clue at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the grid as rows of numeric values, 0 for blanks.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            values[pos.y() as usize][pos.x() as usize] =
                self.get(pos).map_or(0, Digit::value);
        }
        values
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<[[u8; 9]; 9]> for DigitGrid {
    type Error = DigitOutOfRange;

    /// Builds a grid from rows of numeric values, where 0 denotes a blank.
    fn try_from(values: [[u8; 9]; 9]) -> Result<Self, Self::Error> {
        let mut grid = Self::empty();
        for pos in Position::ALL {
            let value = values[pos.y() as usize][pos.x() as usize];
            let digit = match value {
                0 => None,
                1..=9 => Digit::try_from_value(value),
                _ => return Err(DigitOutOfRange { value }),
            };
            grid.set(pos, digit);
        }
        Ok(grid)
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::empty();
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '0' | '.' | '_' => None,
                '1'..='9' => Digit::try_from_value(character as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if count < 81 {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9u8 {
            for x in 0..9u8 {
                if x == 3 || x == 6 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than `0`-`9`, `.`, `_`, or whitespace.
    #[display("invalid character {character:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected exactly 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// Error converting numeric rows into a grid: a value was greater than 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell value {value} out of range (expected 0-9)")]
pub struct DigitOutOfRange {
    /// The offending value.
    pub value: u8,
}
