//! Board coordinates and the row/column/box grouping tables.
//!
//! Every cell belongs to exactly one row, one column, and one 3×3 box. The
//! deduction rules depend on scanning these groups in a pinned order, so the
//! groups are exposed as `const` tables built once at compile time rather
//! than as stateful iterators:
//!
//! - [`Position::ROWS`], [`Position::COLUMNS`]: the nine cells of each line.
//! - [`Position::BOXES`]: the nine cells of each box, row-major within the
//!   box (top-left to bottom-right).
//! - [`Position::ALIGNED_PAIRS`]: per box, the 18 cell pairs sharing a row
//!   or a column, in the order documented on the constant. This order is part
//!   of the crate's determinism contract.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board: column `x`, row `y`, both 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            #[expect(clippy::cast_possible_truncation)]
            let (x, y) = ((i % 9) as u8, (i / 9) as u8);
            all[i] = Self::new(x, y);
            i += 1;
        }
        all
    };

    /// The nine cells of each row, indexed by `y`, in ascending `x` order.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y as usize][x as usize] = Self::new(x, y);
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// The nine cells of each column, indexed by `x`, in ascending `y` order.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x as usize][y as usize] = Self::new(x, y);
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// The nine cells of each box, indexed by box index, row-major within the
    /// box (top-left to bottom-right).
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut b = 0;
        while b < 9 {
            let mut cell = 0;
            while cell < 9 {
                boxes[b as usize][cell as usize] = Self::from_box(b, cell);
                cell += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Per box, the 18 cell pairs within the box that share a row or column.
    ///
    /// The enumeration order is fixed: the nine row-aligned pairs first (rows
    /// top to bottom, and within a row the pairs `(0,1)`, `(0,2)`, `(1,2)` by
    /// cell offset), then the nine column-aligned pairs (columns left to
    /// right, same pair order). The pointing-pair rule scans this table in
    /// order, so the first qualifying pair is the same on every run.
    pub const ALIGNED_PAIRS: [[(Self, Self); 18]; 9] = {
        let offsets: [(u8, u8); 3] = [(0, 1), (0, 2), (1, 2)];
        let mut pairs = [[(Self { x: 0, y: 0 }, Self { x: 0, y: 0 }); 18]; 9];
        let mut b = 0;
        while b < 9 {
            let mut k = 0;
            let mut line = 0;
            while line < 3 {
                let mut p = 0;
                while p < 3 {
                    let (i, j) = offsets[p];
                    // row `line` of the box
                    pairs[b as usize][k] =
                        (Self::from_box(b, line * 3 + i), Self::from_box(b, line * 3 + j));
                    // column `line` of the box
                    pairs[b as usize][k + 9] =
                        (Self::from_box(b, i * 3 + line), Self::from_box(b, j * 3 + line));
                    k += 1;
                    p += 1;
                }
                line += 1;
            }
            b += 1;
        }
        pairs
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Converts a box index (0-8) and a cell offset within the box (0-8,
    /// row-major) into a position.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the linear cell index in row-major order (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8 row-major: box 0 is the top-left, box 2 the
    /// top-right, box 8 the bottom-right.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
