//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// The value is validated at construction time, so every `Digit` in
/// circulation is a legal clue or candidate. Blank cells are not digits;
/// they are represented as `None` / `0` by [`DigitGrid`](crate::DigitGrid).
///
/// # Examples
///
/// ```
/// use pencilmark_core::Digit;
///
/// let digit = Digit::from_value(5);
/// assert_eq!(digit.value(), 5);
///
/// // Fallible construction for untrusted input
/// assert!(Digit::try_from_value(0).is_none());
///
/// // Iterate over all digits in ascending order
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self(1); 9];
        let mut value = 1;
        while value <= 9 {
            all[(value - 1) as usize] = Self(value);
            value += 1;
        }
        all
    };

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use pencilmark_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(1).value(), 1);
    /// assert_eq!(Digit::from_value(9).value(), 9);
    /// ```
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        assert!(matches!(value, 1..=9), "digit value must be 1-9");
        Self(value)
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use pencilmark_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(7), Some(Digit::from_value(7)));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Bit of this digit in a 9-bit candidate mask (bit `n - 1` for digit `n`).
    pub(crate) const fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }

    /// Zero-based table index of this digit (0-8).
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
