//! Candidate digit sets for open cells.
//!
//! A [`CandidateSet`] is a 9-bit mask over the digits 1-9: bit `n - 1` is set
//! when digit `n` is still possible in a cell. Membership tests, insertion,
//! and removal are O(1); the cardinality is a population count, which is what
//! makes the per-box coverage aggregates of
//! [`Board`](crate::Board) cheap to maintain.

use std::fmt::{self, Debug};

use crate::digit::Digit;

const MASK: u16 = 0x1ff;

/// A set of candidate digits (1-9) for a single cell, stored as a 9-bit mask.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{CandidateSet, Digit};
///
/// let mut candidates = CandidateSet::FULL;
/// candidates.remove(Digit::from_value(5));
/// candidates.remove(Digit::from_value(7));
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::from_value(5)));
/// assert!(candidates.contains(Digit::from_value(1)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet(u16);

impl CandidateSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The full set {1..9}, the initial state of every open cell.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty candidate set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if `digit` is a member of this set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Inserts `digit` into this set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= digit.bit();
    }

    /// Removes `digit` from this set, returning whether it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.0 &= !digit.bit();
        present
    }

    /// Returns the number of candidates in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if this set has no candidates.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if this set has exactly one candidate.
    ///
    /// This is the naked-single test: a cell whose candidate set reduces to a
    /// single digit is forced to hold that digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pencilmark_core::{CandidateSet, Digit};
    ///
    /// assert_eq!(CandidateSet::FULL.as_single(), None);
    /// assert_eq!(CandidateSet::EMPTY.as_single(), None);
    ///
    /// let single: CandidateSet = [Digit::from_value(3)].into_iter().collect();
    /// assert_eq!(single.as_single(), Some(Digit::from_value(3)));
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Iterates over the members of this set in ascending digit order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Digit> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::from_value(value)
    }

    #[test]
    fn test_membership() {
        let mut set = CandidateSet::new();
        assert!(set.is_empty());
        set.insert(d(1));
        set.insert(d(9));
        assert!(set.contains(d(1)));
        assert!(set.contains(d(9)));
        assert!(!set.contains(d(5)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut set: CandidateSet = [d(2), d(4)].into_iter().collect();
        assert!(set.remove(d(2)));
        assert!(!set.remove(d(2)));
        assert!(!set.remove(d(7)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_ascending() {
        let set: CandidateSet = [d(9), d(1), d(5), d(3)].into_iter().collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![d(1), d(3), d(5), d(9)]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(CandidateSet::EMPTY.as_single(), None);
        assert_eq!(CandidateSet::FULL.as_single(), None);
        for digit in Digit::ALL {
            let set: CandidateSet = [digit].into_iter().collect();
            assert_eq!(set.as_single(), Some(digit));
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(CandidateSet::EMPTY.len(), 0);
        assert_eq!(CandidateSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(CandidateSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_debug_lists_digits() {
        let set: CandidateSet = [d(2), d(8)].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{2, 8}");
        assert_eq!(format!("{:?}", CandidateSet::EMPTY), "{}");
        assert_eq!(
            format!("{:?}", CandidateSet::FULL),
            "{1, 2, 3, 4, 5, 6, 7, 8, 9}"
        );
    }
}
