//! Sets of board positions as 81-bit bitmasks.

use std::fmt::{self, Debug};

use crate::position::Position;

/// A set of board positions, backed by the low 81 bits of a `u128`.
///
/// Used for the given mask and for removal bookkeeping during generation.
///
/// # Examples
///
/// ```
/// use logicgrid_core::{Position, PositionSet};
///
/// let mut set = PositionSet::new();
/// set.insert(Position::new(0, 0));
/// set.insert(Position::new(8, 8));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Position::new(0, 0)));
/// assert!(!set.contains(Position::new(4, 4)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 81 positions.
    pub const FULL: Self = Self {
        bits: (1 << 81) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(pos: Position) -> u128 {
        1 << pos.cell_index()
    }

    /// Inserts a position. Returns `true` if it was not already present.
    pub const fn insert(&mut self, pos: Position) -> bool {
        let bit = Self::bit(pos);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a position. Returns `true` if it was present.
    pub const fn remove(&mut self, pos: Position) -> bool {
        let bit = Self::bit(pos);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the position is in the set.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl Default for PositionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Position::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = PositionSet::new();
        let pos = Position::new(4, 4);

        assert!(set.insert(pos));
        assert!(!set.insert(pos));
        assert!(set.contains(pos));
        assert_eq!(set.len(), 1);

        assert!(set.remove(pos));
        assert!(!set.remove(pos));
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_covers_board() {
        assert_eq!(PositionSet::FULL.len(), 81);
        for pos in Position::ALL {
            assert!(PositionSet::FULL.contains(pos));
        }
    }

    #[test]
    fn test_iteration_row_major() {
        let set = PositionSet::from_iter([
            Position::new(8, 8),
            Position::new(0, 0),
            Position::new(3, 1),
        ]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Position::new(0, 0), Position::new(3, 1), Position::new(8, 8)]
        );
    }
}
