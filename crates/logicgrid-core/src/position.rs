//! Board position (x, y) coordinates.

use std::fmt::{self, Display};

/// A board position, addressed by column `x` and row `y`, both in 0-8.
///
/// Positions map to a row-major cell index 0-80 via [`Position::cell_index`].
///
/// # Examples
///
/// ```
/// use logicgrid_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.cell_index(), 12);
/// assert_eq!(pos.box_index(), 1);
///
/// // Row-major iteration over the whole board
/// assert_eq!(Position::ALL[0], Position::new(0, 0));
/// assert_eq!(Position::ALL[80], Position::new(8, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Creates a position from a cell index within a 3×3 box.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom; cells within a
    /// box follow the same order.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9, "box cell out of range");
        Self::new((box_index % 3) * 3 + i % 3, (box_index / 3) * 3 + i / 3)
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

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the 20 peers sharing a row, column, or box with this position.
    ///
    /// The position itself is not included. Order: row peers, column peers,
    /// then the four box peers outside this row and column.
    #[must_use]
    pub fn house_peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut n = 0;
        for x in 0..9 {
            if x != self.x {
                peers[n] = Self::new(x, self.y);
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self::new(self.x, y);
                n += 1;
            }
        }
        let bx = (self.x / 3) * 3;
        let by = (self.y / 3) * 3;
        for y in by..by + 3 {
            for x in bx..bx + 3 {
                if x != self.x && y != self.y {
                    peers[n] = Self::new(x, y);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.cell_index(), i);
        }
    }

    #[test]
    fn test_box_round_trip() {
        for box_index in 0..9 {
            for i in 0..9 {
                let pos = Position::from_box(box_index, i);
                assert_eq!(pos.box_index(), box_index);
            }
        }
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 2);
    }

    #[test]
    fn test_house_peers() {
        let pos = Position::new(4, 4);
        let peers = pos.house_peers();
        let unique: HashSet<_> = peers.iter().copied().collect();

        assert_eq!(unique.len(), 20);
        assert!(!unique.contains(&pos));
        for peer in peers {
            let shares = peer.x() == pos.x()
                || peer.y() == pos.y()
                || peer.box_index() == pos.box_index();
            assert!(shares, "{peer} does not share a house with {pos}");
        }
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }
}
