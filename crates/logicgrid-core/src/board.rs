//! The 9×9 board and its validity rules.
//!
//! [`Board`] is a plain value: 81 optional digits plus a given mask. The
//! engine passes boards around as immutable snapshots; every validity or
//! candidate query is a pure function of the board it is given.
//!
//! The text encoding is the conventional 81-character row-major digit
//! string, with `'0'` (or `'.'` on input) for empty cells.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position, position_set::PositionSet};

/// Error parsing a board from its 81-character text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input does not contain exactly 81 characters.
    #[display("expected 81 characters, got {len}")]
    BadLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contains a character other than `0`-`9` or `.`.
    #[display("invalid character {found:?} at index {index}")]
    BadCharacter {
        /// Index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// A 9×9 grid of digits with a given (fixed-cell) mask.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell. The given mask marks
/// cells fixed at puzzle creation. The board itself does not enforce the
/// mask — it is a value type — but the game layer rejects moves that target
/// given cells.
///
/// # Examples
///
/// ```
/// use logicgrid_core::{Board, Digit, Position};
///
/// let mut board: Board = format!("53{}", "0".repeat(79)).parse().unwrap();
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.given_count(), 0);
///
/// board.freeze_givens();
/// assert_eq!(board.given_count(), 2);
/// assert!(board.is_given(Position::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
    givens: PositionSet,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with no givens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; 81],
            givens: PositionSet::EMPTY,
        }
    }

    /// Returns the digit at the given position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets or clears the cell at the given position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Returns `true` if the cell is part of the original puzzle.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.givens.contains(pos)
    }

    /// Returns the given mask.
    #[must_use]
    pub const fn givens(&self) -> PositionSet {
        self.givens
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.givens.len()
    }

    /// Marks every currently filled cell as given.
    ///
    /// Called once at puzzle-creation time; the mask is immutable from the
    /// player's point of view afterwards.
    pub fn freeze_givens(&mut self) {
        let mut givens = PositionSet::new();
        for pos in Position::ALL {
            if self.get(pos).is_some() {
                givens.insert(pos);
            }
        }
        self.givens = givens;
    }

    /// Returns a board containing only the given cells.
    ///
    /// Player-entered digits are dropped; the given mask is preserved. This
    /// is the board the hint oracle re-solves when the player's entries have
    /// diverged from the canonical solution.
    #[must_use]
    pub fn givens_only(&self) -> Self {
        let mut board = Self::new();
        for pos in self.givens {
            board.set(pos, self.get(pos));
        }
        board.givens = self.givens;
        board
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_none())
    }

    /// Returns the set of digits present in row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_digits(&self, y: u8) -> DigitSet {
        (0..9)
            .filter_map(|x| self.get(Position::new(x, y)))
            .collect()
    }

    /// Returns the set of digits present in column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn col_digits(&self, x: u8) -> DigitSet {
        (0..9)
            .filter_map(|y| self.get(Position::new(x, y)))
            .collect()
    }

    /// Returns the set of digits present in the given 3×3 box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_digits(&self, box_index: u8) -> DigitSet {
        (0..9)
            .filter_map(|i| self.get(Position::from_box(box_index, i)))
            .collect()
    }

    /// Returns the candidate digits for the cell at `pos`.
    ///
    /// For an empty cell this is the set of digits absent from the cell's
    /// row, column, and box; an empty result means the board is
    /// unsatisfiable at that cell. For a filled cell it is the singleton set
    /// of the cell's digit.
    ///
    /// Candidates are recomputed on every call; they are never cached on the
    /// board.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if let Some(digit) = self.get(pos) {
            let mut set = DigitSet::new();
            set.insert(digit);
            return set;
        }
        let used = self.row_digits(pos.y()) | self.col_digits(pos.x()) | self.box_digits(pos.box_index());
        DigitSet::FULL - used
    }

    /// Returns `true` if a digit may be placed at `pos` without conflicting
    /// with its row, column, or box.
    ///
    /// The cell's own current value is ignored, so replacing a digit with
    /// itself is allowed.
    #[must_use]
    pub fn placement_fits(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers()
            .into_iter()
            .all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns `true` if no row, column, or box contains a repeated digit.
    ///
    /// Empty cells are ignored; a partially filled board can be valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for i in 0..9 {
            if Self::has_duplicate((0..9).filter_map(|x| self.get(Position::new(x, i))))
                || Self::has_duplicate((0..9).filter_map(|y| self.get(Position::new(i, y))))
                || Self::has_duplicate((0..9).filter_map(|j| self.get(Position::from_box(i, j))))
            {
                return false;
            }
        }
        true
    }

    /// Returns `true` if every cell is filled and the board is valid.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.is_valid()
    }

    fn has_duplicate(digits: impl Iterator<Item = Digit>) -> bool {
        let mut seen = DigitSet::new();
        for digit in digits {
            if !seen.insert(digit) {
                return true;
            }
        }
        false
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "0")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the 81-character row-major encoding.
    ///
    /// `'0'` and `'.'` are empty cells. Parsing does not mark any cell as
    /// given; call [`Board::freeze_givens`] to fix the parsed cells.
    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::BadLength { len });
        }
        let mut board = Self::new();
        for (index, ch) in s.chars().enumerate() {
            let cell = match ch {
                '0' | '.' => None,
                _ => Some(
                    Digit::try_from_char(ch)
                        .ok_or(ParseBoardError::BadCharacter { index, found: ch })?,
                ),
            };
            board.cells[index] = cell;
        }
        Ok(board)
    }
}
