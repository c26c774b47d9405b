//! Square types and queen-move geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::SquareError;
use crate::board::rays::{RAYS, SQUARE_NAMES};

/// Number of squares on a side of the board.
pub const BOARD_SIZE: usize = 10;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the Amazons board, stored as its index.
///
/// Index 0 is a1 (lower-left corner), 9 is j1 and 99 is j10 (upper-right
/// corner), so `index = 10 * row + col`. Squares are plain values: two
/// squares are the same square iff their indices are equal, and all geometry
/// is looked up in shared tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a column and row, both in `0..10`.
    pub fn new(col: usize, row: usize) -> Result<Self, SquareError> {
        if col >= BOARD_SIZE {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square::from_index_unchecked(row * BOARD_SIZE + col))
    }

    /// Create a square from an index in `0..100`.
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if index < NUM_SQUARES {
            Ok(Square::from_index_unchecked(index))
        } else {
            Err(SquareError::IndexOutOfBounds { index })
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Self {
        Square(index as u8)
    }

    /// True iff `(col, row)` lies on the board.
    #[inline]
    #[must_use]
    pub const fn exists(col: isize, row: isize) -> bool {
        col >= 0 && row >= 0 && col < BOARD_SIZE as isize && row < BOARD_SIZE as isize
    }

    /// All squares in ascending index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..NUM_SQUARES).map(Square::from_index_unchecked)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Column, 0 being column `a`.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Row, 0 being the bottom row (row `1`).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Canonical name, e.g. `"a4"` or `"j10"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        &SQUARE_NAMES[self.index()]
    }

    /// True iff `self`-`to` is a queen move: distinct squares sharing a row,
    /// a column or a diagonal.
    #[must_use]
    pub fn is_queen_move(self, to: Square) -> bool {
        if self == to {
            return false;
        }
        let dcol = self.col().abs_diff(to.col());
        let drow = self.row().abs_diff(to.row());
        dcol == 0 || drow == 0 || dcol == drow
    }

    /// Direction of the queen move `self`-`to`, or `None` if it is not one.
    #[must_use]
    pub fn direction(self, to: Square) -> Option<Direction> {
        if !self.is_queen_move(to) {
            return None;
        }
        let dcol = to.col() as isize - self.col() as isize;
        let drow = to.row() as isize - self.row() as isize;
        let dir = match (dcol.signum(), drow.signum()) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            _ => Direction::NorthWest,
        };
        Some(dir)
    }

    /// The square `steps` squares away in direction `dir`, or `None` if that
    /// is off the board. Zero steps yields `self`.
    #[must_use]
    pub fn queen_move(self, dir: Direction, steps: usize) -> Option<Square> {
        match steps {
            0 => Some(self),
            n => self.ray(dir).get(n - 1).copied(),
        }
    }

    /// Squares one, two, ... steps away in direction `dir`, up to the edge.
    #[inline]
    #[must_use]
    pub fn ray(self, dir: Direction) -> &'static [Square] {
        &RAYS[self.index()][dir.index()]
    }

    /// Squares strictly between `self` and `to` along a queen move, or `None`
    /// if `self`-`to` is not a queen move.
    #[must_use]
    pub fn between(self, to: Square) -> Option<&'static [Square]> {
        let dir = self.direction(to)?;
        let distance = self.col().abs_diff(to.col()).max(self.row().abs_diff(to.row()));
        Some(&self.ray(dir)[..distance - 1])
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Convert a `(col, row)` pair.
    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(col, row)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='j') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let digits = chars.as_str();
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if !(1..=BOARD_SIZE).contains(&row) || digits.starts_with('0') {
            return Err(invalid());
        }

        Square::new(col, row - 1)
    }
}
