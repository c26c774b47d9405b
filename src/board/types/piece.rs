//! Square contents.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What occupies a square: nothing, an amazon of either side, or a spear.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Spear,
}

impl Piece {
    /// Both playing sides, White first.
    pub const SIDES: [Piece; 2] = [Piece::White, Piece::Black];

    /// The other side for `White`/`Black`; other values are returned as-is.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::White => Piece::Black,
            Piece::Black => Piece::White,
            other => other,
        }
    }

    /// True for the two playing sides.
    #[inline]
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, Piece::White | Piece::Black)
    }

    /// Scoring sign: +1 for White, -1 for Black, 0 otherwise.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Piece::White => 1,
            Piece::Black => -1,
            _ => 0,
        }
    }

    /// Single-character board diagram symbol.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Spear => 'S',
        }
    }

    /// Parse a diagram symbol (`-`, `W`, `B`, `S`; case-insensitive).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'S' => Some(Piece::Spear),
            _ => None,
        }
    }

    /// Parse a side name as typed by a user (`white`/`black`).
    #[must_use]
    pub fn side_from_name(name: &str) -> Option<Piece> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(Piece::White),
            "black" => Some(Piece::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::White => write!(f, "White"),
            Piece::Black => write!(f, "Black"),
            Piece::Spear => write!(f, "Spear"),
            Piece::Empty => write!(f, "Empty"),
        }
    }
}
