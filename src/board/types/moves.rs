//! Moves and move notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A complete Amazons move: an amazon travels `from`-`to`, then throws a
/// spear from `to` that lands on `spear`.
///
/// Written in notation as `<from>-<to>(<spear>)`, e.g. `a4-a6(a1)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, spear: Square) -> Self {
        Move { from, to, spear }
    }

    /// Square the amazon leaves.
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Square the amazon lands on.
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Square the spear lands on.
    #[inline]
    #[must_use]
    pub const fn spear(self) -> Square {
        self.spear
    }

    /// True iff `text` has the shape of a move, whether or not the squares
    /// exist or the move is legal anywhere.
    #[must_use]
    pub fn is_grammatical(text: &str) -> bool {
        split_notation(text).is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `a4-a6(a1)`. Whitespace around the parts and the dash between
    /// the first two squares are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to, spear) = split_notation(s).ok_or_else(|| MoveParseError::Malformed {
            notation: s.to_string(),
        })?;
        let square = |text: &str| {
            text.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
        };
        Ok(Move::new(square(from)?, square(to)?, square(spear)?))
    }
}

/// Split move notation into its three square designations.
fn split_notation(s: &str) -> Option<(&str, &str, &str)> {
    let (squares, spear) = s.trim().strip_suffix(')')?.split_once('(')?;
    let (from, rest) = split_square(squares.trim_start())?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('-').unwrap_or(rest).trim_start();
    let (to, rest) = split_square(rest)?;
    if !rest.trim().is_empty() {
        return None;
    }
    let (spear, rest) = split_square(spear.trim())?;
    rest.is_empty().then_some((from, to, spear))
}

/// Split a leading square designation (a letter followed by digits) off `s`.
fn split_square(s: &str) -> Option<(&str, &str)> {
    let first = s.chars().next()?;
    if !first.is_ascii_lowercase() {
        return None;
    }
    let end = s[1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + 1);
    (end > 1).then(|| s.split_at(end))
}
