//! Static evaluation.
//!
//! Scores are from White's point of view: positive favours White.

use super::{Board, Piece};

/// Score of a won position (negated for a Black win). Larger in magnitude
/// than any mobility difference, so a forced win outranks every heuristic
/// score.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

impl Board {
    /// Static score of the position: `±WINNING_VALUE` if the game is over,
    /// otherwise White's legal move count minus Black's.
    #[must_use]
    pub fn static_score(&self) -> i32 {
        match self.winner() {
            Some(Piece::White) => WINNING_VALUE,
            Some(Piece::Black) => -WINNING_VALUE,
            _ => self.mobility(Piece::White) as i32 - self.mobility(Piece::Black) as i32,
        }
    }
}
