//! Lazy generation of reachable squares and legal moves.
//!
//! Both generators walk the board in a fixed order, which callers (and tests)
//! rely on:
//! - reachable squares: directions in [`Direction::ALL`] order, nearest
//!   square first within each direction;
//! - legal moves: origins by ascending square index, then destinations in
//!   reachable order from the origin, then spear squares in reachable order
//!   from the destination.

use std::iter::FusedIterator;
use std::ops::Range;

use super::{Board, Direction, Move, Piece, Square, NUM_SQUARES};

/// Squares reachable from a starting square by an unblocked queen move.
///
/// See [`Board::reachable_from`].
#[derive(Clone, Debug)]
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: usize,
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(dir) = Direction::from_index(self.dir) {
            if let Some(&sq) = self.from.ray(dir).get(self.steps) {
                if self.board.get(sq) == Piece::Empty || Some(sq) == self.as_empty {
                    self.steps += 1;
                    return Some(sq);
                }
            }
            self.dir += 1;
            self.steps = 0;
        }
        None
    }
}

impl FusedIterator for ReachableFrom<'_> {}

/// All legal moves for one side. See [`Board::legal_moves_for`].
#[derive(Clone, Debug)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Piece,
    origins: Range<usize>,
    /// Current origin and the destinations still to visit from it.
    origin: Option<(Square, ReachableFrom<'a>)>,
    /// Current origin and destination, and the spear squares still to visit.
    target: Option<(Square, Square, ReachableFrom<'a>)>,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some((from, to, spears)) = &mut self.target {
                if let Some(spear) = spears.next() {
                    return Some(Move::new(*from, *to, spear));
                }
                self.target = None;
            }

            if let Some((from, destinations)) = &mut self.origin {
                if let Some(to) = destinations.next() {
                    self.target = Some((*from, to, self.board.reachable_from(to, Some(*from))));
                    continue;
                }
                self.origin = None;
            }

            let (board, side) = (self.board, self.side);
            let from = self
                .origins
                .by_ref()
                .map(Square::from_index_unchecked)
                .find(|&sq| board.get(sq) == side)?;
            self.origin = Some((from, board.reachable_from(from, None)));
        }
    }
}

impl FusedIterator for LegalMoves<'_> {}

impl Board {
    /// Squares reachable from `from` by an unblocked queen move, treating
    /// `as_empty` (if any) as empty. Ignores whatever stands on `from` and
    /// never yields `from` itself.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn)
    }

    /// Legal moves for `side`, regardless of whose turn it is.
    pub fn legal_moves_for(&self, side: Piece) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            side,
            origins: 0..NUM_SQUARES,
            origin: None,
            target: None,
        }
    }

    /// Number of legal moves `side` would have if it were to move.
    #[must_use]
    pub fn mobility(&self, side: Piece) -> usize {
        self.legal_moves_for(side).count()
    }
}
