use std::cell::Cell;
use std::fmt;

use super::error::{PathError, SquareError};
use super::{Move, Piece, Square, BOARD_SIZE, NUM_SQUARES};

/// Starting squares of the White amazons: a4, j4, d1, g1.
const WHITE_START: [(usize, usize); 4] = [(0, 3), (9, 3), (3, 0), (6, 0)];
/// Starting squares of the Black amazons: a7, j7, d10, g10.
const BLACK_START: [(usize, usize); 4] = [(0, 6), (9, 6), (3, 9), (6, 9)];

/// The state of an Amazons game.
///
/// Occupancy lives in a flat array indexed by `Square::index`, so cloning a
/// board copies the array and the move history and never shares either with
/// the source board. The search relies on this to work on a private copy.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Piece; NUM_SQUARES],
    pub(crate) turn: Piece,
    pub(crate) history: Vec<Move>,
    /// `None` until computed; cleared on every change to the position.
    winner_cache: Cell<Option<Option<Piece>>>,
}

impl Board {
    /// A board in the initial position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.init();
        board
    }

    /// A board with no pieces on it, White to move.
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; NUM_SQUARES],
            turn: Piece::White,
            history: Vec::new(),
            winner_cache: Cell::new(None),
        }
    }

    /// Reset to the initial position.
    pub fn init(&mut self) {
        self.cells = [Piece::Empty; NUM_SQUARES];
        for (col, row) in WHITE_START {
            self.cells[row * BOARD_SIZE + col] = Piece::White;
        }
        for (col, row) in BLACK_START {
            self.cells[row * BOARD_SIZE + col] = Piece::Black;
        }
        self.turn = Piece::White;
        self.history.clear();
        self.invalidate_winner();
    }

    /// The side to move, `White` or `Black`.
    #[must_use]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves applied and not undone.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Contents of `sq`.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Contents of the square at `(col, row)`, both in `0..10`.
    pub fn get_at(&self, col: usize, row: usize) -> Result<Piece, SquareError> {
        Ok(self.get(Square::new(col, row)?))
    }

    /// Set `sq` to `piece`, bypassing move rules.
    pub fn put(&mut self, piece: Piece, sq: Square) {
        self.cells[sq.index()] = piece;
        self.invalidate_winner();
    }

    /// Set the square at `(col, row)` to `piece`.
    pub fn put_at(&mut self, piece: Piece, col: usize, row: usize) -> Result<(), SquareError> {
        self.put(piece, Square::new(col, row)?);
        Ok(())
    }

    /// Set the side to move, bypassing move rules.
    pub fn set_turn(&mut self, side: Piece) {
        debug_assert!(side.is_side(), "turn must be White or Black");
        self.turn = side;
        self.invalidate_winner();
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&p| p != Piece::Empty).count()
    }

    /// Squares holding `piece`, in ascending index order.
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq) == piece)
    }

    /// True iff `from` holds an amazon of the side to move.
    #[must_use]
    pub fn is_legal_origin(&self, from: Square) -> bool {
        self.get(from) == self.turn
    }

    /// True iff `from`-`to` is a plausible first leg: a legal origin, a queen
    /// move, and an empty destination. Blocking along the path is not checked.
    #[must_use]
    pub fn is_legal_first_leg(&self, from: Square, to: Square) -> bool {
        self.is_legal_origin(from) && from.is_queen_move(to) && self.get(to) == Piece::Empty
    }

    /// True iff `from`-`to` is an unblocked queen move: every square strictly
    /// between them, and `to` itself, is empty or is `as_empty`.
    ///
    /// Errors if `from`-`to` is not a queen move at all.
    pub fn is_unblocked_path(
        &self,
        from: Square,
        to: Square,
        as_empty: Option<Square>,
    ) -> Result<bool, PathError> {
        let between = from
            .between(to)
            .ok_or(PathError::NotQueenMove { from, to })?;
        let clear = |sq: Square| self.get(sq) == Piece::Empty || Some(sq) == as_empty;
        Ok(between.iter().all(|&sq| clear(sq)) && clear(to))
    }

    /// True iff `mv` is legal in the current position.
    ///
    /// The spear leg treats the origin as empty, since the amazon has left it.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.is_legal_first_leg(mv.from(), mv.to())
            && matches!(self.is_unblocked_path(mv.from(), mv.to(), None), Ok(true))
            && matches!(
                self.is_unblocked_path(mv.to(), mv.spear(), Some(mv.from())),
                Ok(true)
            )
    }

    /// The winner, if the game is over: the side to move loses when it has no
    /// legal move.
    #[must_use]
    pub fn winner(&self) -> Option<Piece> {
        if let Some(cached) = self.winner_cache.get() {
            return cached;
        }
        let winner = if self.legal_moves().next().is_none() {
            Some(self.turn.opponent())
        } else {
            None
        };
        self.winner_cache.set(Some(winner));
        winner
    }

    #[inline]
    pub(crate) fn invalidate_winner(&self) {
        self.winner_cache.set(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.turn == other.turn && self.history == other.history
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// Rows from 10 down to 1, e.g. `   - - - B - - B - - -`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "  ")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.cells[row * BOARD_SIZE + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
