//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Squares, directions and queen-move geometry
//! - `board.rs` - Board contents, display and diagrams
//! - `movegen.rs` - Reachable squares, legal moves and game over
//! - `make_unmake.rs` - Apply/undo correctness
//! - `perft.rs` - Move-count checks against known values
//! - `search.rs` - Evaluation, depth schedule and search behaviour
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
mod search;

use crate::board::{Board, Move, Piece, Square};

/// Parse a square in tests.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Parse a move in tests.
pub(super) fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

/// White amazon on j10 hemmed in by spears, Black amazon on a1, White to
/// move with exactly seven legal moves.
pub(super) fn cornered_board() -> Board {
    let mut board = Board::empty();
    board.put(Piece::White, sq("j10"));
    board.put(Piece::Black, sq("a1"));
    for name in ["g10", "g9", "h9", "i9", "i8", "j8"] {
        board.put(Piece::Spear, sq(name));
    }
    board
}
