//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use amazons::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.turn(), Piece::White);
//! ```

pub use super::{
    find_best_move, Board, Direction, Move, MoveParseError, Piece, SearchLimits, Square,
    SquareError,
};
