//! Amazons board representation and game logic.
//!
//! A 10x10 board, four amazons per side, and spears that accumulate one per
//! move until the side to move is left without a legal move and loses.
//!
//! # Example
//! ```
//! use amazons::board::{Board, Move, Piece};
//!
//! let mut board = Board::new();
//! let mv: Move = "d1-d2(d3)".parse().unwrap();
//! assert!(board.is_legal(&mv));
//! board.apply_move(mv);
//! assert_eq!(board.turn(), Piece::Black);
//! assert_eq!(board.winner(), None);
//! ```

mod diagram;
mod error;
mod eval;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod rays;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{DiagramError, MoveParseError, PathError, SquareError};
pub use eval::WINNING_VALUE;
pub use movegen::{LegalMoves, ReachableFrom};
pub use state::Board;
pub use types::{Direction, Move, Piece, Square, BOARD_SIZE, NUM_SQUARES};

// Public API - search functions and configuration
pub use search::{
    find_best_move, DepthSchedule, SearchLimits, SearchResult, SearchStats, Searcher,
    DEFAULT_THRESHOLDS, INFINITY, MAX_SCHEDULED_DEPTH,
};
