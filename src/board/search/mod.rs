//! Search module implementing depth-limited minimax with alpha-beta pruning.
//!
//! Features:
//! - Depth chosen from the move count (fewer legal moves late in the game
//!   allow deeper searches), or fixed through `SearchLimits`
//! - Mobility evaluation at the horizon, with won positions scored as
//!   `±WINNING_VALUE`
//! - Optional wall-clock budget, checked between root moves only
//!
//! The search never touches the caller's board: it works on a private copy
//! and pairs every `apply_move` with an `undo` before returning from a node.

mod constants;
mod negamax;
mod params;

use std::time::Duration;

use super::{Board, Move};

pub use constants::{DEFAULT_THRESHOLDS, INFINITY, MAX_SCHEDULED_DEPTH};
pub use negamax::Searcher;
pub use params::DepthSchedule;

/// Limits for a single search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Fixed search depth; `None` lets the depth schedule decide
    pub depth: Option<u32>,
    /// Wall-clock budget, checked between root moves
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Search exactly `depth` plies.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            depth: Some(depth),
            move_time: None,
        }
    }

    /// Stop scanning root moves once `move_time` has elapsed.
    #[must_use]
    pub fn move_time(move_time: Duration) -> Self {
        SearchLimits {
            depth: None,
            move_time: Some(move_time),
        }
    }
}

/// Statistics tracked during search
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including leaves
    pub nodes: u64,
    /// Positions scored by static evaluation
    pub leaves: u64,
    /// Alpha-beta cut-offs
    pub cutoffs: u64,
    /// Root moves skipped because the deadline passed
    pub skipped_root_moves: u64,
}

/// Outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The move chosen at the root, `None` if the side to move has no move
    pub best_move: Option<Move>,
    /// Backed-up score, from White's point of view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
}

/// Choose a move for the side to move in `board`.
///
/// Returns `None` only when the game is already over.
#[must_use]
pub fn find_best_move(board: &Board, limits: &SearchLimits) -> Option<Move> {
    Searcher::new(limits.clone()).choose_move(board)
}
