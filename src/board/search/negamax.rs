use std::time::Instant;

use log::{debug, trace, warn};

use super::constants::INFINITY;
use super::{DepthSchedule, SearchLimits, SearchResult, SearchStats};
use crate::board::{Board, Move};

/// Minimax search with alpha-beta pruning.
///
/// Scores are always from White's point of view; `sense` says whether the
/// node maximises (+1, White to move) or minimises (-1, Black to move).
/// Among equally scored moves the one generated last wins, at the root and
/// below.
///
/// Every node searches the moves of the side to move there, so odd plies
/// answer with the opponent's replies rather than more moves of the side
/// that started the search.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    schedule: DepthSchedule,
    limits: SearchLimits,
    stats: SearchStats,
    deadline: Option<Instant>,
    best_move: Option<Move>,
}

impl Searcher {
    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Searcher {
            limits,
            ..Searcher::default()
        }
    }

    /// Use `schedule` instead of the default move-count thresholds.
    #[must_use]
    pub fn with_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Depth the next search of `board` will use.
    #[must_use]
    pub fn max_depth(&self, board: &Board) -> u32 {
        self.limits
            .depth
            .unwrap_or_else(|| self.schedule.depth_for(board.move_count()))
    }

    /// Choose a move for the side to move, or `None` if the game is over.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Search `board` for the side to move.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();
        self.best_move = None;
        self.deadline = self.limits.move_time.map(|budget| start + budget);

        let depth = self.max_depth(board);
        let mut work = board.clone();
        let score = self.negamax(&mut work, depth, 0, board.turn().sign(), -INFINITY, INFINITY);
        debug_assert_eq!(&work, board, "search left the working board modified");

        debug!(
            "search depth {} after {} moves: best {} score {} nodes {} leaves {} cutoffs {} in {:?}",
            depth,
            board.move_count(),
            self.best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
            score,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs,
            start.elapsed()
        );

        SearchResult {
            best_move: self.best_move,
            score,
            depth,
        }
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Score of `board` searched `depth` plies deep, recording the best move
    /// when called at the root (`ply == 0`).
    fn negamax(
        &mut self,
        board: &mut Board,
        depth: u32,
        ply: u32,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.winner().is_some() {
            self.stats.leaves += 1;
            return board.static_score();
        }

        let mut best = if sense == 1 { -INFINITY } else { INFINITY };
        // Collected up front since the loop mutates `board`; a cutoff saves
        // search work but not generation work.
        let moves: Vec<Move> = board.legal_moves().collect();
        let total = moves.len();

        for (i, mv) in moves.into_iter().enumerate() {
            if ply == 0 && self.best_move.is_some() && self.deadline_passed() {
                self.stats.skipped_root_moves = (total - i) as u64;
                warn!("search deadline reached after {i} of {total} root moves");
                break;
            }

            board.apply_move(mv);
            let response = self.negamax(board, depth - 1, ply + 1, -sense, alpha, beta);
            board.undo();

            if ply == 0 {
                trace!("root move {mv} scores {response}");
            }

            let improves = if sense == 1 {
                response >= best
            } else {
                response <= best
            };
            if !improves {
                continue;
            }

            best = response;
            if ply == 0 {
                self.best_move = Some(mv);
            }
            if sense == 1 {
                alpha = alpha.max(response);
            } else {
                beta = beta.min(response);
            }
            if beta <= alpha {
                trace!("cutoff at ply {ply} after {mv}");
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
