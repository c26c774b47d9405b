//! Evaluation and search tests.

use std::time::Duration;

use super::{cornered_board, sq};
use crate::board::{
    find_best_move, Board, DepthSchedule, Move, Piece, SearchLimits, Searcher, INFINITY,
    MAX_SCHEDULED_DEPTH, WINNING_VALUE,
};

/// Plain minimax with no pruning, scored from White's point of view.
fn minimax(board: &mut Board, depth: u32) -> i32 {
    if depth == 0 || board.winner().is_some() {
        return board.static_score();
    }
    let maximizing = board.turn() == Piece::White;
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let moves: Vec<Move> = board.legal_moves().collect();
    for m in moves {
        board.apply_move(m);
        let score = minimax(board, depth - 1);
        board.undo();
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

fn score_after(board: &Board, m: Move) -> i32 {
    let mut child = board.clone();
    child.apply_move(m);
    child.static_score()
}

/// White cornered on j10, Black hemmed in near a1.
fn small_board() -> Board {
    let mut board = cornered_board();
    for name in ["a3", "c1", "c3"] {
        board.put(Piece::Spear, sq(name));
    }
    board
}

#[test]
fn test_default_depth_schedule() {
    let schedule = DepthSchedule::default();
    assert_eq!(schedule.depth_for(0), 1);
    assert_eq!(schedule.depth_for(20), 1);
    assert_eq!(schedule.depth_for(21), 2);
    assert_eq!(schedule.depth_for(25), 2);
    assert_eq!(schedule.depth_for(26), 3);
    assert_eq!(schedule.depth_for(36), 4);
    assert_eq!(schedule.depth_for(41), MAX_SCHEDULED_DEPTH);
    assert_eq!(schedule.depth_for(91), MAX_SCHEDULED_DEPTH);

    let mut previous = 0;
    for moves in 0..=92 {
        let depth = schedule.depth_for(moves);
        assert!(depth >= previous, "depth fell at {moves} moves");
        previous = depth;
    }
}

#[test]
fn test_custom_schedule_and_fixed_depth() {
    let mut board = Board::new();
    board.apply_move(super::mv("d1-d2(d3)"));

    let searcher = Searcher::new(SearchLimits::default())
        .with_schedule(DepthSchedule::new(vec![3, 0]));
    assert_eq!(searcher.max_depth(&board), 2);
    assert_eq!(searcher.max_depth(&Board::new()), 1);

    let fixed = Searcher::new(SearchLimits::depth(4));
    assert_eq!(fixed.max_depth(&board), 4);
}

#[test]
fn test_static_score_is_mobility_difference() {
    assert_eq!(Board::new().static_score(), 0);

    let board = cornered_board();
    let expected = 7 - board.mobility(Piece::Black) as i32;
    assert_eq!(board.static_score(), expected);
}

#[test]
fn test_static_score_of_finished_games() {
    let mut board = Board::empty();
    board.put(Piece::White, sq("a1"));
    board.put(Piece::Black, sq("j10"));
    for name in ["b1", "a2", "b2"] {
        board.put(Piece::Spear, sq(name));
    }
    assert_eq!(board.static_score(), -WINNING_VALUE);

    board.set_turn(Piece::Black);
    for name in ["i10", "i9", "j9"] {
        board.put(Piece::Spear, sq(name));
    }
    assert_eq!(board.static_score(), WINNING_VALUE);
}

#[test]
fn test_finds_immediate_win() {
    let mut board = Board::empty();
    board.put(Piece::White, sq("j1"));
    board.put(Piece::Black, sq("j10"));
    board.put(Piece::Spear, sq("i10"));
    board.put(Piece::Spear, sq("i9"));

    let mut searcher = Searcher::new(SearchLimits::depth(1));
    let result = searcher.search(&board);
    assert_eq!(result.score, WINNING_VALUE);
    assert_eq!(result.depth, 1);

    let best = result.best_move.expect("a move should be found");
    board.apply_move(best);
    assert_eq!(board.winner(), Some(Piece::White));
}

#[test]
fn test_black_finds_immediate_win() {
    let mut board = Board::empty();
    board.put(Piece::White, sq("a1"));
    board.put(Piece::Black, sq("a10"));
    board.put(Piece::Spear, sq("b1"));
    board.put(Piece::Spear, sq("b2"));
    board.set_turn(Piece::Black);

    let mut searcher = Searcher::new(SearchLimits::depth(1));
    let result = searcher.search(&board);
    assert_eq!(result.score, -WINNING_VALUE);

    board.apply_move(result.best_move.unwrap());
    assert_eq!(board.winner(), Some(Piece::Black));
}

#[test]
fn test_ties_go_to_the_last_generated_move() {
    let board = cornered_board();
    let moves: Vec<Move> = board.legal_moves().collect();
    // max_by_key keeps the last of several equal maxima
    let expected = moves
        .iter()
        .copied()
        .max_by_key(|&m| score_after(&board, m))
        .unwrap();
    assert_eq!(find_best_move(&board, &SearchLimits::depth(1)), Some(expected));

    let mut black = small_board();
    black.set_turn(Piece::Black);
    let moves: Vec<Move> = black.legal_moves().collect();
    let expected = moves
        .iter()
        .rev()
        .copied()
        .min_by_key(|&m| score_after(&black, m))
        .unwrap();
    assert_eq!(find_best_move(&black, &SearchLimits::depth(1)), Some(expected));
}

#[test]
fn test_pruned_search_matches_minimax() {
    let mut board = small_board();
    for depth in 1..=3 {
        let result = Searcher::new(SearchLimits::depth(depth)).search(&board);
        assert_eq!(result.score, minimax(&mut board, depth), "depth {depth}");
        let best = result.best_move.unwrap();
        assert!(board.is_legal(&best));
    }
}

#[test]
fn test_second_ply_searches_opponent_replies() {
    let board = small_board();
    let expected = board
        .legal_moves()
        .map(|m| {
            let mut after = board.clone();
            after.apply_move(m);
            after
                .legal_moves_for(Piece::Black)
                .map(|reply| score_after(&after, reply))
                .min()
                .unwrap()
        })
        .max()
        .unwrap();

    let result = Searcher::new(SearchLimits::depth(2)).search(&board);
    assert_eq!(result.score, expected);
    assert!(result.score < WINNING_VALUE);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = small_board();
    let before = board.clone();
    let mut searcher = Searcher::new(SearchLimits::depth(2));
    searcher.search(&board);
    assert_eq!(board, before);
    assert!(searcher.stats().nodes > searcher.stats().leaves);
    assert!(searcher.stats().leaves > 0);
}

#[test]
fn test_no_move_when_game_is_over() {
    let mut board = Board::empty();
    board.put(Piece::White, sq("a1"));
    board.put(Piece::Black, sq("j10"));
    for name in ["b1", "a2", "b2"] {
        board.put(Piece::Spear, sq(name));
    }
    assert_eq!(find_best_move(&board, &SearchLimits::default()), None);
}

#[test]
fn test_deadline_keeps_first_root_move() {
    let board = cornered_board();
    let limits = SearchLimits {
        depth: Some(1),
        move_time: Some(Duration::ZERO),
    };
    let mut searcher = Searcher::new(limits);
    let best = searcher.choose_move(&board);
    assert_eq!(best, board.legal_moves().next());
    assert_eq!(searcher.stats().skipped_root_moves, 6);
}
