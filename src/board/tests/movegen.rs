//! Move generation and game-over tests.

use std::collections::HashSet;

use super::{cornered_board, mv, sq};
use crate::board::{Board, Move, Piece, Square};

fn names(squares: impl Iterator<Item = Square>) -> Vec<String> {
    squares.map(|s| s.to_string()).collect()
}

#[test]
fn test_reachable_from_corner_in_direction_order() {
    let board = Board::new();
    let reachable = names(board.reachable_from(sq("a1"), None));
    assert_eq!(
        reachable,
        vec![
            "a2", "a3", "b2", "c3", "d4", "e5", "f6", "g7", "h8", "i9", "j10", "b1", "c1"
        ]
    );
}

#[test]
fn test_reachable_from_treats_as_empty_square_as_open() {
    let board = Board::new();
    let blocked: Vec<_> = board.reachable_from(sq("d2"), None).collect();
    assert!(!blocked.contains(&sq("d1")));

    let open: Vec<_> = board.reachable_from(sq("d2"), Some(sq("d1"))).collect();
    assert!(open.contains(&sq("d1")));
    assert_eq!(open.len(), blocked.len() + 1);
}

#[test]
fn test_boxed_in_square_reaches_nothing() {
    let mut board = Board::empty();
    for name in ["a2", "b2", "b1"] {
        board.put(Piece::Spear, sq(name));
    }
    assert_eq!(board.reachable_from(sq("a1"), None).count(), 0);
}

#[test]
fn test_first_moves_from_initial_position() {
    let board = Board::new();
    let first: Vec<String> = board.legal_moves().take(7).map(|m| m.to_string()).collect();
    assert_eq!(
        first,
        vec![
            "d1-d2(d3)", "d1-d2(d4)", "d1-d2(d5)", "d1-d2(d6)", "d1-d2(d7)", "d1-d2(d8)",
            "d1-d2(d9)"
        ]
    );
}

#[test]
fn test_cornered_amazon_moves() {
    let board = cornered_board();
    let moves: Vec<String> = board.legal_moves().map(|m| m.to_string()).collect();
    assert_eq!(
        moves,
        vec![
            "j10-j9(j10)",
            "j10-j9(i10)",
            "j10-i10(j10)",
            "j10-i10(j9)",
            "j10-i10(h10)",
            "j10-h10(i10)",
            "j10-h10(j10)",
        ]
    );
    assert_eq!(board.mobility(Piece::White), 7);
}

#[test]
fn test_generated_moves_are_legal_and_distinct() {
    let mut board = Board::new();
    board.apply_move(mv("d1-d7(g7)"));
    board.apply_move(mv("j7-h7(c2)"));

    let moves: Vec<Move> = board.legal_moves().collect();
    let unique: HashSet<Move> = moves.iter().copied().collect();
    assert_eq!(unique.len(), moves.len());
    for m in &moves {
        assert!(board.is_legal(m), "{m} generated but not legal");
        assert_eq!(board.get(m.from()), Piece::White);
    }
}

#[test]
fn test_legal_moves_for_either_side() {
    let board = Board::new();
    let black: Vec<Move> = board.legal_moves_for(Piece::Black).collect();
    assert!(black.iter().all(|m| board.get(m.from()) == Piece::Black));
    assert_eq!(board.mobility(Piece::White), board.mobility(Piece::Black));
    assert_eq!(board.mobility(Piece::White), 2176);
}

#[test]
fn test_is_legal() {
    let board = Board::new();
    assert!(board.is_legal(&mv("a4-a6(a1)")));
    // spear thrown back onto the vacated origin
    assert!(board.is_legal(&mv("d1-d2(d1)")));
    assert!(board.is_legal(&mv("d1-d9(j3)")));

    assert!(!board.is_legal(&mv("a4-a8(a1)")), "path blocked by a7");
    assert!(!board.is_legal(&mv("a4-a7(a6)")), "destination occupied");
    assert!(!board.is_legal(&mv("a7-a6(a5)")), "not White's amazon");
    assert!(!board.is_legal(&mv("a1-a2(a3)")), "no amazon on a1");
    assert!(!board.is_legal(&mv("a4-b6(a1)")), "not a queen move");
    assert!(!board.is_legal(&mv("a4-a6(b8)")), "spear not a queen move");
    assert!(!board.is_legal(&mv("a4-a6(a6)")), "spear onto own square");
    assert!(!board.is_legal(&mv("a4-a5(a8)")), "spear path blocked by a7");
}

#[test]
fn test_unblocked_path() {
    let board = Board::new();
    assert_eq!(board.is_unblocked_path(sq("a1"), sq("a3"), None), Ok(true));
    assert_eq!(board.is_unblocked_path(sq("a1"), sq("a5"), None), Ok(false));
    assert_eq!(board.is_unblocked_path(sq("a1"), sq("a5"), Some(sq("a4"))), Ok(true));
    assert!(board.is_unblocked_path(sq("a1"), sq("b3"), None).is_err());
}

#[test]
fn test_legal_first_leg() {
    let board = Board::new();
    assert!(board.is_legal_origin(sq("d1")));
    assert!(!board.is_legal_origin(sq("d10")));
    assert!(board.is_legal_first_leg(sq("d1"), sq("d9")));
    // blocking along the way is left to the full check
    assert!(board.is_legal_first_leg(sq("a4"), sq("a9")));
    assert!(!board.is_legal_first_leg(sq("a4"), sq("a7")));
    assert!(!board.is_legal_first_leg(sq("a4"), sq("b6")));
}

#[test]
fn test_side_without_moves_loses() {
    let mut board = Board::empty();
    board.put(Piece::White, sq("a1"));
    board.put(Piece::Black, sq("j10"));
    for name in ["b1", "a2", "b2"] {
        board.put(Piece::Spear, sq(name));
    }

    assert_eq!(board.legal_moves().next(), None);
    assert_eq!(board.winner(), Some(Piece::Black));

    board.set_turn(Piece::Black);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_winner_follows_board_edits() {
    let mut board = cornered_board();
    assert_eq!(board.winner(), None);
    for name in ["j9", "i10", "h10"] {
        board.put(Piece::Spear, sq(name));
    }
    assert_eq!(board.winner(), Some(Piece::Black));
    board.put(Piece::Empty, sq("j9"));
    assert_eq!(board.winner(), None);
}
