pub mod board;
pub mod game;

pub use board::{Board, Direction, Move, Piece, Square};
pub use game::Controller;
