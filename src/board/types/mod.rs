//! Core Amazons types.
//!
//! - `Square` and `Direction` - board geometry
//! - `Piece` - square contents
//! - `Move` - a full move and its notation

mod direction;
mod moves;
mod piece;
mod square;

pub use direction::Direction;
pub use moves::Move;
pub use piece::Piece;
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
