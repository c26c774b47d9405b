//! Interactive play: a controller that alternates two players, human or
//! engine, over a line-oriented console.
//!
//! # Example
//! ```
//! use std::io::Cursor;
//! use amazons::game::Controller;
//!
//! let input = Cursor::new("d1-d2(d3)\nmanual black\nundo\ndump\nquit\n");
//! let mut controller = Controller::new(input, Vec::new());
//! controller.set_automated(amazons::Piece::Black, false);
//! controller.play().unwrap();
//! assert_eq!(controller.board().move_count(), 0);
//! ```

mod command;
mod console;
mod controller;
mod player;

pub use command::{parse_command, Command, CommandError};
pub use console::{Console, TextConsole};
pub use controller::Controller;
pub use player::{AiPlayer, Player, TextPlayer, INVALID_MOVE_MESSAGE};
