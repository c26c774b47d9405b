//! Players: a source of moves and commands for one side.

use std::io;

use log::warn;

use super::console::Console;
use crate::board::{Board, Move, Piece, SearchLimits, Searcher};

/// Reply printed when a human enters a move that cannot be played.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Please try again.";

/// Supplies the next line of play for one side.
pub trait Player {
    /// The side this player moves for.
    fn side(&self) -> Piece;

    /// True for engine-driven players.
    fn is_automated(&self) -> bool;

    /// The next move (in notation) or controller command to act on, given
    /// the current position with this player's side to move.
    fn my_move(&mut self, board: &Board, console: &mut dyn Console) -> io::Result<String>;
}

/// A human typing moves and commands.
///
/// Lines shaped like moves are checked against the board; illegal ones are
/// rejected on the console and another line is read. Anything else is passed
/// on for the controller to interpret. End of input reads as `quit`.
#[derive(Clone, Debug)]
pub struct TextPlayer {
    side: Piece,
}

impl TextPlayer {
    #[must_use]
    pub fn new(side: Piece) -> Self {
        TextPlayer { side }
    }
}

impl Player for TextPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn my_move(&mut self, board: &Board, console: &mut dyn Console) -> io::Result<String> {
        loop {
            let Some(line) = console.read_line()? else {
                return Ok("quit".to_string());
            };
            if Move::is_grammatical(&line) {
                match line.parse::<Move>() {
                    Ok(mv) if board.is_legal(&mv) => return Ok(line),
                    _ => {
                        console.report_error(INVALID_MOVE_MESSAGE)?;
                        continue;
                    }
                }
            }
            return Ok(line);
        }
    }
}

/// The search engine playing one side.
#[derive(Clone, Debug)]
pub struct AiPlayer {
    side: Piece,
    searcher: Searcher,
}

impl AiPlayer {
    #[must_use]
    pub fn new(side: Piece, limits: SearchLimits) -> Self {
        AiPlayer {
            side,
            searcher: Searcher::new(limits),
        }
    }
}

impl Player for AiPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn my_move(&mut self, board: &Board, console: &mut dyn Console) -> io::Result<String> {
        debug_assert_eq!(board.turn(), self.side, "engine asked to move out of turn");
        match self.searcher.choose_move(board) {
            Some(mv) => {
                console.report_move(mv)?;
                Ok(mv.to_string())
            }
            None => {
                warn!("{} engine asked to move with no legal moves", self.side);
                Ok(String::new())
            }
        }
    }
}
