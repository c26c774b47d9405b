//! The game loop: alternates players, executes commands, reports results.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use super::command::{parse_command, Command};
use super::console::{Console, TextConsole};
use super::player::{AiPlayer, Player, TextPlayer, INVALID_MOVE_MESSAGE};
use crate::board::{Board, Move, Piece, SearchLimits};

const HELP: &str = "\
Commands:
  new                   start a new game
  auto <white|black>    let the engine play a side
  manual <white|black>  play a side yourself
  undo                  take back the last move
  dump                  print the board
  help                  print this summary
  quit                  leave the program
Moves are written <from>-<to>(<spear>), e.g. d1-d7(g7).";

/// Runs a game between two players over a text console.
///
/// White starts as a manual player and Black as the engine.
pub struct Controller<R, W> {
    board: Board,
    console: TextConsole<R, W>,
    /// Indexed by side: White, then Black.
    players: [Box<dyn Player>; 2],
    limits: SearchLimits,
    winner_reported: bool,
}

fn slot(side: Piece) -> usize {
    usize::from(side == Piece::Black)
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(input: R, output: W) -> Self {
        let limits = SearchLimits::default();
        Controller {
            board: Board::new(),
            console: TextConsole::new(input, output),
            players: [
                Box::new(TextPlayer::new(Piece::White)),
                Box::new(AiPlayer::new(Piece::Black, limits.clone())),
            ],
            limits,
            winner_reported: false,
        }
    }

    /// Use `limits` for every engine player, current and future.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        for side in Piece::SIDES {
            if self.players[slot(side)].is_automated() {
                self.set_automated(side, true);
            }
        }
        self
    }

    /// Start from `board` instead of the initial position.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self.winner_reported = false;
        self
    }

    /// The authoritative game board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True if `side` is played by the engine.
    pub fn is_automated(&self, side: Piece) -> bool {
        self.players[slot(side)].is_automated()
    }

    /// Hand `side` to the engine (`true`) or to the console (`false`).
    pub fn set_automated(&mut self, side: Piece, automated: bool) {
        let player: Box<dyn Player> = if automated {
            Box::new(AiPlayer::new(side, self.limits.clone()))
        } else {
            Box::new(TextPlayer::new(side))
        };
        info!(
            "{side} is now played by {}",
            if automated { "the engine" } else { "the console" }
        );
        self.players[slot(side)] = player;
    }

    /// Take back the console.
    pub fn into_console(self) -> TextConsole<R, W> {
        self.console
    }

    /// Play until `quit` or end of input.
    pub fn play(&mut self) -> io::Result<()> {
        info!("game started");
        loop {
            let winner = self.board.winner();
            if let Some(side) = winner {
                if !self.winner_reported {
                    info!("{side} wins after {} moves", self.board.move_count());
                    self.console.report(&format!("{side} wins."))?;
                    self.winner_reported = true;
                }
            }

            let line = match winner {
                None => {
                    let player = &mut self.players[slot(self.board.turn())];
                    player.my_move(&self.board, &mut self.console)?
                }
                Some(_) => match self.console.read_line()? {
                    Some(line) => line,
                    None => return Ok(()),
                },
            };

            match parse_command(&line) {
                None => {}
                Some(Err(e)) => self.console.report_error(&e.to_string())?,
                Some(Ok(Command::Quit)) => return Ok(()),
                Some(Ok(cmd)) => self.execute(cmd)?,
            }
        }
    }

    fn execute(&mut self, cmd: Command) -> io::Result<()> {
        match cmd {
            Command::New => {
                self.board.init();
                self.winner_reported = false;
                info!("new game");
            }
            Command::Auto(side) => self.set_automated(side, true),
            Command::Manual(side) => self.set_automated(side, false),
            Command::Undo => self.undo()?,
            Command::Dump => {
                let dump = format!("===\n{}===", self.board);
                self.console.report(&dump)?;
            }
            Command::Help => self.console.report(HELP)?,
            Command::Move(mv) => self.play_move(mv)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn play_move(&mut self, mv: Move) -> io::Result<()> {
        if self.board.winner().is_some() {
            return self.console.report_error("Game is over.");
        }
        if !self.board.is_legal(&mv) {
            return self.console.report_error(INVALID_MOVE_MESSAGE);
        }
        debug!("{} plays {mv}", self.board.turn());
        self.board.apply_move(mv);
        Ok(())
    }

    /// Take back one move, and a second one if that hands the turn to the
    /// engine while the other side is played from the console.
    fn undo(&mut self) -> io::Result<()> {
        if self.board.undo().is_none() {
            return self.console.report_error("Nothing to undo.");
        }
        let turn = self.board.turn();
        if self.is_automated(turn) && !self.is_automated(turn.opponent()) {
            self.board.undo();
        }
        self.winner_reported = false;
        Ok(())
    }
}
