//! Controller command parsing.

use std::fmt;

use crate::board::{Move, MoveParseError, Piece};

/// Commands understood by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Abandon the current game and start from the initial position
    New,
    /// Let the engine play a side
    Auto(Piece),
    /// Let a human play a side
    Manual(Piece),
    /// Take back the last move (and the engine's reply, if any)
    Undo,
    /// Print the board
    Dump,
    /// Print the command summary
    Help,
    /// Leave the program
    Quit,
    /// Play a move
    Move(Move),
}

/// Error type for unparseable command lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Not a command and not shaped like a move
    Unknown { line: String },
    /// `auto`/`manual` without a side
    MissingSide { command: String },
    /// Side name other than `white`/`black`
    InvalidSide { name: String },
    /// Shaped like a move but naming squares that do not exist
    InvalidMove(MoveParseError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown { line } => write!(f, "Unknown command '{line}'"),
            CommandError::MissingSide { command } => {
                write!(f, "'{command}' needs a side: white or black")
            }
            CommandError::InvalidSide { name } => {
                write!(f, "Invalid side '{name}', expected white or black")
            }
            CommandError::InvalidMove(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

/// Parse a line of input. Returns `None` for blank lines.
#[must_use]
pub fn parse_command(line: &str) -> Option<Result<Command, CommandError>> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = parts.first()?;

    let cmd = match first.to_ascii_lowercase().as_str() {
        "new" => Ok(Command::New),
        "undo" => Ok(Command::Undo),
        "dump" => Ok(Command::Dump),
        "help" => Ok(Command::Help),
        "quit" => Ok(Command::Quit),
        name @ ("auto" | "manual") => parse_side(name, parts.get(1).copied()).map(|side| {
            if name == "auto" {
                Command::Auto(side)
            } else {
                Command::Manual(side)
            }
        }),
        _ if Move::is_grammatical(trimmed) => trimmed
            .parse()
            .map(Command::Move)
            .map_err(CommandError::from),
        _ => Err(CommandError::Unknown {
            line: trimmed.to_string(),
        }),
    };
    Some(cmd)
}

fn parse_side(command: &str, arg: Option<&str>) -> Result<Piece, CommandError> {
    let name = arg.ok_or_else(|| CommandError::MissingSide {
        command: command.to_string(),
    })?;
    Piece::side_from_name(name).ok_or_else(|| CommandError::InvalidSide {
        name: name.to_string(),
    })
}
