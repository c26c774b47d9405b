//! Text diagrams of positions, in the same layout `Board` displays.
//!
//! A diagram has ten rows, row 10 first. Each row holds ten symbols (`-`,
//! `W`, `B`, `S`); whitespace is ignored and blank lines are skipped.

use super::error::DiagramError;
use super::{Board, Piece, BOARD_SIZE};

impl Board {
    /// Parse a diagram with `turn` to move. The result has an empty move
    /// history.
    pub fn from_diagram(diagram: &str, turn: Piece) -> Result<Board, DiagramError> {
        if !turn.is_side() {
            return Err(DiagramError::InvalidTurn);
        }

        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, line) in rows.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(DiagramError::WrongRowLength {
                    row: row + 1,
                    found: symbols.len(),
                });
            }
            for (col, &c) in symbols.iter().enumerate() {
                let piece = Piece::from_char(c).ok_or(DiagramError::InvalidPiece { char: c })?;
                board.cells[row * BOARD_SIZE + col] = piece;
            }
        }
        board.set_turn(turn);
        Ok(board)
    }

    /// The diagram of this position (identical to its `Display` output).
    #[must_use]
    pub fn to_diagram(&self) -> String {
        self.to_string()
    }
}
