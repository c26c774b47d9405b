//! Error types for board operations.

use std::fmt;

use super::types::Square;

/// Error type for square lookups outside the board or malformed square names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-9)
    ColumnOutOfBounds { col: usize },
    /// Row out of bounds (must be 0-9)
    RowOutOfBounds { row: usize },
    /// Square index out of bounds (must be 0-99)
    IndexOutOfBounds { index: usize },
    /// Invalid square notation (must be `a1`..`j10`)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-9)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-9)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-99)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for path queries between squares that are not a queen move apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    NotQueenMove { from: Square, to: Square },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NotQueenMove { from, to } => {
                write!(f, "{from}-{to} is not a queen move")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Error type for move notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text does not have the shape `<from>-<to>(<spear>)`
    Malformed { notation: String },
    /// One of the square designations does not name a square
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Malformed { notation } => {
                write!(f, "Malformed move '{notation}', expected e.g. 'a4-a6(a1)'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}' in move")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram must have exactly 10 non-blank rows
    WrongRowCount { found: usize },
    /// A row must have exactly 10 squares
    WrongRowLength { row: usize, found: usize },
    /// Unknown square symbol
    InvalidPiece { char: char },
    /// Side to move must be White or Black
    InvalidTurn,
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::WrongRowCount { found } => {
                write!(f, "Diagram must have 10 rows, found {found}")
            }
            DiagramError::WrongRowLength { row, found } => {
                write!(f, "Row {row} must have 10 squares, found {found}")
            }
            DiagramError::InvalidPiece { char } => {
                write!(f, "Invalid square symbol '{char}' in diagram")
            }
            DiagramError::InvalidTurn => write!(f, "Side to move must be White or Black"),
        }
    }
}

impl std::error::Error for DiagramError {}
