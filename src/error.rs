//! Error types for the xo_search crate

use thiserror::Error;

/// Main error type for the xo_search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("board is not square: row {row} has {got} cells, expected {expected}")]
    NonSquareBoard {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("board string has {got} cells but a {size}x{size} grid holds only {expected}")]
    TooManyCells {
        size: usize,
        expected: usize,
        got: usize,
    },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("position ({row}, {col}) is out of bounds for a {size}x{size} board")]
    InvalidPosition { row: usize, col: usize, size: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("invalid move text '{input}' (expected 'row,col' or a cell index)")]
    ParseMove { input: String },

    #[error("board has no empty cells left to move into")]
    NoEmptyCells,

    #[error("cannot search for the empty mark")]
    InvalidSearchMark,

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    ParseMark { input: String },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("game already over")]
    GameOver,

    #[error("it is not the {expected} turn")]
    OutOfTurn { expected: &'static str },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
