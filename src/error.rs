//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Symbol;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game already over")]
    GameOver,

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Symbol, got: Symbol },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

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

    #[error("both players hold a winning line in '{context}'")]
    ConflictingWinners { context: String },

    #[error("invalid symbol '{input}' (expected 'X' or 'O')")]
    ParseSymbol { input: String },

    #[error("invalid difficulty '{input}'. Expected one of: random, optimal")]
    ParseDifficulty { input: String },

    #[error("invalid move '{input}' (expected 'row,col' with values 0-2)")]
    ParseMove { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
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
