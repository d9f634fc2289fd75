//! Error types for the tictree crate

use thiserror::Error;

/// Main error type for the tictree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "internal consistency error: child '{child}' of '{node}' has no value (evaluation order violated)"
    )]
    UnevaluatedChild { node: String, child: String },

    #[error("internal consistency error: '{node}' finished evaluation without a value")]
    EvaluationIncomplete { node: String },

    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("invalid move: position ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

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

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("invalid score {value} (expected -1, 0 or 1)")]
    InvalidScore { value: i8 },

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

    #[error("config format error: {0}")]
    ConfigFormat(#[from] toml::de::Error),
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
