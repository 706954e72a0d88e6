//! Error types for the tttree crate

use thiserror::Error;

/// Main error type for the tttree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {column}) is out of range (rows and columns must be 0-2)")]
    OutOfRangeCoordinate { row: usize, column: usize },

    #[error("no decision available: the root state has no legal decisions")]
    NoDecisionAvailable,

    #[error("cannot place at {cell}: the cell is already occupied")]
    CellOccupied { cell: String },

    #[error("game already over")]
    GameOver,

    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

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

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
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
