//! Error types for the solver

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size must be at least 2, got {size}")]
    BoardTooSmall { size: usize },

    #[error("board of size {size} needs {expected} tiles, got {got}")]
    InvalidBoardLength {
        size: usize,
        expected: usize,
        got: usize,
    },

    #[error("board row {row} is {got} characters wide, expected {expected}")]
    InvalidRowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown tile code '{code}' in board row {row}")]
    UnknownTileCode { code: String, row: usize },

    #[error("board must hold exactly one {tile}, found {count}")]
    InvalidMarkerCount { tile: &'static str, count: usize },

    #[error("starting health must be positive, got {health}")]
    InvalidHealth { health: i32 },

    #[error("failed to read config '{path}': {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
