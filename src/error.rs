//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {column}) is already occupied")]
    InvalidMove { row: usize, column: usize },

    #[error("cell ({row}, {column}) is out of bounds on a {size}x{size} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },

    #[error("board size {size} is invalid, the board needs at least one cell")]
    InvalidBoardSize { size: usize },

    #[error("board string '{context}' has {cells} cells, which is not a square grid")]
    InvalidBoardLength { cells: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("no valid moves available")]
    NoValidMoves,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
