//! Error types for the move finder.

use crate::direction::Direction;
use crate::position::Position;
use thiserror::Error;

/// Errors that can occur while finding, indexing or encoding moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation needs a pebble at its source cell.
    #[error("no pebble at source position {position}")]
    EmptySource { position: Position },

    /// A codec field does not fit the board.
    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: u16 },

    /// Only capturing moves carry an initial direction.
    #[error("a non-capturing move cannot carry a direction")]
    DirectionWithoutCapture,

    /// The stepping primitive cannot advance from this cell.
    #[error("no path from {position} towards {direction:?}")]
    NoPath { position: Position, direction: Direction },

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
