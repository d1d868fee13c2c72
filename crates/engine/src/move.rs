//! Defines the representation of a move in the engine.

use crate::direction::Direction;
use crate::position::Position;
use std::fmt;

/// A single move of one pebble.
///
/// `initial_direction` is only meaningful for captures: an attack line can be
/// redirected by loop-tracks, so the direction it departed in is recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: Position,
    pub destination: Position,
    pub is_capture: bool,
    pub initial_direction: Option<Direction>,
}

impl Move {
    /// Creates a non-capturing single step.
    pub fn step(source: Position, destination: Position) -> Self {
        Self {
            source,
            destination,
            is_capture: false,
            initial_direction: None,
        }
    }

    /// Creates a capture whose line departed `source` towards `direction`.
    pub fn capture(source: Position, destination: Position, direction: Direction) -> Self {
        Self {
            source,
            destination,
            is_capture: true,
            initial_direction: Some(direction),
        }
    }

    /// Square notation, `x` between the squares for captures (e.g. `b5xd6`).
    pub fn to_notation(&self) -> String {
        let separator = if self.is_capture { "x" } else { "" };
        format!("{}{}{}", self.source, separator, self.destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
