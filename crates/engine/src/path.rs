//! The loop-track topology of the board and the single stepping primitive
//! every attack line is walked with.
//!
//! Lines 1 and 4 are joined by the four inner loops, lines 2 and 3 by the
//! outer loops. Leaving the board along line 0 or 5 has no continuation.

use crate::constants::{BOARD_SIZE, NUM_CELLS};
use crate::direction::{ATTACK_DIRECTIONS, Direction};
use crate::error::{Error, Result};
use crate::position::{ALL_POSITIONS, Position};
use once_cell::sync::Lazy;

const LAST: u8 = (BOARD_SIZE - 1) as u8;

/// Result of one primitive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub position: Position,
    /// Set when the step travelled around a loop-track; the walk continues
    /// in this direction.
    pub redirected: Option<Direction>,
}

/// Pre-computed steps for every `(cell, direction)` pair, `None` where the
/// path ends.
pub static STEP_TABLE: Lazy<[[Option<Step>; 4]; NUM_CELLS]> = Lazy::new(|| {
    let mut table = [[None; 4]; NUM_CELLS];
    for &position in ALL_POSITIONS.iter() {
        for dir in ATTACK_DIRECTIONS {
            table[position.index()][dir.index()] = compute_step(position, dir);
        }
    }
    table
});

/// Where the track continues after leaving the board from the edge cell of
/// `line` towards `direction`.
fn loop_exit(line: u8, direction: Direction) -> Option<(u8, u8, Direction)> {
    if line == 0 || line == LAST {
        return None;
    }
    let near = line <= LAST / 2;
    let exit = match (direction, near) {
        // rows 1,2 curl around the top corners, rows 3,4 around the bottom ones
        (Direction::Left, true) => (0, line, Direction::Down),
        (Direction::Left, false) => (LAST, LAST - line, Direction::Up),
        (Direction::Right, true) => (0, LAST - line, Direction::Down),
        (Direction::Right, false) => (LAST, line, Direction::Up),
        // columns 1,2 curl around the left corners, columns 3,4 around the right ones
        (Direction::Up, true) => (line, 0, Direction::Right),
        (Direction::Up, false) => (LAST - line, LAST, Direction::Left),
        (Direction::Down, true) => (LAST - line, 0, Direction::Right),
        (Direction::Down, false) => (line, LAST, Direction::Left),
    };
    Some(exit)
}

fn compute_step(from: Position, direction: Direction) -> Option<Step> {
    let (dr, dc) = direction.delta();
    if let Some(position) = from.offset(dr, dc) {
        return Some(Step { position, redirected: None });
    }
    let line = match direction {
        Direction::Left | Direction::Right => from.row(),
        Direction::Up | Direction::Down => from.column(),
    };
    let (row, column, redirected) = loop_exit(line, direction)?;
    Some(Step {
        position: Position::new(row, column).ok()?,
        redirected: Some(redirected),
    })
}

/// Takes one step from `from` towards `direction`, following a loop-track
/// when the step leaves the board.
pub fn find_step(from: Position, direction: Direction) -> Result<Step> {
    STEP_TABLE[from.index()][direction.index()].ok_or(Error::NoPath {
        position: from,
        direction,
    })
}
