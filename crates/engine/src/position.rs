//! Cell addresses on the 6x6 board.

use crate::constants::{BOARD_SIZE, NUM_CELLS};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// A cell address. Row 0 is the top of the board, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

/// Every cell of the board in row-major order.
pub static ALL_POSITIONS: Lazy<[Position; NUM_CELLS]> = Lazy::new(|| {
    let mut positions = [Position { row: 0, column: 0 }; NUM_CELLS];
    for (index, position) in positions.iter_mut().enumerate() {
        *position = Position {
            row: (index / BOARD_SIZE) as u8,
            column: (index % BOARD_SIZE) as u8,
        };
    }
    positions
});

impl Position {
    /// Creates a position, rejecting coordinates that are off the board.
    pub fn new(row: u8, column: u8) -> Result<Self> {
        if row as usize >= BOARD_SIZE {
            return Err(Error::OutOfRange { field: "row", value: row as u16 });
        }
        if column as usize >= BOARD_SIZE {
            return Err(Error::OutOfRange { field: "column", value: column as u16 });
        }
        Ok(Self { row, column })
    }

    pub fn from_index(index: usize) -> Result<Self> {
        ALL_POSITIONS
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange { field: "index", value: index as u16 })
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn column(self) -> u8 {
        self.column
    }

    /// Linear index `row * 6 + column`.
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.column as usize
    }

    /// The cell `(dr, dc)` away, or `None` if that is off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let column = self.column as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&column) {
            Some(Position { row: row as u8, column: column as u8 })
        } else {
            None
        }
    }

    /// True for the four cells no loop-track passes through.
    pub fn is_corner(self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == last) && (self.column == 0 || self.column == last)
    }
}

/// Square notation: file `a`-`f` left to right, rank `6`-`1` top to bottom.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.column) as char,
            BOARD_SIZE as u8 - self.row
        )
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidLayout(format!("bad square '{}'", s)));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..b'a' + BOARD_SIZE as u8).contains(&file)
            || !(b'1'..=b'0' + BOARD_SIZE as u8).contains(&rank)
        {
            return Err(Error::InvalidLayout(format!("bad square '{}'", s)));
        }
        Position::new(BOARD_SIZE as u8 - (rank - b'0'), file - b'a')
    }
}
