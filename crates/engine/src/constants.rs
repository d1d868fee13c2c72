//! Constants used in the Surakarta engine.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 6;

/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Pebbles per side in the starting position.
pub const PEBBLES_PER_SIDE: usize = 12;

// Positive for Red, negative for Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Piece {
    Black = -1,
    Empty = 0,
    Red = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Player {
    Red = 1,
    Black = -1,
}

impl Piece {
    /// Get the player owning a pebble.
    /// Returns `None` if the cell is `Empty`.
    pub fn player(self) -> Option<Player> {
        match self {
            Piece::Red => Some(Player::Red),
            Piece::Black => Some(Player::Black),
            Piece::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn to_layout_char(self) -> char {
        match self {
            Piece::Red => 'r',
            Piece::Black => 'b',
            Piece::Empty => '.',
        }
    }

    pub fn from_layout_char(c: char) -> Option<Piece> {
        match c {
            'r' | 'R' => Some(Piece::Red),
            'b' | 'B' => Some(Piece::Black),
            _ => None,
        }
    }
}

impl Player {
    /// Get the opponent of the current player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// The pebble this player places on the board.
    pub fn piece(self) -> Piece {
        match self {
            Player::Red => Piece::Red,
            Player::Black => Piece::Black,
        }
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Self {
        player.piece()
    }
}
