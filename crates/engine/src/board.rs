//! The board representation for the Surakarta engine.

use crate::constants::{BOARD_SIZE, NUM_CELLS, PEBBLES_PER_SIDE, Piece, Player};
use crate::error::{Error, Result};
use crate::position::{ALL_POSITIONS, Position};
use crate::r#move::Move;
use std::fmt;

/// One bit per cell, indexed by [`Position::index`].
pub type Bitboard = u64;

pub const START_LAYOUT: &str = "bbbbbb/bbbbbb/6/6/rrrrrr/rrrrrr r";

/// Represents the state of the board at any point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub board: [Piece; NUM_CELLS],
    /// Occupancy per side, red at index 0.
    pub color_bitboards: [Bitboard; 2],
    pub player_to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with red to move.
    pub fn new() -> Self {
        Self {
            board: [Piece::Empty; NUM_CELLS],
            color_bitboards: [0; 2],
            player_to_move: Player::Red,
        }
    }

    /// The standard starting position.
    pub fn start() -> Self {
        let mut board = Board::new();
        for &position in ALL_POSITIONS.iter() {
            match position.row() {
                0 | 1 => board.set_piece(position, Piece::Black),
                4 | 5 => board.set_piece(position, Piece::Red),
                _ => {}
            }
        }
        board
    }

    /// Builds a board from a row-major cell array.
    pub fn from_cells(cells: [Piece; NUM_CELLS], player_to_move: Player) -> Self {
        let mut board = Board::new();
        board.player_to_move = player_to_move;
        for (position, piece) in ALL_POSITIONS.iter().zip(cells) {
            board.set_piece(*position, piece);
        }
        board
    }

    /// Parses a layout such as `bbbbbb/bbbbbb/6/6/rrrrrr/rrrrrr r`: six rows
    /// from the top separated by `/`, digits for runs of empty cells, then
    /// the side to move.
    pub fn from_layout(layout: &str) -> Result<Self> {
        let mut parts = layout.split_whitespace();
        let rows = parts
            .next()
            .ok_or_else(|| Error::InvalidLayout("empty layout".to_string()))?;

        let mut board = Board::new();
        let mut row_count = 0;
        for (row, text) in rows.split('/').enumerate() {
            if row >= BOARD_SIZE {
                return Err(Error::InvalidLayout(format!("more than {} rows", BOARD_SIZE)));
            }
            let mut column = 0;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10) {
                    column += run as usize;
                } else {
                    let piece = Piece::from_layout_char(ch).ok_or_else(|| {
                        Error::InvalidLayout(format!("unknown pebble '{}'", ch))
                    })?;
                    if column >= BOARD_SIZE {
                        return Err(Error::InvalidLayout(format!("row {} is too long", row)));
                    }
                    board.set_piece(Position::new(row as u8, column as u8)?, piece);
                    column += 1;
                }
            }
            if column != BOARD_SIZE {
                return Err(Error::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row, column, BOARD_SIZE
                )));
            }
            row_count += 1;
        }
        if row_count != BOARD_SIZE {
            return Err(Error::InvalidLayout(format!(
                "{} rows, expected {}",
                row_count, BOARD_SIZE
            )));
        }

        board.player_to_move = match parts.next() {
            None | Some("r") => Player::Red,
            Some("b") => Player::Black,
            Some(other) => {
                return Err(Error::InvalidLayout(format!("unknown side '{}'", other)));
            }
        };
        for player in [Player::Red, Player::Black] {
            if board.pebble_count(player) as usize > PEBBLES_PER_SIDE {
                return Err(Error::InvalidLayout(format!(
                    "{:?} has more than {} pebbles",
                    player, PEBBLES_PER_SIDE
                )));
            }
        }
        Ok(board)
    }

    pub fn to_layout(&self) -> String {
        let mut layout = String::with_capacity(48);
        for r in 0..BOARD_SIZE {
            let mut empty_count = 0;
            for c in 0..BOARD_SIZE {
                let piece = self.board[r * BOARD_SIZE + c];
                if piece == Piece::Empty {
                    empty_count += 1;
                } else {
                    if empty_count > 0 {
                        layout.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    layout.push(piece.to_layout_char());
                }
            }
            if empty_count > 0 {
                layout.push_str(&empty_count.to_string());
            }
            if r < BOARD_SIZE - 1 {
                layout.push('/');
            }
        }
        layout.push(' ');
        layout.push(if self.player_to_move == Player::Red { 'r' } else { 'b' });
        layout
    }

    pub fn set_piece(&mut self, position: Position, piece: Piece) {
        let sq = position.index();
        let mask: Bitboard = 1 << sq;
        self.color_bitboards[0] &= !mask;
        self.color_bitboards[1] &= !mask;
        if let Some(player) = piece.player() {
            self.color_bitboards[player_idx(player)] |= mask;
        }
        self.board[sq] = piece;
    }

    pub fn piece_at(&self, position: Position) -> Piece {
        self.board[position.index()]
    }

    /// Cell query by signed coordinates; `None` when they are off the board.
    pub fn occupant(&self, row: i8, column: i8) -> Option<Piece> {
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&column) {
            Some(self.board[row as usize * BOARD_SIZE + column as usize])
        } else {
            None
        }
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn occupied_bitboard(&self) -> Bitboard {
        self.color_bitboards[0] | self.color_bitboards[1]
    }

    pub fn pebble_count(&self, player: Player) -> u32 {
        self.color_bitboards[player_idx(player)].count_ones()
    }

    /// Plays a move for the side to move and returns the captured piece
    /// (`Piece::Empty` for single steps).
    pub fn make_move(&mut self, mv: Move) -> Result<Piece> {
        let moving_piece = self.piece_at(mv.source);
        if moving_piece.is_empty() {
            return Err(Error::EmptySource { position: mv.source });
        }
        if moving_piece.player() != Some(self.player_to_move) {
            return Err(Error::IllegalMove(format!(
                "{} does not belong to {:?}",
                mv.source, self.player_to_move
            )));
        }
        let captured_piece = self.piece_at(mv.destination);
        // attack lines may also end on the empty cells between the loop and the struck pebble
        let lands = match captured_piece.player() {
            None => true,
            Some(player) => mv.is_capture && player != self.player_to_move,
        };
        if !lands {
            return Err(Error::IllegalMove(format!(
                "{} cannot land on {}",
                mv, mv.destination
            )));
        }

        self.set_piece(mv.source, Piece::Empty);
        self.set_piece(mv.destination, moving_piece);
        self.player_to_move = self.player_to_move.opponent();
        Ok(captured_piece)
    }

    pub fn unmake_move(&mut self, mv: Move, captured_piece: Piece) {
        self.player_to_move = self.player_to_move.opponent();
        let moving_piece = self.piece_at(mv.destination);
        self.set_piece(mv.destination, captured_piece);
        self.set_piece(mv.source, moving_piece);
    }
}

fn player_idx(player: Player) -> usize {
    if player == Player::Red { 0 } else { 1 }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "(Player: {:?})", self.player_to_move)?;
        writeln!(f, "  +-------------+")?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} | ", BOARD_SIZE - r)?;
            for c in 0..BOARD_SIZE {
                write!(f, "{} ", self.board[r * BOARD_SIZE + c].to_layout_char())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-------------+")?;
        writeln!(f, "    a b c d e f")
    }
}
