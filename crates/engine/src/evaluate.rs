//! Static evaluation: a material count from Red's point of view.

use crate::board::Board;
use crate::config::Config;
use crate::constants::Player;
use crate::position::ALL_POSITIONS;

/// Value of one pebble, `corner` when it stands on a board corner.
fn pebble_value(config: &Config, corner: bool) -> i32 {
    if corner {
        config.corner_pebble_value
    } else {
        config.pebble_value
    }
}

/// Positive scores favour Red, negative ones Black.
pub fn evaluate(board: &Board, config: &Config) -> i32 {
    let mut score = 0;
    for &position in ALL_POSITIONS.iter() {
        let value = pebble_value(config, position.is_corner());
        match board.piece_at(position).player() {
            Some(Player::Red) => score += value,
            Some(Player::Black) => score -= value,
            None => {}
        }
    }
    score
}

/// Score from the side to move's point of view.
pub fn evaluate_for_side_to_move(board: &Board, config: &Config) -> i32 {
    let score = evaluate(board, config);
    if board.player_to_move == Player::Red { score } else { -score }
}
