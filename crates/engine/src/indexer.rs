//! Indexes the moves of the side to move into flat lists of handles.
//!
//! Only pebbles of `board.player_to_move` are indexed; every other cell is
//! skipped silently, so callers may pass any set of positions.

use crate::attacks::AttackFreedoms;
use crate::board::Board;
use crate::error::Result;
use crate::finder::{explore_attacks_into, explore_simple_steps_into};
use crate::handle::MoveHandle;
use crate::movelist::MoveList;
use crate::position::{ALL_POSITIONS, Position};
use crate::r#move::Move;
use crate::steps::SimpleStepFreedoms;
use log::debug;

fn is_turn_pebble(board: &Board, base: Position) -> bool {
    board.piece_at(base).player() == Some(board.player_to_move)
}

/// Appends the handle of every visited move.
///
/// The finder only yields on-board coordinates, so encoding cannot fail.
fn push_encoded(list: &mut MoveList) -> impl FnMut(&Move) + '_ {
    move |mv: &Move| {
        if let Ok(handle) = MoveHandle::encode(mv) {
            list.add(handle);
        }
    }
}

/// Indexes the single-step moves of the pebble at `base`.
pub fn index_single_steps_from(board: &Board, base: Position, list: &mut MoveList) {
    let mut freedoms = SimpleStepFreedoms::new(base);
    single_steps_from(board, base, list, &mut freedoms);
}

/// Indexes the captures of the pebble at `base`.
pub fn index_attacks_from(board: &Board, base: Position, list: &mut MoveList) {
    let mut freedoms = AttackFreedoms::new(base);
    attacks_from(board, base, list, &mut freedoms);
}

/// Indexes every move of the pebble at `base`, captures first.
pub fn index_from(board: &Board, base: Position, list: &mut MoveList) {
    index_attacks_from(board, base, list);
    index_single_steps_from(board, base, list);
}

fn single_steps_from(
    board: &Board,
    base: Position,
    list: &mut MoveList,
    freedoms: &mut SimpleStepFreedoms,
) {
    if !is_turn_pebble(board, base) {
        return;
    }
    if explore_simple_steps_into(board, base, freedoms).is_ok() {
        freedoms.for_each(push_encoded(list));
    }
}

fn attacks_from(
    board: &Board,
    base: Position,
    list: &mut MoveList,
    freedoms: &mut AttackFreedoms,
) {
    if !is_turn_pebble(board, base) {
        return;
    }
    if explore_attacks_into(board, base, freedoms).is_ok() {
        freedoms.for_each(push_encoded(list));
    }
}

/// Indexes the single-step moves of every pebble in `positions`.
pub fn index_single_steps(board: &Board, list: &mut MoveList, positions: &[Position]) {
    let start = list.len();
    let mut freedoms = SimpleStepFreedoms::new(ALL_POSITIONS[0]);
    for &base in positions {
        single_steps_from(board, base, list, &mut freedoms);
    }
    debug!(
        "indexed {} single steps for {:?}",
        list.len() - start,
        board.player_to_move
    );
}

/// Indexes the captures of every pebble in `positions`.
pub fn index_attacks(board: &Board, list: &mut MoveList, positions: &[Position]) {
    let start = list.len();
    let mut freedoms = AttackFreedoms::new(ALL_POSITIONS[0]);
    for &base in positions {
        attacks_from(board, base, list, &mut freedoms);
    }
    debug!(
        "indexed {} attacks for {:?}",
        list.len() - start,
        board.player_to_move
    );
}

/// Indexes all moves from `positions`: single steps, then attacks.
pub fn index(board: &Board, list: &mut MoveList, positions: &[Position]) {
    index_single_steps(board, list, positions);
    index_attacks(board, list, positions);
}

/// Every legal move of the side to move.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    index(board, &mut list, &ALL_POSITIONS[..]);
    list
}

/// Decodes an indexed list back into moves.
pub fn expand(list: &MoveList) -> Result<Vec<Move>> {
    list.decode_all()
}
