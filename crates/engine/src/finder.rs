//! Finds the moves available to a single pebble.
//!
//! The finder is side-agnostic: it explores whichever pebble sits on the
//! base cell, regardless of whose turn it is. Turn filtering belongs to the
//! [`indexer`](crate::indexer).

use crate::attacks::AttackFreedoms;
use crate::board::Board;
use crate::direction::{ATTACK_DIRECTIONS, Direction, STEP_DIRECTIONS};
use crate::error::{Error, Result};
use crate::path::find_step;
use crate::pebble_moves::PebbleMoves;
use crate::position::Position;
use crate::steps::SimpleStepFreedoms;
use log::trace;

/// Most times an attack line may arrive back at its base cell.
const MAX_SELF_TOUCHES: u8 = 1;

fn check_source(board: &Board, base: Position) -> Result<()> {
    if board.piece_at(base).is_empty() {
        return Err(Error::EmptySource { position: base });
    }
    Ok(())
}

/// Finds the empty neighbours of the pebble at `base`.
pub fn explore_simple_steps(board: &Board, base: Position) -> Result<SimpleStepFreedoms> {
    let mut freedoms = SimpleStepFreedoms::new(base);
    explore_simple_steps_into(board, base, &mut freedoms)?;
    Ok(freedoms)
}

/// Like [`explore_simple_steps`], writing into a reused `freedoms`.
pub fn explore_simple_steps_into(
    board: &Board,
    base: Position,
    freedoms: &mut SimpleStepFreedoms,
) -> Result<()> {
    check_source(board, base)?;
    freedoms.reset();
    freedoms.put_base(base);

    for dir in STEP_DIRECTIONS {
        let (dr, dc) = dir.delta();
        let free = base
            .offset(dr, dc)
            .is_some_and(|neighbour| board.piece_at(neighbour).is_empty());
        freedoms.set_free(dir, free);
    }
    Ok(())
}

/// Finds the capture bands of the pebble at `base` in all four directions.
pub fn explore_attacks(board: &Board, base: Position) -> Result<AttackFreedoms> {
    let mut freedoms = AttackFreedoms::new(base);
    explore_attacks_into(board, base, &mut freedoms)?;
    Ok(freedoms)
}

/// Like [`explore_attacks`], writing into a reused `freedoms`.
pub fn explore_attacks_into(
    board: &Board,
    base: Position,
    freedoms: &mut AttackFreedoms,
) -> Result<()> {
    check_source(board, base)?;
    freedoms.reset();
    freedoms.put_base(base);

    for dir in ATTACK_DIRECTIONS {
        match trace_line(board, base, dir) {
            Some((threshold, limit, first_landing)) => {
                trace!("{} {:?}: landings {}..{}", base, dir, threshold, limit);
                freedoms.put(dir, threshold, limit, first_landing);
            }
            None => freedoms.put(dir, 0, 0, None),
        }
    }
    Ok(())
}

/// Walks the attack line departing `base` towards `departure`.
///
/// Returns `(threshold, limit, first_landing)` when the line strikes an
/// opposing pebble after travelling at least one loop.
fn trace_line(
    board: &Board,
    base: Position,
    departure: Direction,
) -> Option<(u8, u8, Option<Position>)> {
    let own = board.piece_at(base).player();

    let mut position = base;
    let mut direction = departure;
    let mut steps: u8 = 0;
    let mut loops: u8 = 0;
    let mut self_touches: u8 = 0;
    let mut threshold: u8 = 0;
    let mut first_landing = None;

    loop {
        // NoPath just ends this line
        let step = find_step(position, direction).ok()?;
        position = step.position;

        if let Some(redirected) = step.redirected {
            loops += 1;
            if loops == 1 {
                threshold = steps;
            }
            direction = redirected;
        }

        if position == base {
            self_touches += 1;
            if self_touches > MAX_SELF_TOUCHES {
                return None;
            }
            // the line passes over the vacated base, which is no landing cell
            threshold = steps + 1;
        } else {
            if loops > 0 && steps == threshold {
                first_landing = Some(position);
            }
            match board.piece_at(position).player() {
                None => {}
                Some(player) if Some(player) == own => return None,
                Some(_) if loops > 0 => return Some((threshold, steps + 1, first_landing)),
                Some(_) => return None,
            }
        }

        steps += 1;
    }
}

/// Explores every move of the pebble at `base`.
pub fn explore_all(board: &Board, base: Position) -> Result<PebbleMoves> {
    let mut moves = PebbleMoves::new(base);
    explore_all_into(board, base, &mut moves)?;
    Ok(moves)
}

/// Like [`explore_all`], writing into a reused `moves`.
pub fn explore_all_into(board: &Board, base: Position, moves: &mut PebbleMoves) -> Result<()> {
    moves.reset();
    moves.set_base(base);
    explore_simple_steps_into(board, base, &mut moves.steppable_directions)?;
    explore_attacks_into(board, base, &mut moves.attacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::AttackBand;
    use crate::constants::{NUM_CELLS, Piece, Player};
    use crate::movelist::MoveList;
    use crate::position::ALL_POSITIONS;
    use crate::r#move::Move;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).unwrap()
    }

    #[test]
    fn isolated_pebble_steps_everywhere() {
        let board = board("6/6/6/3r2/6/6 r");
        let freedoms = explore_simple_steps(&board, pos(3, 3)).unwrap();
        assert_eq!(freedoms.len(), 8);
    }

    #[test]
    fn surrounded_pebble_cannot_step() {
        let board = board("6/1rrr2/1rrr2/1rrr2/6/6 r");
        let freedoms = explore_simple_steps(&board, pos(2, 2)).unwrap();
        assert_eq!(freedoms.len(), 0);
    }

    #[test]
    fn corner_pebble_has_three_neighbours() {
        let board = board("r5/6/6/6/6/6 r");
        let freedoms = explore_simple_steps(&board, pos(0, 0)).unwrap();
        assert_eq!(freedoms.len(), 3);
    }

    #[test]
    fn empty_source_is_rejected() {
        let board = Board::new();
        let empty = Err(Error::EmptySource { position: pos(2, 2) });
        assert_eq!(explore_simple_steps(&board, pos(2, 2)).map(|_| ()), empty);
        assert_eq!(explore_attacks(&board, pos(2, 2)).map(|_| ()), empty);
        assert_eq!(explore_all(&board, pos(2, 2)).map(|_| ()), empty);
    }

    #[test]
    fn corner_pebbles_never_attack() {
        let board = board("r4r/6/6/6/6/r4r r");
        let mut attacks = AttackFreedoms::new(pos(0, 0));
        for base in [pos(0, 0), pos(5, 0), pos(5, 5), pos(0, 5)] {
            explore_attacks_into(&board, base, &mut attacks).unwrap();
            assert_eq!(attacks.len(), 0, "corner {}", base);
        }
    }

    #[test]
    fn orthogonally_clogged_pebble_has_four_steps() {
        let board = board("6/2r3/1rrr2/2r3/6/6 r");
        let attacks = explore_attacks(&board, pos(2, 2)).unwrap();
        let steps = explore_simple_steps(&board, pos(2, 2)).unwrap();
        assert_eq!(attacks.len(), 0);
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn clogged_pebble_has_no_moves() {
        let board = board("6/1rrr2/1rrr2/1rrr2/6/6 r");
        let moves = explore_all(&board, pos(2, 2)).unwrap();
        assert_eq!(moves.len(), 0);
        assert!(moves.is_empty());
    }

    #[test]
    fn finds_attack_bands_through_the_outer_loop() {
        let board = board("6/1rbr2/1rrr2/1rrr2/6/6 r");

        let mut moves = explore_all(&board, pos(2, 1)).unwrap();
        // (2,0), loop to (0,2), strike (1,2)
        let left = *moves.attacks.band(Direction::Left);
        assert_eq!((left.threshold, left.limit), (1, 3));
        assert_eq!(left.first_landing, Some(pos(0, 2)));
        assert_eq!(moves.attacks.len(), 2);

        explore_all_into(&board, pos(1, 2), &mut moves).unwrap();
        let left = *moves.attacks.band(Direction::Left);
        assert_eq!((left.threshold, left.limit), (0, 0));
        // (0,2), loop to (2,0), strike (2,1)
        let up = *moves.attacks.band(Direction::Up);
        assert_eq!((up.threshold, up.limit), (1, 3));
        assert_eq!(moves.attacks.len(), 2);
        assert_eq!(moves.base(), pos(1, 2));
    }

    #[test]
    fn single_loop_capture_counts_once() {
        // red (2,0) left loops straight onto black (0,2)
        let board = board("2b3/6/r5/6/6/6 r");
        let attacks = explore_attacks(&board, pos(2, 0)).unwrap();
        let left = *attacks.band(Direction::Left);
        assert_eq!(left.threshold, 0);
        assert_eq!(left.limit, left.threshold + 1);
        assert_eq!(left.len(), 1);

        let mut seen = Vec::new();
        attacks.for_each(|mv| seen.push(*mv));
        assert!(seen.contains(&Move::capture(pos(2, 0), pos(0, 2), Direction::Left)));
    }

    #[test]
    fn single_loop_capture_after_a_straight_run() {
        // red (2,3) left: (2,2) (2,1) (2,0), loop to (0,2) holding black
        let board = board("2b3/6/3r2/6/6/6 r");
        let attacks = explore_attacks(&board, pos(2, 3)).unwrap();
        let left = *attacks.band(Direction::Left);
        assert_eq!(left.threshold, 3);
        assert_eq!(left.limit, 4);
    }

    #[test]
    fn straight_line_contact_is_no_capture() {
        let board = board("6/6/1r2b1/6/6/6 r");
        let attacks = explore_attacks(&board, pos(2, 1)).unwrap();
        assert_eq!(*attacks.band(Direction::Right), AttackBand::default());
    }

    #[test]
    fn own_pebble_blocks_after_the_loop() {
        // black would be struck, but red (0,2) sits first behind the loop
        let board = board("2r3/2b3/r5/6/6/6 r");
        let attacks = explore_attacks(&board, pos(2, 0)).unwrap();
        assert!(attacks.band(Direction::Left).is_empty());
    }

    #[test]
    fn line_runs_over_its_vacated_base() {
        // red (1,1) left: (1,0), loop to (0,1), over (1,1), strike black (3,1)
        let board = board("6/1r4/6/1b4/6/6 r");
        let attacks = explore_attacks(&board, pos(1, 1)).unwrap();
        let left = *attacks.band(Direction::Left);
        assert_eq!((left.threshold, left.limit), (3, 5));
        assert_eq!(left.first_landing, Some(pos(2, 1)));

        let mut seen = Vec::new();
        attacks.for_each(|mv| {
            if mv.initial_direction == Some(Direction::Left) {
                seen.push(mv.destination)
            }
        });
        assert_eq!(seen, vec![pos(2, 1), pos(3, 1)]);
    }

    #[test]
    fn lone_pebble_walks_its_circuit_and_stops() {
        let board = board("6/1r4/6/6/6/6 r");
        let attacks = explore_attacks(&board, pos(1, 1)).unwrap();
        assert_eq!(attacks.len(), 0);
    }

    #[test]
    fn pebble_moves_visit_attacks_before_steps() {
        let board = board("2b3/6/r5/6/6/6 r");
        let moves = explore_all(&board, pos(2, 0)).unwrap();
        let all = moves.to_vec();
        assert_eq!(all.len(), moves.len());
        assert_eq!(
            moves.len(),
            moves.steppable_directions.len() + moves.attacks.len()
        );
        let first_step = all.iter().position(|mv| !mv.is_capture).unwrap();
        assert!(all[..first_step].iter().all(|mv| mv.is_capture));
        assert!(all[first_step..].iter().all(|mv| !mv.is_capture));

        let mut list = MoveList::new();
        moves.append_handles(&mut list).unwrap();
        assert_eq!(list.decode_all().unwrap(), all);
    }

    #[test]
    fn random_boards_keep_bands_consistent() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut moves = PebbleMoves::new(pos(0, 0));

        for _ in 0..200 {
            let mut cells = [Piece::Empty; NUM_CELLS];
            for cell in cells.iter_mut() {
                *cell = match rng.gen_range(0..4) {
                    0 => Piece::Red,
                    1 => Piece::Black,
                    _ => Piece::Empty,
                };
            }
            let board = Board::from_cells(cells, Player::Red);

            for &base in ALL_POSITIONS.iter() {
                if board.piece_at(base).is_empty() {
                    continue;
                }
                explore_all_into(&board, base, &mut moves).unwrap();

                let mut counted = 0;
                for dir in ATTACK_DIRECTIONS {
                    let band = moves.attacks.band(dir);
                    assert!(band.threshold <= band.limit);
                    counted += band.len();
                }
                assert_eq!(moves.attacks.len(), counted);

                let own = board.piece_at(base);
                let mut visited = 0;
                moves.for_each(|mv| {
                    visited += 1;
                    assert_eq!(mv.source, base);
                    assert_ne!(mv.destination, base);
                    assert_ne!(board.piece_at(mv.destination), own);
                    if !mv.is_capture {
                        assert!(board.piece_at(mv.destination).is_empty());
                    }
                });
                assert_eq!(visited, moves.len());
            }
        }
    }
}
