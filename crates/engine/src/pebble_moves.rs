//! All the moves of one pebble, stored without an explicit move array.

use crate::attacks::AttackFreedoms;
use crate::error::Result;
use crate::handle::MoveHandle;
use crate::movelist::MoveList;
use crate::position::Position;
use crate::r#move::Move;
use crate::steps::SimpleStepFreedoms;

/// Scratch container reused across pebbles; [`reset`](Self::reset) clears it
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PebbleMoves {
    pub steppable_directions: SimpleStepFreedoms,
    pub attacks: AttackFreedoms,
    base: Position,
}

impl PebbleMoves {
    pub fn new(base: Position) -> Self {
        Self {
            steppable_directions: SimpleStepFreedoms::new(base),
            attacks: AttackFreedoms::new(base),
            base,
        }
    }

    pub fn base(&self) -> Position {
        self.base
    }

    pub fn set_base(&mut self, base: Position) {
        self.base = base;
        self.steppable_directions.put_base(base);
        self.attacks.put_base(base);
    }

    pub fn reset(&mut self) {
        self.steppable_directions.reset();
        self.attacks.reset();
    }

    /// Number of moves stored.
    pub fn len(&self) -> usize {
        self.steppable_directions.len() + self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steppable_directions.is_empty() && self.attacks.is_empty()
    }

    pub fn for_each_step(&self, visit: impl FnMut(&Move)) {
        self.steppable_directions.for_each(visit);
    }

    pub fn for_each_attack(&self, visit: impl FnMut(&Move)) {
        self.attacks.for_each(visit);
    }

    /// Visits every move, attacks first.
    pub fn for_each(&self, mut visit: impl FnMut(&Move)) {
        self.for_each_attack(&mut visit);
        self.for_each_step(&mut visit);
    }

    /// Appends the handle of every stored move, attacks first.
    pub fn append_handles(&self, list: &mut MoveList) -> Result<()> {
        let mut outcome = Ok(());
        self.for_each(|mv| {
            if outcome.is_ok() {
                outcome = MoveHandle::encode(mv).map(|handle| list.add(handle));
            }
        });
        outcome
    }

    /// Copies the stored moves out.
    pub fn to_vec(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.len());
        self.for_each(|mv| moves.push(*mv));
        moves
    }
}
