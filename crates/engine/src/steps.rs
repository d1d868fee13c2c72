//! Single-step freedoms of a pebble: one flag per octagonal neighbour.

use crate::direction::{STEP_DIRECTIONS, StepDirection};
use crate::position::Position;
use crate::r#move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStepFreedoms {
    base: Position,
    free: [bool; 8],
}

impl SimpleStepFreedoms {
    pub fn new(base: Position) -> Self {
        Self {
            base,
            free: [false; 8],
        }
    }

    pub fn put_base(&mut self, base: Position) {
        self.base = base;
    }

    pub fn base(&self) -> Position {
        self.base
    }

    /// Marks every direction as blocked.
    pub fn reset(&mut self) {
        self.free = [false; 8];
    }

    pub fn set_free(&mut self, direction: StepDirection, free: bool) {
        self.free[direction.index()] = free;
    }

    pub fn is_free(&self, direction: StepDirection) -> bool {
        self.free[direction.index()]
    }

    /// Number of neighbours the pebble can step onto.
    pub fn len(&self) -> usize {
        self.free.iter().filter(|&&free| free).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.free.contains(&true)
    }

    /// Visits one step move per free direction, in [`STEP_DIRECTIONS`] order.
    pub fn for_each(&self, mut visit: impl FnMut(&Move)) {
        let mut mv = Move::step(self.base, self.base);
        for dir in STEP_DIRECTIONS {
            if !self.is_free(dir) {
                continue;
            }
            let (dr, dc) = dir.delta();
            // a free flag always points at an on-board neighbour
            if let Some(destination) = self.base.offset(dr, dc) {
                mv.destination = destination;
                visit(&mv);
            }
        }
    }
}
