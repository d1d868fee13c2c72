//! Attack freedoms of a pebble.
//!
//! Instead of listing every capture, each of the four departure directions
//! keeps a band of step indices along its (loop-redirected) attack line:
//! steps `threshold..limit` are the landing cells. The line itself depends
//! only on the board topology, so the moves can be replayed from the band
//! with [`find_step`] alone.

use crate::direction::{ATTACK_DIRECTIONS, Direction};
use crate::path::find_step;
use crate::position::Position;
use crate::r#move::Move;

/// Landing band along one attack line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackBand {
    /// Steps walked before the first landing cell.
    pub threshold: u8,
    /// Steps walked up to and including the struck pebble.
    pub limit: u8,
    /// First landing cell, cached for callers that only highlight targets.
    pub first_landing: Option<Position>,
}

impl AttackBand {
    pub fn len(&self) -> usize {
        (self.limit - self.threshold) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.limit == self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackFreedoms {
    base: Position,
    bands: [AttackBand; 4],
}

impl AttackFreedoms {
    pub fn new(base: Position) -> Self {
        Self {
            base,
            bands: [AttackBand::default(); 4],
        }
    }

    pub fn put_base(&mut self, base: Position) {
        self.base = base;
    }

    pub fn base(&self) -> Position {
        self.base
    }

    /// Stores the band for one departure direction.
    pub fn put(
        &mut self,
        direction: Direction,
        threshold: u8,
        limit: u8,
        first_landing: Option<Position>,
    ) {
        debug_assert!(threshold <= limit);
        self.bands[direction.index()] = AttackBand {
            threshold,
            limit,
            first_landing,
        };
    }

    pub fn band(&self, direction: Direction) -> &AttackBand {
        &self.bands[direction.index()]
    }

    /// Resets all thresholds and limits to zero.
    pub fn reset(&mut self) {
        self.bands = [AttackBand::default(); 4];
    }

    /// Number of capture moves.
    pub fn len(&self) -> usize {
        self.bands.iter().map(AttackBand::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.iter().all(AttackBand::is_empty)
    }

    /// Visits every capture move, directions in [`ATTACK_DIRECTIONS`] order
    /// and landings in walking order.
    pub fn for_each(&self, mut visit: impl FnMut(&Move)) {
        let mut mv = Move::capture(self.base, self.base, Direction::Left);

        for dir in ATTACK_DIRECTIONS {
            let band = self.band(dir);
            if band.is_empty() {
                continue;
            }
            mv.initial_direction = Some(dir);

            let mut position = self.base;
            let mut direction = dir;
            for i in 0..band.limit {
                let Ok(step) = find_step(position, direction) else {
                    break;
                };
                position = step.position;
                if let Some(redirected) = step.redirected {
                    direction = redirected;
                }
                if i >= band.threshold {
                    mv.destination = position;
                    visit(&mv);
                }
            }
        }
    }
}
