//! Configuration for the Surakarta engine.

use crate::movelist::MAX_MOVES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Evaluation constants, in half-pebble units
    pub pebble_value: i32,
    pub corner_pebble_value: i32,

    // Indexing
    pub move_list_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pebble_value: 2,
            // no loop passes a corner, so a pebble there is half as useful
            corner_pebble_value: 1,
            move_list_capacity: MAX_MOVES,
        }
    }
}
