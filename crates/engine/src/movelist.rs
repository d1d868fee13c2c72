//! An append-only buffer of move handles.

use crate::error::Result;
use crate::handle::MoveHandle;
use crate::r#move::Move;
use std::ops::Index;

/// Capacity reserved up front; a crowded position rarely needs more.
pub const MAX_MOVES: usize = 256;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<MoveHandle>,
}

impl MoveList {
    pub fn new() -> Self {
        Self::with_capacity(MAX_MOVES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, mv: MoveHandle) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Empties the list, keeping its allocation.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn as_slice(&self) -> &[MoveHandle] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveHandle> {
        self.moves.iter()
    }

    /// Expands every handle into a [`Move`].
    pub fn decode_all(&self) -> Result<Vec<Move>> {
        self.moves.iter().map(|handle| handle.decode()).collect()
    }

    /// Raw integers, the persisted form of a move list.
    pub fn to_raw(&self) -> Vec<u16> {
        self.moves.iter().map(|handle| handle.raw()).collect()
    }

    pub fn from_raw(raw: &[u16]) -> Self {
        raw.iter().copied().map(MoveHandle::from_raw).collect()
    }
}

impl Index<usize> for MoveList {
    type Output = MoveHandle;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl Extend<MoveHandle> for MoveList {
    fn extend<T: IntoIterator<Item = MoveHandle>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl FromIterator<MoveHandle> for MoveList {
    fn from_iter<T: IntoIterator<Item = MoveHandle>>(iter: T) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a MoveHandle;
    type IntoIter = std::slice::Iter<'a, MoveHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn raw_form_restores_the_same_list() {
        let mut list = MoveList::new();
        list.add(MoveHandle::build(0, 1, 0, 2, false, None).unwrap());
        list.add(MoveHandle::build(2, 1, 1, 2, true, Some(Direction::Left)).unwrap());

        let restored = MoveList::from_raw(&list.to_raw());
        assert_eq!(restored, list);
        assert_eq!(restored.len(), 2);
        assert!(restored[1].is_capture());

        let moves = restored.decode_all().unwrap();
        assert_eq!(moves[1].initial_direction, Some(Direction::Left));

        list.clear();
        assert!(list.is_empty());
    }
}
