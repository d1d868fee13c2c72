//! Compact integer handles for moves and positions.
//!
//! The indexer stores moves as flat integers rather than [`Move`] values.

use crate::constants::BOARD_SIZE;
use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::position::Position;
use crate::r#move::Move;

const FIELD_MASK: u16 = 0x7;
const SRC_ROW_SHIFT: u16 = 0;
const SRC_COLUMN_SHIFT: u16 = 3;
const DST_ROW_SHIFT: u16 = 6;
const DST_COLUMN_SHIFT: u16 = 9;
const CAPTURE_SHIFT: u16 = 12;
const DIRECTION_SHIFT: u16 = 13;

fn check_coordinate(field: &'static str, value: u8) -> Result<u16> {
    if (value as usize) < BOARD_SIZE {
        Ok(value as u16)
    } else {
        Err(Error::OutOfRange { field, value: value as u16 })
    }
}

fn decode_coordinate(raw: u16, shift: u16, field: &'static str) -> Result<u8> {
    let value = (raw >> shift) & FIELD_MASK;
    if (value as usize) < BOARD_SIZE {
        Ok(value as u8)
    } else {
        Err(Error::OutOfRange { field, value })
    }
}

/// A move packed into 16 bits.
///
/// - Bits 0-2:   source row
/// - Bits 3-5:   source column
/// - Bits 6-8:   destination row
/// - Bits 9-11:  destination column
/// - Bit 12:     capture flag
/// - Bits 13-15: initial direction code + 1, 0 when there is none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveHandle(u16);

impl MoveHandle {
    /// Builds a handle straight from move fields.
    pub fn build(
        src_row: u8,
        src_column: u8,
        dst_row: u8,
        dst_column: u8,
        is_capture: bool,
        direction: Option<Direction>,
    ) -> Result<Self> {
        if !is_capture && direction.is_some() {
            return Err(Error::DirectionWithoutCapture);
        }
        let direction_bits = direction.map_or(0, |dir| dir.code() as u16 + 1);
        Ok(MoveHandle(
            (check_coordinate("source row", src_row)? << SRC_ROW_SHIFT)
                | (check_coordinate("source column", src_column)? << SRC_COLUMN_SHIFT)
                | (check_coordinate("destination row", dst_row)? << DST_ROW_SHIFT)
                | (check_coordinate("destination column", dst_column)? << DST_COLUMN_SHIFT)
                | ((is_capture as u16) << CAPTURE_SHIFT)
                | (direction_bits << DIRECTION_SHIFT),
        ))
    }

    pub fn encode(mv: &Move) -> Result<Self> {
        Self::build(
            mv.source.row(),
            mv.source.column(),
            mv.destination.row(),
            mv.destination.column(),
            mv.is_capture,
            mv.initial_direction,
        )
    }

    /// Expands the handle back into a [`Move`].
    pub fn decode(self) -> Result<Move> {
        let raw = self.0;
        let source = Position::new(
            decode_coordinate(raw, SRC_ROW_SHIFT, "source row")?,
            decode_coordinate(raw, SRC_COLUMN_SHIFT, "source column")?,
        )?;
        let destination = Position::new(
            decode_coordinate(raw, DST_ROW_SHIFT, "destination row")?,
            decode_coordinate(raw, DST_COLUMN_SHIFT, "destination column")?,
        )?;
        let is_capture = (raw >> CAPTURE_SHIFT) & 1 != 0;
        let direction_bits = (raw >> DIRECTION_SHIFT) & FIELD_MASK;

        let initial_direction = match direction_bits {
            0 => None,
            _ if !is_capture => return Err(Error::DirectionWithoutCapture),
            code => Some(
                Direction::from_code(code as u8 - 1)
                    .ok_or(Error::OutOfRange { field: "direction", value: code })?,
            ),
        };

        Ok(Move {
            source,
            destination,
            is_capture,
            initial_direction,
        })
    }

    pub const fn from_raw(raw: u16) -> Self {
        MoveHandle(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Checks the capture flag without a full decode.
    pub const fn is_capture(self) -> bool {
        (self.0 >> CAPTURE_SHIFT) & 1 != 0
    }
}

/// A position packed into 6 bits: row in bits 0-2, column in bits 3-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionHandle(u8);

impl PositionHandle {
    pub fn build(row: u8, column: u8) -> Result<Self> {
        let row = check_coordinate("row", row)?;
        let column = check_coordinate("column", column)?;
        Ok(PositionHandle((row | (column << 3)) as u8))
    }

    pub fn encode(position: Position) -> Self {
        PositionHandle(position.row() | (position.column() << 3))
    }

    pub fn decode(self) -> Result<Position> {
        let raw = self.0 as u16;
        Position::new(
            decode_coordinate(raw, 0, "row")?,
            decode_coordinate(raw, 3, "column")?,
        )
    }

    pub const fn from_raw(raw: u8) -> Self {
        PositionHandle(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::ATTACK_DIRECTIONS;
    use crate::position::ALL_POSITIONS;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn capture_move_survives_encoding() {
        let mv = Move::capture(pos(1, 2), pos(5, 4), Direction::Left);
        let handle = MoveHandle::encode(&mv).unwrap();
        assert_eq!(handle.decode().unwrap(), mv);
        assert_eq!(
            MoveHandle::build(1, 2, 5, 4, true, Some(Direction::Left)).unwrap(),
            handle
        );
        assert!(handle.is_capture());
    }

    #[test]
    fn every_field_lands_in_its_own_bits() {
        let handle = MoveHandle::build(5, 4, 3, 2, true, Some(Direction::Down)).unwrap();
        assert_eq!(handle.raw(), 5 | (4 << 3) | (3 << 6) | (2 << 9) | (1 << 12) | (4 << 13));
    }

    #[test]
    fn all_moves_between_all_cells_round_trip() {
        for &src in ALL_POSITIONS.iter() {
            for &dst in ALL_POSITIONS.iter() {
                let step = Move::step(src, dst);
                assert_eq!(MoveHandle::encode(&step).unwrap().decode().unwrap(), step);
                for dir in ATTACK_DIRECTIONS {
                    let capture = Move::capture(src, dst, dir);
                    assert_eq!(MoveHandle::encode(&capture).unwrap().decode().unwrap(), capture);
                }
            }
        }
    }

    #[test]
    fn step_decodes_without_direction() {
        let handle = MoveHandle::build(0, 0, 0, 1, false, None).unwrap();
        let mv = handle.decode().unwrap();
        assert!(!mv.is_capture);
        assert_eq!(mv.initial_direction, None);
    }

    #[test]
    fn capture_without_direction_is_representable() {
        let mv = Move {
            source: pos(2, 2),
            destination: pos(3, 3),
            is_capture: true,
            initial_direction: None,
        };
        assert_eq!(MoveHandle::encode(&mv).unwrap().decode().unwrap(), mv);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            MoveHandle::build(6, 0, 0, 0, false, None),
            Err(Error::OutOfRange { field: "source row", value: 6 })
        );
        assert_eq!(
            MoveHandle::build(0, 0, 0, 7, false, None),
            Err(Error::OutOfRange { field: "destination column", value: 7 })
        );
        assert_eq!(
            MoveHandle::build(0, 0, 0, 1, false, Some(Direction::Up)),
            Err(Error::DirectionWithoutCapture)
        );
        assert!(PositionHandle::build(0, 6).is_err());
    }

    #[test]
    fn rejects_corrupt_raw_handles() {
        // destination row 7
        assert!(MoveHandle::from_raw(7 << 6).decode().is_err());
        // direction code 6 on a capture
        assert_eq!(
            MoveHandle::from_raw((1 << 12) | (6 << 13)).decode(),
            Err(Error::OutOfRange { field: "direction", value: 6 })
        );
        // direction on a step
        assert_eq!(
            MoveHandle::from_raw(1 << 13).decode(),
            Err(Error::DirectionWithoutCapture)
        );
    }

    #[test]
    fn position_handles_round_trip() {
        let handle = PositionHandle::encode(pos(2, 3));
        assert_eq!(handle.raw(), 2 | (3 << 3));
        assert_eq!(handle.decode().unwrap(), pos(2, 3));
        assert_eq!(PositionHandle::build(2, 3).unwrap(), handle);
        for &p in ALL_POSITIONS.iter() {
            assert_eq!(PositionHandle::encode(p).decode().unwrap(), p);
        }
    }
}
