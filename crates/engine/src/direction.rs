//! Orthogonal attack directions and octagonal step directions.

/// One of the four directions an attack line can depart in.
///
/// The discriminant is the code stored in a [`MoveHandle`](crate::handle::MoveHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

/// Attack directions in the order they are traced and indexed.
pub const ATTACK_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(Direction::Left),
            1 => Some(Direction::Up),
            2 => Some(Direction::Right),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Row and column delta of one step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the eight neighbours a pebble can step onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepDirection {
    Left = 0,
    UpLeft = 1,
    Up = 2,
    UpRight = 3,
    Right = 4,
    DownRight = 5,
    Down = 6,
    DownLeft = 7,
}

/// Step directions, clockwise starting from the left neighbour.
pub const STEP_DIRECTIONS: [StepDirection; 8] = [
    StepDirection::Left,
    StepDirection::UpLeft,
    StepDirection::Up,
    StepDirection::UpRight,
    StepDirection::Right,
    StepDirection::DownRight,
    StepDirection::Down,
    StepDirection::DownLeft,
];

impl StepDirection {
    pub const fn delta(self) -> (i8, i8) {
        match self {
            StepDirection::Left => (0, -1),
            StepDirection::UpLeft => (-1, -1),
            StepDirection::Up => (-1, 0),
            StepDirection::UpRight => (-1, 1),
            StepDirection::Right => (0, 1),
            StepDirection::DownRight => (1, 1),
            StepDirection::Down => (1, 0),
            StepDirection::DownLeft => (1, -1),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}
