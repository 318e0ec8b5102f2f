//! Closed state enums for an elevator car.

/// Travel direction of a car.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    /// Direction that leads from `from` to `to` (`Idle` when equal).
    #[inline]
    pub fn between(from: u32, to: u32) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// Signed projection for numeric consumers: -1, 0 or +1.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Direction::Down => -1,
            Direction::Idle => 0,
            Direction::Up   => 1,
        }
    }
}

/// Door position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    Open,
    #[default]
    Closed,
}

impl DoorState {
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, DoorState::Open)
    }
}

/// Motion phase of a car.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveState {
    /// No travel in progress and doors closed.
    #[default]
    Idle,
    /// Advancing one floor per second toward the head of the stop queue.
    Moving,
    /// Stationary with doors open, counting down the dwell.
    Dwell,
}
