use lift_core::ElevatorId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("{0} is at capacity")]
    CarFull(ElevatorId),

    #[error("floor {floor} is outside 1..={floors}")]
    FloorOutOfRange { floor: u32, floors: u32 },

    #[error("origin and destination are both floor {0}")]
    SameFloor(u32),
}

pub type FleetResult<T> = Result<T, FleetError>;
