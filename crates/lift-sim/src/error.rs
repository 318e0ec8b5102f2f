use lift_core::CoreError;
use lift_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("action count {got} does not match elevator count {expected}")]
    ActionCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("invalid passenger: {0}")]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
