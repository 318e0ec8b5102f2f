//! What the engine exposes after each step.

use lift_core::{PassengerId, Tick};
use lift_fleet::{Direction, DoorState, Elevator, PassengerRegistry};

use crate::reward::RewardComponents;

/// Externally visible state of one car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorObservation {
    pub floor:     u32,
    pub direction: Direction,
    pub door:      DoorState,
    pub is_full:   bool,
}

/// Snapshot returned by `reset` and `step`.
///
/// Hall-call vectors are indexed by `floor - 1` and flag floors with at
/// least one not-yet-boarded passenger heading that way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub time:           Tick,
    pub elevators:      Vec<ElevatorObservation>,
    pub hall_call_up:   Vec<bool>,
    pub hall_call_down: Vec<bool>,
}

impl Observation {
    pub(crate) fn capture(
        time:       Tick,
        elevators:  &[Elevator],
        passengers: &PassengerRegistry,
        floors:     u32,
    ) -> Self {
        let cars = elevators
            .iter()
            .map(|e| ElevatorObservation {
                floor:     e.current_floor,
                direction: e.direction,
                door:      e.door_state,
                is_full:   e.is_full(),
            })
            .collect();

        let mut hall_call_up = vec![false; floors as usize];
        let mut hall_call_down = vec![false; floors as usize];
        for p in passengers.iter().filter(|p| p.is_waiting()) {
            let idx = (p.origin_floor - 1) as usize;
            if p.dest_floor > p.origin_floor {
                hall_call_up[idx] = true;
            } else {
                hall_call_down[idx] = true;
            }
        }

        Self { time, elevators: cars, hall_call_up, hall_call_down }
    }
}

/// Admissible target commands per car: `[0]` (no-op only) for a full car,
/// otherwise `[0, 1, ..., floors]`.
pub fn valid_actions(elevators: &[Elevator], floors: u32) -> Vec<Vec<u32>> {
    elevators
        .iter()
        .map(|e| if e.is_full() { vec![0] } else { (0..=floors).collect() })
        .collect()
}

/// One journey finished this second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Completion {
    pub passenger: PassengerId,
    pub wait_secs: u64,
    pub ride_secs: u64,
}

/// Side information returned with every step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepInfo {
    /// Admissible next commands, see [`valid_actions`].
    pub valid_actions:     Vec<Vec<u32>>,
    /// The reward split into its terms.
    pub reward_components: RewardComponents,
    /// Journeys completed this second.
    pub completed:         Vec<Completion>,
    /// Boardings refused this second.
    pub rejected:          u64,
    /// Passengers finalized as unserved this second.
    pub unserved:          u64,
}

/// Result of one `step`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward:      f64,
    /// `true` once the clock has reached the horizon.
    pub terminated:  bool,
    pub info:        StepInfo,
}
