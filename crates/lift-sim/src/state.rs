//! The owned aggregate of all mutable simulation state.

use lift_core::{ElevatorId, SimRng, SimulationConfig, Tick};
use lift_fleet::{Elevator, PassengerRegistry};
use lift_metrics::MetricsCollector;

/// Everything a run mutates, in one place.
///
/// Each phase of a step takes `&mut SimState` (or a split borrow of its
/// fields); nothing lives in globals, so independent engines never share
/// state.  `reset` replaces the whole aggregate.
pub(crate) struct SimState {
    /// Seconds since reset.
    pub time:       Tick,
    pub passengers: PassengerRegistry,
    /// In id order: `elevators[i].id == ElevatorId(i)`.
    pub elevators:  Vec<Elevator>,
    /// The run's only source of randomness.
    pub rng:        SimRng,
    pub metrics:    MetricsCollector,
    /// Set once the horizon's unserved passengers have been counted.
    pub finalized:  bool,
}

impl SimState {
    /// Fresh state: clock at zero, no passengers, every car idle at floor 1.
    pub fn new(config: &SimulationConfig, seed: Option<u64>) -> Self {
        let elevators = (0..config.elevators)
            .map(|i| Elevator::new(ElevatorId(i), config.capacity))
            .collect();
        Self {
            time:       Tick::ZERO,
            passengers: PassengerRegistry::new(),
            elevators,
            rng:        SimRng::from_optional_seed(seed),
            metrics:    MetricsCollector::new(),
            finalized:  false,
        }
    }
}
