//! Greedy nearest-car policy.

use lift_core::ElevatorId;
use lift_fleet::Elevator;

use crate::{DispatchContext, Dispatcher};

/// Assigns each pending passenger to the non-full car whose current floor
/// is closest to the passenger's origin.
///
/// Floor distance stands in for estimated time of arrival: queue contents
/// and travel direction are ignored.  Equal distances go to the lowest
/// `ElevatorId`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EtaDispatcher;

impl EtaDispatcher {
    /// The car this policy would pick for a pickup at `origin`, or `None`
    /// if every car is full.
    pub fn nearest_available(elevators: &[Elevator], origin: u32) -> Option<ElevatorId> {
        elevators
            .iter()
            .filter(|e| !e.is_full())
            .min_by_key(|e| (e.current_floor.abs_diff(origin), e.id))
            .map(|e| e.id)
    }
}

impl Dispatcher for EtaDispatcher {
    fn assign(&self, ctx: &mut DispatchContext<'_>) {
        for &id in ctx.pending() {
            let Some(origin) = ctx.passenger(id).map(|p| p.origin_floor) else {
                continue;
            };
            match Self::nearest_available(ctx.elevators(), origin) {
                Some(car) => {
                    ctx.assign(id, car);
                }
                None => {
                    log::trace!("{id} left unassigned at {}: every car is full", ctx.now());
                }
            }
        }
    }
}
