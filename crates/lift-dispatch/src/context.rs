//! State handed to a dispatcher for one dispatch phase.

use lift_core::{ElevatorId, PassengerId, Tick};
use lift_fleet::{Elevator, Passenger, PassengerRegistry};

/// Scoped access to the engine's passengers and fleet during one call to
/// [`Dispatcher::assign`][crate::Dispatcher::assign].
///
/// Reads are unrestricted.  The only write is [`assign`][Self::assign].
/// The borrows end when the call returns, so a policy cannot hold on to
/// engine state between seconds.
pub struct DispatchContext<'a> {
    now:        Tick,
    pending:    &'a [PassengerId],
    passengers: &'a mut PassengerRegistry,
    elevators:  &'a mut [Elevator],
}

impl<'a> DispatchContext<'a> {
    /// Build the context for one dispatch phase.
    ///
    /// `pending` lists the passengers without a car, in id order.
    /// `elevators` must be in id order (`elevators[i].id == ElevatorId(i)`).
    pub fn new(
        now:        Tick,
        pending:    &'a [PassengerId],
        passengers: &'a mut PassengerRegistry,
        elevators:  &'a mut [Elevator],
    ) -> Self {
        debug_assert!(elevators.iter().enumerate().all(|(i, e)| e.id.index() == i));
        Self { now, pending, passengers, elevators }
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Passengers to place this second, in id order.
    #[inline]
    pub fn pending(&self) -> &'a [PassengerId] {
        self.pending
    }

    #[inline]
    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id)
    }

    /// The fleet, in id order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        self.elevators
    }

    /// Assign `passenger` to car `elevator` and queue a pickup at the
    /// passenger's origin floor.
    ///
    /// Returns `false` and changes nothing if the passenger is unknown or
    /// already assigned, or if the car is unknown or full.
    pub fn assign(&mut self, passenger: PassengerId, elevator: ElevatorId) -> bool {
        let Some(car) = self.elevators.get_mut(elevator.index()) else {
            return false;
        };
        let Some(p) = self.passengers.get_mut(passenger) else {
            return false;
        };
        if !p.is_unassigned() || car.is_full() {
            return false;
        }
        p.assign(elevator);
        car.enqueue_stop(p.origin_floor, false);
        log::trace!("{} assigned to {} (pickup floor {})", passenger, elevator, p.origin_floor);
        true
    }
}
