//! The `PassengerRegistry`: every passenger of the current run.

use lift_core::{PassengerId, Tick};

use crate::{FleetError, FleetResult, Passenger};

/// Append-only passenger storage indexed by `PassengerId`.
///
/// IDs are handed out sequentially from zero, so `passengers[id.index()]`
/// is always the passenger with that id and iteration order is id order.
#[derive(Debug, Clone, Default)]
pub struct PassengerRegistry {
    passengers: Vec<Passenger>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a passenger appearing at `now` and return its id.
    ///
    /// # Errors
    ///
    /// `FloorOutOfRange` if either floor is outside `1..=floors`;
    /// `SameFloor` if origin equals destination.
    pub fn spawn(&mut self, now: Tick, origin: u32, dest: u32, floors: u32) -> FleetResult<PassengerId> {
        for floor in [origin, dest] {
            if !(1..=floors).contains(&floor) {
                return Err(FleetError::FloorOutOfRange { floor, floors });
            }
        }
        if origin == dest {
            return Err(FleetError::SameFloor(origin));
        }
        let id = PassengerId(self.passengers.len() as u32);
        self.passengers.push(Passenger::new(id, now, origin, dest));
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.get_mut(id.index())
    }

    /// All passengers in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Ids of passengers with no assigned car, in id order.
    pub fn unassigned(&self) -> Vec<PassengerId> {
        self.passengers
            .iter()
            .filter(|p| p.is_unassigned())
            .map(|p| p.id)
            .collect()
    }

    /// Passengers not yet boarded (assigned or not).
    pub fn waiting_count(&self) -> usize {
        self.passengers.iter().filter(|p| p.is_waiting()).count()
    }

    /// Passengers without an `arrive_time`.
    pub fn unresolved_count(&self) -> usize {
        self.passengers.iter().filter(|p| !p.has_arrived()).count()
    }

    pub fn clear(&mut self) {
        self.passengers.clear();
    }
}
