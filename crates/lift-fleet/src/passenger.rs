//! Passenger lifecycle record.

use lift_core::{ElevatorId, PassengerId, Tick};

use crate::Direction;

/// One rider, from appearance to arrival.
///
/// Passengers are never removed during a run: completed and stranded riders
/// stay in the registry so metrics and horizon finalization can see them.
///
/// # Lifecycle
///
/// ```text
/// spawned ──assign──▶ assigned ──board──▶ riding ──alight──▶ arrived
///    ▲                   │
///    └───rejected────────┘  (full car: assignment cleared, wait clock keeps running)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:                PassengerId,
    pub appear_time:       Tick,
    pub origin_floor:      u32,
    pub dest_floor:        u32,
    assigned_elevator:     Option<ElevatorId>,
    board_time:            Option<Tick>,
    arrive_time:           Option<Tick>,
}

impl Passenger {
    /// A freshly appeared, unassigned passenger.
    ///
    /// Callers guarantee `origin_floor != dest_floor`; the registry checks it.
    pub fn new(id: PassengerId, appear_time: Tick, origin_floor: u32, dest_floor: u32) -> Self {
        debug_assert_ne!(origin_floor, dest_floor);
        Self {
            id,
            appear_time,
            origin_floor,
            dest_floor,
            assigned_elevator: None,
            board_time:        None,
            arrive_time:       None,
        }
    }

    #[inline]
    pub fn assigned_elevator(&self) -> Option<ElevatorId> {
        self.assigned_elevator
    }

    #[inline]
    pub fn board_time(&self) -> Option<Tick> {
        self.board_time
    }

    #[inline]
    pub fn arrive_time(&self) -> Option<Tick> {
        self.arrive_time
    }

    /// Seconds from appearance to boarding; `None` until boarded.
    pub fn waiting_time(&self) -> Option<u64> {
        self.board_time.map(|b| b.since(self.appear_time))
    }

    /// Seconds from boarding to arrival; `None` until arrived.
    pub fn ride_time(&self) -> Option<u64> {
        match (self.board_time, self.arrive_time) {
            (Some(b), Some(a)) => Some(a.since(b)),
            _ => None,
        }
    }

    /// Hall-call direction of this trip.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.origin_floor, self.dest_floor)
    }

    /// Still on a floor, boarded by nobody.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.board_time.is_none()
    }

    #[inline]
    pub fn is_unassigned(&self) -> bool {
        self.assigned_elevator.is_none()
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.arrive_time.is_some()
    }

    /// Waiting at `floor` for car `elevator` specifically.
    #[inline]
    pub fn awaits(&self, elevator: ElevatorId, floor: u32) -> bool {
        self.assigned_elevator == Some(elevator) && self.is_waiting() && self.origin_floor == floor
    }

    /// Record the dispatcher's choice.
    #[inline]
    pub fn assign(&mut self, elevator: ElevatorId) {
        self.assigned_elevator = Some(elevator);
    }

    /// Return to the unassigned pool after a full car refused boarding.
    ///
    /// Only valid before boarding; `appear_time` is kept, so the wait clock
    /// keeps running across redispatch.
    pub fn reject(&mut self) {
        debug_assert!(self.board_time.is_none(), "boarded passenger rejected");
        self.assigned_elevator = None;
    }

    /// Set `board_time`.  Set exactly once.
    pub fn mark_boarded(&mut self, now: Tick) {
        debug_assert!(self.board_time.is_none(), "passenger {} boarded twice", self.id);
        self.board_time = Some(now);
    }

    /// Set `arrive_time`.  Set exactly once, after boarding.
    pub fn mark_arrived(&mut self, now: Tick) {
        debug_assert!(self.board_time.is_some(), "passenger {} arrived unboarded", self.id);
        debug_assert!(self.arrive_time.is_none(), "passenger {} arrived twice", self.id);
        self.arrive_time = Some(now);
    }
}
