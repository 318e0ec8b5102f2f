//! One elevator car: position, doors, motion phase, stop queue, and load.

use std::collections::VecDeque;

use lift_core::{ElevatorId, PassengerId};

use crate::{Direction, DoorState, FleetError, FleetResult, MoveState};

/// An elevator car.
///
/// The stop queue and onboard set are private so the two car invariants
/// hold by construction:
///
/// - `passengers().len() <= capacity`
/// - `target_queue()` holds each floor at most once (FIFO commitment order)
///
/// While `move_state == Dwell` the floor never changes: `move_toward` is only
/// reached by the engine when the car is not dwelling, and it debug-asserts so.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id:              ElevatorId,
    pub capacity:        u32,
    pub current_floor:   u32,
    pub direction:       Direction,
    pub door_state:      DoorState,
    pub move_state:      MoveState,
    target_queue:        VecDeque<u32>,
    passengers:          Vec<PassengerId>,
    dwell_remaining:     u32,
}

impl Elevator {
    /// An idle car at floor 1 with closed doors and an empty queue.
    pub fn new(id: ElevatorId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            current_floor:   1,
            direction:       Direction::Idle,
            door_state:      DoorState::Closed,
            move_state:      MoveState::Idle,
            target_queue:    VecDeque::new(),
            passengers:      Vec::new(),
            dwell_remaining: 0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity as usize
    }

    #[inline]
    pub fn load(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn passengers(&self) -> &[PassengerId] {
        &self.passengers
    }

    #[inline]
    pub fn target_queue(&self) -> &VecDeque<u32> {
        &self.target_queue
    }

    #[inline]
    pub fn next_stop(&self) -> Option<u32> {
        self.target_queue.front().copied()
    }

    #[inline]
    pub fn dwell_remaining(&self) -> u32 {
        self.dwell_remaining
    }

    // ── Stop queue ────────────────────────────────────────────────────────

    /// Append `floor` to the stop queue unless it is already queued.
    ///
    /// A full car silently drops the request unless `force` is set.  Use
    /// `force` only for onboard passengers' destinations: a destination stop
    /// is never refused, only new pickups are.
    ///
    /// Returns `true` if the floor was appended.
    pub fn enqueue_stop(&mut self, floor: u32, force: bool) -> bool {
        if self.is_full() && !force {
            return false;
        }
        if self.target_queue.contains(&floor) {
            return false;
        }
        self.target_queue.push_back(floor);
        true
    }

    /// Remove and return the head of the stop queue.
    pub fn pop_stop(&mut self) -> Option<u32> {
        self.target_queue.pop_front()
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Open the doors and start a dwell of `secs` seconds.
    pub fn begin_dwell(&mut self, secs: u32) {
        self.move_state = MoveState::Dwell;
        self.door_state = DoorState::Open;
        self.dwell_remaining = secs;
    }

    /// Count down one second of dwell.  When it reaches zero the doors close
    /// and the car goes idle.
    ///
    /// Returns `true` if the dwell ended this second.
    pub fn tick_dwell(&mut self) -> bool {
        debug_assert_eq!(self.move_state, MoveState::Dwell);
        self.dwell_remaining = self.dwell_remaining.saturating_sub(1);
        if self.dwell_remaining == 0 {
            self.move_state = MoveState::Idle;
            self.door_state = DoorState::Closed;
            true
        } else {
            false
        }
    }

    /// Travel exactly one floor toward `target`.  No-op if already there.
    pub fn move_toward(&mut self, target: u32) {
        debug_assert_ne!(self.move_state, MoveState::Dwell, "car {} moved while dwelling", self.id);
        self.direction = Direction::between(self.current_floor, target);
        match self.direction {
            Direction::Up   => self.current_floor += 1,
            Direction::Down => self.current_floor -= 1,
            Direction::Idle => return,
        }
        self.move_state = MoveState::Moving;
    }

    /// Nothing queued: stop, keep doors closed.
    pub fn settle_idle(&mut self) {
        self.direction = Direction::Idle;
        self.move_state = MoveState::Idle;
    }

    // ── Load ──────────────────────────────────────────────────────────────

    /// Take `passenger` on board.
    ///
    /// # Errors
    ///
    /// `CarFull` if the car is at capacity; nothing changes.
    pub fn board(&mut self, passenger: PassengerId) -> FleetResult<()> {
        if self.is_full() {
            return Err(FleetError::CarFull(self.id));
        }
        self.passengers.push(passenger);
        Ok(())
    }

    /// Let `passenger` off.  Returns `false` if they were not on board.
    pub fn alight(&mut self, passenger: PassengerId) -> bool {
        match self.passengers.iter().position(|&p| p == passenger) {
            Some(i) => {
                self.passengers.remove(i);
                true
            }
            None => false,
        }
    }
}
