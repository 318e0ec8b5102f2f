//! `lift-fleet`: passengers and elevator cars.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`state`]     | `Direction`, `DoorState`, `MoveState`: closed state enums      |
//! | [`passenger`] | `Passenger`: one rider's lifecycle record                      |
//! | [`registry`]  | `PassengerRegistry`: every passenger of the run, by id         |
//! | [`elevator`]  | `Elevator`: one car's motion/door state machine and stop queue |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                                  |
//!
//! # Car state machine
//!
//! ```text
//!            queue head != current floor
//!   Idle ───────────────────────────────▶ Moving ──┐ one floor per second
//!    ▲                                      │  ◀───┘
//!    │ dwell_remaining == 0                 │ current floor == queue head
//!    │ (doors close)                        ▼
//!    └────────────────────────────────── Dwell (doors open)
//! ```
//!
//! The engine in `lift-sim` drives the transitions; this crate only guarantees
//! the per-car invariants (load never exceeds capacity, no duplicate stops,
//! no travel while dwelling).

pub mod elevator;
pub mod error;
pub mod passenger;
pub mod registry;
pub mod state;


pub use elevator::Elevator;
pub use error::{FleetError, FleetResult};
pub use passenger::Passenger;
pub use registry::PassengerRegistry;
pub use state::{Direction, DoorState, MoveState};
