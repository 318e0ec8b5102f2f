//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PassengerId`, `ElevatorId`                           |
//! | [`time`]        | `Tick` (one simulated second)                         |
//! | [`rng`]         | `SimRng` (the single engine-owned generator)          |
//! | [`config`]      | `SimulationConfig`, `RewardWeights`                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RewardWeights, SimulationConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use time::Tick;
