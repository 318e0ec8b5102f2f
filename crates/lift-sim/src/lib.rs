//! `lift-sim`: the per-second elevator simulation engine.
//!
//! # Step
//!
//! ```text
//! step(actions?):
//!   ① Spawn    : with probability spawn_prob, one passenger appears
//!                (uniform origin, uniform distinct destination).
//!   ② Dispatch : unassigned passengers go to the Dispatcher, which assigns
//!                cars and queues capacity-checked pickups.
//!   ③ Commands : per-car target floors from the caller (0 = none).
//!   ④ Motion   : per car in id order: dwell countdown | go idle |
//!                serve stop (alight, then board) + begin dwell | move 1 floor.
//!   ⑤ Clock    : time += 1 s.
//!   ⑥ Horizon  : once: unresolved passengers counted as unserved.
//!   ⑦ Reward   : backlog, rejection, unserved, and completion terms.
//! ```
//!
//! Rejected boarders (full car) lose their assignment and re-enter ② on the
//! next second; there is no other retry.
//!
//! # Determinism
//!
//! The only randomness is the engine's `SimRng`, reseeded on `reset`.  Equal
//! seeds and equal per-second commands give identical observations,
//! rewards, and metrics.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                           |
//! |---------|------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on observations, outcomes, summaries.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimulationConfig;
//! use lift_dispatch::EtaDispatcher;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimulationConfig::default(), EtaDispatcher)
//!     .seed(42)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observation;
pub mod observer;
pub mod reward;
pub mod sim;

mod phases;
mod state;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observation::{Completion, ElevatorObservation, Observation, StepInfo, StepOutcome, valid_actions};
pub use observer::{NoopObserver, SimObserver};
pub use reward::RewardComponents;
pub use sim::Sim;
