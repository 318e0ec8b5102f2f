//! `lift-dispatch`: the dispatcher trait and reference policies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`context`] | `DispatchContext<'a>`: the only door into fleet state for a policy |
//! | [`model`]   | `Dispatcher` trait                                                |
//! | [`eta`]     | `EtaDispatcher`: nearest non-full car by floor distance           |
//! | [`noop`]    | `NoopDispatcher`: never assigns                                  |
//!
//! # Contract
//!
//! Once per simulated second, after spawning, the engine gathers every
//! passenger without an assigned car and calls [`Dispatcher::assign`].  A
//! policy may read anything in the context but can only change two things:
//! a pending passenger's assigned car and (through the same call) a
//! capacity-checked pickup stop on that car.  Passengers left unassigned are
//! offered again next second.

pub mod context;
pub mod eta;
pub mod model;
pub mod noop;


pub use context::DispatchContext;
pub use eta::EtaDispatcher;
pub use model::Dispatcher;
pub use noop::NoopDispatcher;
