//! Fluent builder for constructing a [`Sim`].

use lift_core::{RewardWeights, SimulationConfig};
use lift_dispatch::Dispatcher;

use crate::state::SimState;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimulationConfig`]: floors, fleet, capacity, dwell, spawn rate, horizon
/// - `D: Dispatcher`: the assignment policy (e.g. [`lift_dispatch::EtaDispatcher`])
///
/// # Optional inputs (override the config)
///
/// | Method                | Default                 |
/// |-----------------------|-------------------------|
/// | `.seed(s)`            | `config.seed`           |
/// | `.reward_weights(w)`  | `config.reward`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimulationConfig::default(), EtaDispatcher)
///     .seed(42)
///     .build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: Dispatcher> {
    config:     SimulationConfig,
    dispatcher: D,
}

impl<D: Dispatcher> SimBuilder<D> {
    pub fn new(config: SimulationConfig, dispatcher: D) -> Self {
        Self { config, dispatcher }
    }

    /// Default seed used by `reset(None)`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Reward coefficients for this run.
    pub fn reward_weights(mut self, weights: RewardWeights) -> Self {
        self.config.reward = weights;
        self
    }

    /// Validate the configuration and return a [`Sim`] in its reset state.
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;
        let state = SimState::new(&self.config, self.config.seed);
        Ok(Sim {
            config:     self.config,
            dispatcher: self.dispatcher,
            state,
        })
    }
}
