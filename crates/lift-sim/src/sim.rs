//! The `Sim` struct and its per-second step.

use lift_core::{PassengerId, SimulationConfig, Tick};
use lift_dispatch::Dispatcher;
use lift_fleet::{Elevator, PassengerRegistry};
use lift_metrics::{MetricsCollector, MetricsSummary};

use crate::observation::{Observation, StepInfo, StepOutcome, valid_actions};
use crate::phases::{self, StepEvents};
use crate::reward::RewardComponents;
use crate::state::SimState;
use crate::{SimError, SimObserver, SimResult};

/// The simulation engine.
///
/// `Sim<D>` owns the configuration, the dispatch policy, and all mutable
/// state.  Each [`step`][Self::step] advances exactly one simulated second
/// through these phases, each finishing before the next begins:
///
/// 1. **Spawn**: maybe create one passenger.
/// 2. **Dispatch**: offer unassigned passengers to the [`Dispatcher`].
/// 3. **Commands**: queue the caller's per-car target floors, if any.
/// 4. **Motion**: dwell, idle, serve a stop (alight then board), or travel
///    one floor, per car in id order.
/// 5. **Clock**: advance one second.
/// 6. **Horizon**: on reaching it, count unresolved passengers once.
/// 7. **Reward**: score this second's deltas.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  The engine is not
/// internally synchronised; one caller drives it one step at a time.
pub struct Sim<D: Dispatcher> {
    pub(crate) config:     SimulationConfig,
    pub(crate) dispatcher: D,
    pub(crate) state:      SimState,
}

impl<D: Dispatcher> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Start a new run: reseed (with `seed`, else `config.seed`, else OS
    /// entropy), drop all passengers, park every car empty at floor 1, clear
    /// metrics, and rewind the clock to zero.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.state = SimState::new(&self.config, seed.or(self.config.seed));
        self.observe()
    }

    /// Advance one simulated second.
    ///
    /// `actions`, when given, holds one target floor per car (`0` = none).
    /// Once the horizon is reached, further calls do not advance the clock;
    /// they report `terminated` and a reward with no completion or
    /// rejection terms.
    ///
    /// # Errors
    ///
    /// [`SimError::ActionCountMismatch`] if `actions` has the wrong length.
    /// The state is untouched in that case.
    pub fn step(&mut self, actions: Option<&[u32]>) -> SimResult<StepOutcome> {
        if let Some(actions) = actions {
            if actions.len() != self.state.elevators.len() {
                return Err(SimError::ActionCountMismatch {
                    expected: self.state.elevators.len(),
                    got:      actions.len(),
                });
            }
        }

        if self.is_terminated() {
            let unserved = phases::finalize_unserved(&mut self.state);
            return Ok(self.outcome(StepEvents::default(), unserved, true));
        }

        let mut events = StepEvents::default();
        phases::spawn(&mut self.state, &self.config)?;
        phases::dispatch(&mut self.state, &self.dispatcher);
        if let Some(actions) = actions {
            phases::apply_commands(&mut self.state.elevators, &self.config, actions);
        }
        phases::move_elevators(&mut self.state, self.config.dwell_secs, &mut events);

        self.state.time = self.state.time + 1;

        let terminated = self.is_terminated();
        let unserved = if terminated { phases::finalize_unserved(&mut self.state) } else { 0 };
        Ok(self.outcome(events, unserved, terminated))
    }

    /// Step without external commands until the horizon, then return the
    /// final metrics summary.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<MetricsSummary> {
        while !self.is_terminated() {
            self.observed_step(observer)?;
        }
        let summary = self.metrics_summary();
        observer.on_sim_end(self.state.time, &summary);
        Ok(summary)
    }

    /// Step exactly `n` times without external commands (ignores the
    /// horizon; steps past it are no-ops that report `terminated`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Place a passenger by hand at the current time, bypassing the spawn
    /// coin.  It joins the next dispatch phase like any spawned passenger.
    pub fn inject_passenger(&mut self, origin: u32, dest: u32) -> SimResult<PassengerId> {
        let id = self.state.passengers.spawn(self.state.time, origin, dest, self.config.floors)?;
        log::trace!("{} injected {id}: floor {origin} -> {dest}", self.state.time);
        Ok(id)
    }

    /// Completed/rejected counts and wait/ride statistics so far.
    pub fn metrics_summary(&self) -> MetricsSummary {
        self.state.metrics.summary()
    }

    /// Current observation.
    pub fn observe(&self) -> Observation {
        Observation::capture(
            self.state.time,
            &self.state.elevators,
            &self.state.passengers,
            self.config.floors,
        )
    }

    /// Admissible next commands per car.
    pub fn valid_actions(&self) -> Vec<Vec<u32>> {
        valid_actions(&self.state.elevators, self.config.floors)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn time(&self) -> Tick {
        self.state.time
    }

    /// `true` once the clock has reached the horizon.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state.time >= self.config.horizon()
    }

    /// `true` once unresolved passengers have been counted as unserved.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.state.finalized
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// The fleet, in id order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.state.elevators
    }

    #[inline]
    pub fn passengers(&self) -> &PassengerRegistry {
        &self.state.passengers
    }

    #[inline]
    pub fn metrics(&self) -> &MetricsCollector {
        &self.state.metrics
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        let start = self.state.time;
        let was_finalized = self.state.finalized;
        observer.on_step_start(start);
        let outcome = self.step(None)?;
        observer.on_step_end(start, &outcome);
        if !was_finalized && self.state.finalized {
            observer.on_horizon(self.state.time, outcome.info.unserved);
        }
        Ok(outcome)
    }

    fn outcome(&self, events: StepEvents, unserved: u64, terminated: bool) -> StepOutcome {
        let reward_components = RewardComponents::compute(
            &self.config.reward,
            self.state.passengers.waiting_count(),
            events.rejected,
            unserved,
            &events.completed,
        );
        StepOutcome {
            observation: self.observe(),
            reward:      reward_components.total(),
            terminated,
            info: StepInfo {
                valid_actions: self.valid_actions(),
                reward_components,
                completed:     events.completed,
                rejected:      events.rejected,
                unserved,
            },
        }
    }
}
