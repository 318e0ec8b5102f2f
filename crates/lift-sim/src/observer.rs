//! Observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_metrics::MetricsSummary;

use crate::StepOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: reward tracker
///
/// ```rust,ignore
/// struct RewardSum(f64);
///
/// impl SimObserver for RewardSum {
///     fn on_step_end(&mut self, _tick: Tick, outcome: &StepOutcome) {
///         self.0 += outcome.reward;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each step, with the clock value the step starts from.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each step with its outcome.  `tick` is the clock value
    /// the step started from.
    fn on_step_end(&mut self, _tick: Tick, _outcome: &StepOutcome) {}

    /// Called once, on the step that finalizes the horizon.
    fn on_horizon(&mut self, _tick: Tick, _unserved: u64) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &MetricsSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
