//! Run configuration.
//!
//! `SimulationConfig` is immutable for the duration of a run: the engine reads
//! it at construction and on every `reset`, and never writes it.

use crate::{CoreError, CoreResult};

// ── RewardWeights ─────────────────────────────────────────────────────────────

/// Coefficients of the per-second reward signal.
///
/// ```text
/// reward = - waiting_penalty    * passengers_not_yet_boarded
///          - rejection_penalty  * new_rejections
///          - unserved_penalty   * newly_finalized_unserved
///          + Σ_completed ( completion_reward
///                          - wait_penalty * wait_secs
///                          - ride_penalty * ride_secs )
/// ```
///
/// The defaults are the reference weights; override them for reward-shaping
/// experiments without touching the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardWeights {
    /// Per passenger still waiting to board, per second.
    pub waiting_penalty:   f64,
    /// Per boarding refused by a full car.
    pub rejection_penalty: f64,
    /// Per passenger finalized as unserved at the horizon.
    pub unserved_penalty:  f64,
    /// Fixed reward per completed journey.
    pub completion_reward: f64,
    /// Per second of the completed passenger's wait.
    pub wait_penalty:      f64,
    /// Per second of the completed passenger's ride.
    pub ride_penalty:      f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            waiting_penalty:   0.015,
            rejection_penalty: 2.0,
            unserved_penalty:  20.0,
            completion_reward: 9.0,
            wait_penalty:      0.005,
            ride_penalty:      0.002,
        }
    }
}

impl RewardWeights {
    fn validate(&self) -> CoreResult<()> {
        let all = [
            ("waiting_penalty",   self.waiting_penalty),
            ("rejection_penalty", self.rejection_penalty),
            ("unserved_penalty",  self.unserved_penalty),
            ("completion_reward", self.completion_reward),
            ("wait_penalty",      self.wait_penalty),
            ("ride_penalty",      self.ride_penalty),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(CoreError::Config(format!("reward weight {name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

// ── SimulationConfig ──────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Floors are numbered `1..=floors`; cars are numbered `0..elevators`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of floors served.  Must be at least 2.
    pub floors: u32,

    /// Number of cars in the fleet.  Must be at least 1.
    pub elevators: u32,

    /// Maximum onboard passengers per car.  Must be at least 1.
    pub capacity: u32,

    /// Seconds a car stays at a stop with its doors open.  Zero still costs
    /// the one second in which the doors close.
    pub dwell_secs: u32,

    /// Probability that one passenger appears in a given second, in [0, 1].
    pub spawn_prob: f64,

    /// Simulated duration.  The run terminates once the clock reaches it.
    pub horizon_secs: u64,

    /// Default RNG seed used by `reset` when no explicit seed is passed.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Reward coefficients.
    pub reward: RewardWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            floors:       18,
            elevators:    2,
            capacity:     12,
            dwell_secs:   5,
            spawn_prob:   0.05,
            horizon_secs: 3600,
            seed:         None,
            reward:       RewardWeights::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors < 2 {
            return Err(CoreError::Config(format!("floors must be >= 2, got {}", self.floors)));
        }
        if self.elevators < 1 {
            return Err(CoreError::Config("elevators must be >= 1, got 0".into()));
        }
        if self.capacity < 1 {
            return Err(CoreError::Config("capacity must be >= 1, got 0".into()));
        }
        if !(0.0..=1.0).contains(&self.spawn_prob) {
            return Err(CoreError::Config(format!(
                "spawn_prob must be within [0, 1], got {}",
                self.spawn_prob
            )));
        }
        if self.horizon_secs < 1 {
            return Err(CoreError::Config("horizon_secs must be >= 1, got 0".into()));
        }
        self.reward.validate()
    }

    /// The tick at which the run terminates.
    #[inline]
    pub fn horizon(&self) -> crate::Tick {
        crate::Tick(self.horizon_secs)
    }

    /// `true` if `floor` is a servable floor number.
    #[inline]
    pub fn floor_in_range(&self, floor: u32) -> bool {
        (1..=self.floors).contains(&floor)
    }
}
