//! Per-second reward accounting.

use lift_core::RewardWeights;

use crate::observation::Completion;

/// The reward of one second, term by term.  Penalty terms are negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardComponents {
    /// Backlog of passengers not yet boarded.
    pub waiting:    f64,
    /// Boardings refused this second.
    pub rejection:  f64,
    /// Passengers newly finalized as unserved.
    pub unserved:   f64,
    /// Journeys completed this second, net of their wait and ride penalties.
    pub completion: f64,
}

impl RewardComponents {
    pub fn compute(
        weights:     &RewardWeights,
        waiting:     usize,
        rejected:    u64,
        unserved:    u64,
        completions: &[Completion],
    ) -> Self {
        let completion = completions.iter().fold(0.0, |acc, c| {
            acc + weights.completion_reward
                - weights.wait_penalty * c.wait_secs as f64
                - weights.ride_penalty * c.ride_secs as f64
        });
        Self {
            waiting:   -weights.waiting_penalty * waiting as f64,
            rejection: -weights.rejection_penalty * rejected as f64,
            unserved:  -weights.unserved_penalty * unserved as f64,
            completion,
        }
    }

    /// Scalar reward.
    pub fn total(&self) -> f64 {
        self.waiting + self.rejection + self.unserved + self.completion
    }
}
