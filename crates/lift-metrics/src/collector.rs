//! The `MetricsCollector`.

use crate::summary::{MetricsSummary, mean, nearest_rank};

/// Append-only record of how the run has served its passengers.
///
/// Owned by the engine and replaced wholesale on `reset`.  Samples are kept
/// in completion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsCollector {
    wait_times: Vec<u64>,
    ride_times: Vec<u64>,
    completed:  u64,
    rejected:   u64,
    unserved:   u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// One passenger reached their destination.
    pub fn record_completion(&mut self, wait_secs: u64, ride_secs: u64) {
        self.wait_times.push(wait_secs);
        self.ride_times.push(ride_secs);
        self.completed += 1;
    }

    /// A full car refused one boarding.
    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    /// `count` passengers were still unresolved at the horizon.
    pub fn record_unserved(&mut self, count: u64) {
        self.unserved += count;
    }

    #[inline]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    #[inline]
    pub fn unserved(&self) -> u64 {
        self.unserved
    }

    #[inline]
    pub fn wait_times(&self) -> &[u64] {
        &self.wait_times
    }

    #[inline]
    pub fn ride_times(&self) -> &[u64] {
        &self.ride_times
    }

    /// Aggregate view; a pure read.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            completed: self.completed,
            rejected:  self.rejected,
            unserved:  self.unserved,
            avg_wait:  mean(&self.wait_times),
            p95_wait:  nearest_rank(&self.wait_times, 0.95),
            avg_ride:  mean(&self.ride_times),
        }
    }
}
