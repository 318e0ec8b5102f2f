//! Summary statistics.

/// Snapshot of a run's service quality.
///
/// Time statistics are `None` when no passenger has completed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSummary {
    pub completed: u64,
    pub rejected:  u64,
    pub unserved:  u64,
    pub avg_wait:  Option<f64>,
    pub p95_wait:  Option<f64>,
    pub avg_ride:  Option<f64>,
}

/// Arithmetic mean; `None` on an empty sample.
pub fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().sum();
    Some(sum as f64 / values.len() as f64)
}

/// Nearest-rank percentile on the sorted sample: index `floor((n - 1) * q)`.
///
/// `q` is clamped to [0, 1].  `None` on an empty sample.
pub fn nearest_rank(values: &[u64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let idx = ((sorted.len() - 1) as f64 * q.clamp(0.0, 1.0)).floor() as usize;
    Some(sorted[idx] as f64)
}
