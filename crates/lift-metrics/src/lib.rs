//! `lift-metrics`: running service-quality aggregates.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`collector`] | `MetricsCollector`: append-only samples and counters |
//! | [`summary`]   | `MetricsSummary`, `mean`, `nearest_rank`              |

pub mod collector;
pub mod summary;


pub use collector::MetricsCollector;
pub use summary::{MetricsSummary, mean, nearest_rank};
