//! Resolution metrics.
//!
//! [`ResolutionMetrics`] is shared as `Arc<ResolutionMetrics>` between the
//! engine and whoever wants to read it. Counters are atomics, so recording
//! never takes a lock.

pub mod resolution_metrics;

pub use resolution_metrics::{FacetSnapshot, MetricsSnapshot, ResolutionMetrics};
