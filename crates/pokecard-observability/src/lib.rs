//! # pokecard-observability
//!
//! Tracing setup, span macros and structured events for the resolution
//! ladder, plus lock-free per-facet counters that are injected into the
//! engine rather than held in process-wide state.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{FacetSnapshot, MetricsSnapshot, ResolutionMetrics};
