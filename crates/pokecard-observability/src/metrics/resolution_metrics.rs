use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use pokecard_core::models::Facet;
use serde::{Deserialize, Serialize};

/// Counters for one facet. Each resolution ends in exactly one of
/// `rejected`, `cache_hits`, `remote_hits` or `empty`.
#[derive(Debug, Default)]
struct FacetCounters {
    rejected: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    remote_hits: AtomicU64,
    empty: AtomicU64,
}

impl FacetCounters {
    fn snapshot(&self) -> FacetSnapshot {
        FacetSnapshot {
            rejected: self.rejected.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            remote_hits: self.remote_hits.load(Ordering::Relaxed),
            empty: self.empty.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of one facet's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSnapshot {
    pub rejected: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub remote_hits: u64,
    pub empty: u64,
}

impl FacetSnapshot {
    /// Resolutions that reached a terminal state.
    pub fn total(&self) -> u64 {
        self.rejected + self.cache_hits + self.remote_hits + self.empty
    }
}

/// Point-in-time view of all facets, keyed by facet name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub facets: BTreeMap<String, FacetSnapshot>,
}

/// Per-facet outcome counters of the resolution ladder.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    facets: [FacetCounters; Facet::ALL.len()],
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn counters(&self, facet: Facet) -> &FacetCounters {
        &self.facets[facet.index()]
    }

    pub fn record_rejected(&self, facet: Facet) {
        self.counters(facet).rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self, facet: Facet) {
        self.counters(facet).cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self, facet: Facet) {
        self.counters(facet).cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remote_hit(&self, facet: Facet) {
        self.counters(facet).remote_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty(&self, facet: Facet) {
        self.counters(facet).empty.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of a single facet.
    pub fn facet(&self, facet: Facet) -> FacetSnapshot {
        self.counters(facet).snapshot()
    }

    /// Snapshot of every facet.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            facets: Facet::ALL
                .iter()
                .map(|f| (f.as_str().to_string(), self.counters(*f).snapshot()))
                .collect(),
        }
    }
}
