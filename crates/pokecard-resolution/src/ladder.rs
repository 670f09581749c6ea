//! The two-rung fallback ladder.
//!
//! A facet starts at the cache rung (depth 0) or directly at the remote rung
//! (depth 1). Only a local not-found moves it from the cache to the remote
//! rung. The remote rung is attempted at most once, so a resolution costs at
//! most one local and one remote access.

use std::fmt;

use pokecard_core::constants::MAX_DEPTH;
use pokecard_core::errors::PokecardResult;
use pokecard_core::models::Facet;
use pokecard_observability::tracing_setup::events;
use pokecard_observability::ResolutionMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rung {
    Cache,
    Remote,
}

impl Rung {
    /// Rung for a validated depth; `None` beyond the last rung.
    pub fn from_depth(depth: u64) -> Option<Self> {
        match depth {
            0 => Some(Self::Cache),
            d if d <= MAX_DEPTH => Some(Self::Remote),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Cache => 0,
            Self::Remote => 1,
        }
    }
}

impl fmt::Display for Rung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => f.write_str("cache"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

enum Attempt<T> {
    Resolved(T),
    /// Cache rung only: the key is not cached.
    Miss,
    Terminal,
}

/// One climb of the ladder for one facet and key.
pub(crate) struct Ladder<'a> {
    pub facet: Facet,
    pub key: &'a str,
    pub metrics: &'a ResolutionMetrics,
}

impl Ladder<'_> {
    /// Climb from `start`. `None` means the facet ends empty.
    pub fn climb<T>(
        &self,
        start: Rung,
        from_cache: impl FnOnce() -> PokecardResult<T>,
        from_remote: impl FnOnce() -> PokecardResult<T>,
    ) -> Option<T> {
        if start == Rung::Cache {
            match self.attempt(Rung::Cache, from_cache) {
                Attempt::Resolved(value) => return Some(value),
                Attempt::Terminal => return None,
                Attempt::Miss => {}
            }
        }
        match self.attempt(Rung::Remote, from_remote) {
            Attempt::Resolved(value) => Some(value),
            Attempt::Miss | Attempt::Terminal => None,
        }
    }

    fn attempt<T>(&self, rung: Rung, f: impl FnOnce() -> PokecardResult<T>) -> Attempt<T> {
        match f() {
            Ok(value) => {
                match rung {
                    Rung::Cache => self.metrics.record_cache_hit(self.facet),
                    Rung::Remote => self.metrics.record_remote_hit(self.facet),
                }
                events::resolved(self.facet, self.key, rung.level());
                Attempt::Resolved(value)
            }
            Err(e) if rung == Rung::Cache && e.is_not_found_locally() => {
                self.metrics.record_cache_miss(self.facet);
                events::cache_miss(self.facet, self.key);
                Attempt::Miss
            }
            Err(e) => {
                self.metrics.record_empty(self.facet);
                events::resolution_failed(self.facet, self.key, rung.level(), &e.to_string());
                Attempt::Terminal
            }
        }
    }
}
