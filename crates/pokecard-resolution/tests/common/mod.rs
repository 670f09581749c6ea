#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use pokecard_core::config::CacheConfig;
use pokecard_observability::ResolutionMetrics;
use pokecard_resolution::{ResolutionEngine, Resolver};
use pokecard_storage::{CacheStore, NameIndexCache};
use test_fixtures::FakeCatalog;

/// A cache tree in a temp dir, a fixture-backed catalog and shared metrics.
pub struct Harness {
    pub dir: TempDir,
    pub cache: Arc<CacheStore>,
    pub names: Arc<NameIndexCache>,
    pub catalog: Arc<FakeCatalog>,
    pub metrics: Arc<ResolutionMetrics>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_catalog(FakeCatalog::from_fixtures())
    }

    pub fn with_catalog(catalog: FakeCatalog) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = CacheConfig {
            static_root: dir.path().display().to_string(),
            ..CacheConfig::default()
        };
        let cache = Arc::new(CacheStore::open(&config).unwrap());
        let names = Arc::new(NameIndexCache::new(config.name_index_path()));
        Self {
            dir,
            cache,
            names,
            catalog: Arc::new(catalog),
            metrics: Arc::new(ResolutionMetrics::new()),
        }
    }

    pub fn engine(&self) -> ResolutionEngine {
        ResolutionEngine::new(
            self.cache.clone(),
            self.catalog.clone(),
            self.names.clone(),
            self.metrics.clone(),
        )
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::with_metrics(
            self.cache.clone(),
            self.catalog.clone(),
            self.names.clone(),
            self.metrics.clone(),
        )
    }
}
