//! # pokecard-catalog
//!
//! The remote tier of the resolution ladder. [`PokeApiClient`] talks to the
//! PokeAPI REST catalog; [`OfflineCatalog`] refuses every request and is used
//! when `catalog.offline_mode` is set.

pub mod client;
pub mod offline;
pub mod transport;

pub use client::PokeApiClient;
pub use offline::OfflineCatalog;

use std::sync::Arc;

use pokecard_core::config::CatalogConfig;
use pokecard_core::traits::ICatalogSource;

/// Pick the catalog implementation the config asks for.
pub fn catalog_from_config(config: &CatalogConfig) -> Arc<dyn ICatalogSource> {
    if config.offline_mode {
        tracing::info!("catalog offline mode enabled, remote lookups disabled");
        Arc::new(OfflineCatalog::new())
    } else {
        Arc::new(PokeApiClient::new(config))
    }
}
