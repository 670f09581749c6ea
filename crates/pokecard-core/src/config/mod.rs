//! Configuration system for pokecard.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod cache_config;
pub mod catalog_config;
pub mod defaults;
pub mod observability_config;
pub mod pokecard_config;

pub use cache_config::CacheConfig;
pub use catalog_config::CatalogConfig;
pub use observability_config::ObservabilityConfig;
pub use pokecard_config::PokecardConfig;
