//! # pokecard-core
//!
//! Foundation crate for the pokecard catalog resolver.
//! Defines the domain entities, the collaborator traits the resolution engine
//! consumes, the error taxonomy, configuration, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PokecardConfig;
pub use errors::{PokecardError, PokecardResult};
pub use models::{
    Category, Facet, GenerationEntity, GenerationId, PokemonEntity, PokemonId, PokemonStats,
    Rarity, RawId, RosterEntry, SpeciesProfile, Stat,
};
