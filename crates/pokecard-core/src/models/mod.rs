//! Data model: entities, identifiers, facet results and catalog payloads.

pub mod catalog_payload;
pub mod category;
pub mod facets;
pub mod generation;
pub mod ids;
pub mod pokemon;
pub mod rarity;

pub use catalog_payload::{
    id_from_url, ApiGeneration, ApiNamedResource, ApiPokemon, ApiPokemonStat, ApiSpecies,
    ApiStatRef,
};
pub use category::Category;
pub use facets::{Facet, PokemonStats, SpeciesProfile};
pub use generation::{GenerationEntity, RosterEntry};
pub use ids::{GenerationId, PokemonId, RawId};
pub use pokemon::{PokemonEntity, Stat};
pub use rarity::Rarity;
