use crate::errors::PokecardResult;
use crate::models::{ApiGeneration, ApiPokemon, ApiSpecies};

/// Authoritative remote catalog.
///
/// Every call is a single attempt. Any error is terminal for the facet that
/// issued it.
pub trait ICatalogSource: Send + Sync {
    /// Base stats of a pokemon.
    fn fetch_pokemon(&self, pokemon_id: u32) -> PokecardResult<ApiPokemon>;

    /// Species record by id (`"132"`) or by name (`"ditto"`).
    fn fetch_species(&self, id_or_name: &str) -> PokecardResult<ApiSpecies>;

    /// Generation with its species roster.
    fn fetch_generation(&self, generation_id: u32) -> PokecardResult<ApiGeneration>;

    /// Front sprite image bytes.
    fn fetch_sprite(&self, pokemon_id: u32) -> PokecardResult<Vec<u8>>;

    /// Human-readable source name.
    fn name(&self) -> &str;
}
