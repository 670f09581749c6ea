//! Catalog that is never reachable.

use pokecard_core::errors::{CatalogError, PokecardError, PokecardResult};
use pokecard_core::models::{ApiGeneration, ApiPokemon, ApiSpecies};
use pokecard_core::traits::ICatalogSource;

#[derive(Debug, Default)]
pub struct OfflineCatalog;

impl OfflineCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn unavailable(what: String) -> PokecardError {
    CatalogError::Unavailable {
        reason: format!("offline mode, cannot fetch {what}"),
    }
    .into()
}

impl ICatalogSource for OfflineCatalog {
    fn fetch_pokemon(&self, pokemon_id: u32) -> PokecardResult<ApiPokemon> {
        Err(unavailable(format!("pokemon/{pokemon_id}")))
    }

    fn fetch_species(&self, id_or_name: &str) -> PokecardResult<ApiSpecies> {
        Err(unavailable(format!("pokemon-species/{id_or_name}")))
    }

    fn fetch_generation(&self, generation_id: u32) -> PokecardResult<ApiGeneration> {
        Err(unavailable(format!("generation/{generation_id}")))
    }

    fn fetch_sprite(&self, pokemon_id: u32) -> PokecardResult<Vec<u8>> {
        Err(unavailable(format!("sprite/{pokemon_id}")))
    }

    fn name(&self) -> &str {
        "offline"
    }
}
