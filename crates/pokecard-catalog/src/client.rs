//! PokeAPI v2 catalog client.

use pokecard_core::config::CatalogConfig;
use pokecard_core::errors::PokecardResult;
use pokecard_core::models::{ApiGeneration, ApiPokemon, ApiSpecies, Category};
use pokecard_core::traits::ICatalogSource;

use crate::transport::{CatalogHttpClient, HttpClientConfig};

pub struct PokeApiClient {
    base_url: String,
    sprite_base_url: String,
    http: CatalogHttpClient,
}

impl PokeApiClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sprite_base_url: config.sprite_base_url.trim_end_matches('/').to_string(),
            http: CatalogHttpClient::new(HttpClientConfig::from(config)),
        }
    }

    /// `{base_url}/{category}/{key}/`
    pub fn resource_url(&self, category: Category, key: &str) -> String {
        format!("{}/{}/{}/", self.base_url, category.as_str(), key)
    }

    pub fn sprite_url(&self, pokemon_id: u32) -> String {
        format!("{}/{pokemon_id}.png", self.sprite_base_url)
    }
}

impl ICatalogSource for PokeApiClient {
    fn fetch_pokemon(&self, pokemon_id: u32) -> PokecardResult<ApiPokemon> {
        self.http
            .get_json(&self.resource_url(Category::Pokemon, &pokemon_id.to_string()))
    }

    fn fetch_species(&self, id_or_name: &str) -> PokecardResult<ApiSpecies> {
        self.http
            .get_json(&self.resource_url(Category::PokemonSpecies, id_or_name))
    }

    fn fetch_generation(&self, generation_id: u32) -> PokecardResult<ApiGeneration> {
        self.http
            .get_json(&self.resource_url(Category::Generation, &generation_id.to_string()))
    }

    fn fetch_sprite(&self, pokemon_id: u32) -> PokecardResult<Vec<u8>> {
        self.http.get_bytes(&self.sprite_url(pokemon_id))
    }

    fn name(&self) -> &str {
        "pokeapi"
    }
}
