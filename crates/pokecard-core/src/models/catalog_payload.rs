//! Remote catalog payloads, typed after the PokeAPI v2 resources.
//!
//! Only the fields the engine reads are modeled; unknown fields are ignored on
//! decode. The same structs are serialized into the local cache on write-through.

use serde::{Deserialize, Serialize};

/// `{ "name": ..., "url": ... }` reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
    pub url: String,
}

impl ApiNamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id from the trailing path segment, `.../pokemon-species/132/` -> 132.
    pub fn id_from_url(&self) -> Option<u32> {
        id_from_url(&self.url)
    }
}

/// Parse the id out of a catalog resource URL. Tolerates a missing trailing slash.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Stat name reference inside a pokemon payload.
pub type ApiStatRef = ApiNamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiPokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: ApiStatRef,
}

/// `GET /pokemon/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub stats: Vec<ApiPokemonStat>,
}

/// `GET /pokemon-species/{id or name}/`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiSpecies {
    pub id: u32,
    pub name: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub generation: ApiNamedResource,
}

/// `GET /generation/{id}/`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiGeneration {
    pub id: u32,
    pub name: String,
    pub pokemon_species: Vec<ApiNamedResource>,
}
