use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use pokecard_core::errors::{CatalogError, PokecardResult};
use pokecard_core::models::{
    ApiGeneration, ApiNamedResource, ApiPokemon, ApiPokemonStat, ApiSpecies, Category,
};
use pokecard_core::traits::ICatalogSource;

use crate::{fixture_ids, load_fixture};

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Bytes served for every sprite: a PNG signature followed by the id.
pub fn fake_sprite_bytes(pokemon_id: u32) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(&pokemon_id.to_le_bytes());
    bytes
}

/// In-memory remote catalog.
///
/// Seeded from the JSON fixtures. Every roster member without a fixture gets
/// a synthesized pokemon and species record, so any id in a loaded generation
/// resolves. Can be switched unavailable to simulate an unreachable catalog.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    pokemon: HashMap<u32, ApiPokemon>,
    species: HashMap<u32, ApiSpecies>,
    generations: HashMap<u32, ApiGeneration>,
    available: AtomicBool,
    pokemon_calls: AtomicUsize,
    species_calls: AtomicUsize,
    generation_calls: AtomicUsize,
    sprite_calls: AtomicUsize,
}

impl FakeCatalog {
    /// An available catalog with no records.
    pub fn empty() -> Self {
        Self {
            available: AtomicBool::new(true),
            ..Self::default()
        }
    }

    /// An available catalog with every fixture plus synthesized roster members.
    pub fn from_fixtures() -> Self {
        let mut catalog = Self::empty();
        for id in fixture_ids("pokemon") {
            catalog.insert_pokemon(load_fixture(&format!("pokemon/{id}.json")));
        }
        for id in fixture_ids("pokemon-species") {
            catalog.insert_species(load_fixture(&format!("pokemon-species/{id}.json")));
        }
        for id in fixture_ids("generation") {
            catalog.insert_generation(load_fixture(&format!("generation/{id}.json")));
        }
        catalog
    }

    pub fn insert_pokemon(&mut self, pokemon: ApiPokemon) {
        self.pokemon.insert(pokemon.id, pokemon);
    }

    pub fn insert_species(&mut self, species: ApiSpecies) {
        self.species.insert(species.id, species);
    }

    /// Insert a generation and synthesize records for members that have none.
    pub fn insert_generation(&mut self, generation: ApiGeneration) {
        let generation_ref = ApiNamedResource::new(
            generation.name.clone(),
            format!("https://pokeapi.co/api/v2/generation/{}/", generation.id),
        );
        for member in &generation.pokemon_species {
            let Some(id) = member.id_from_url() else {
                continue;
            };
            self.pokemon
                .entry(id)
                .or_insert_with(|| synthesize_pokemon(id, &member.name));
            self.species.entry(id).or_insert_with(|| ApiSpecies {
                id,
                name: member.name.clone(),
                is_legendary: false,
                is_mythical: false,
                generation: generation_ref.clone(),
            });
        }
        self.generations.insert(generation.id, generation);
    }

    /// Make every subsequent fetch fail with `CatalogError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of fetches made for a category, successful or not.
    pub fn calls(&self, category: Category) -> usize {
        match category {
            Category::Pokemon => self.pokemon_calls.load(Ordering::SeqCst),
            Category::PokemonSpecies => self.species_calls.load(Ordering::SeqCst),
            Category::Generation => self.generation_calls.load(Ordering::SeqCst),
        }
    }

    pub fn sprite_calls(&self) -> usize {
        self.sprite_calls.load(Ordering::SeqCst)
    }

    /// Fetches of any kind.
    pub fn total_calls(&self) -> usize {
        Category::ALL.iter().map(|c| self.calls(*c)).sum::<usize>() + self.sprite_calls()
    }

    fn check(&self, counter: &AtomicUsize) -> PokecardResult<()> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CatalogError::Unavailable {
                reason: "fake catalog switched off".to_string(),
            }
            .into())
        }
    }
}

fn synthesize_pokemon(id: u32, name: &str) -> ApiPokemon {
    ApiPokemon {
        id,
        name: name.to_string(),
        stats: STAT_NAMES
            .iter()
            .enumerate()
            .map(|(i, stat)| ApiPokemonStat {
                base_stat: 40 + (id + i as u32 * 7) % 60,
                effort: 0,
                stat: ApiNamedResource::new(
                    *stat,
                    format!("https://pokeapi.co/api/v2/stat/{}/", i + 1),
                ),
            })
            .collect(),
    }
}

fn missing(resource: String) -> pokecard_core::PokecardError {
    CatalogError::NotFound { resource }.into()
}

impl ICatalogSource for FakeCatalog {
    fn fetch_pokemon(&self, pokemon_id: u32) -> PokecardResult<ApiPokemon> {
        self.check(&self.pokemon_calls)?;
        self.pokemon
            .get(&pokemon_id)
            .cloned()
            .ok_or_else(|| missing(format!("pokemon/{pokemon_id}")))
    }

    fn fetch_species(&self, id_or_name: &str) -> PokecardResult<ApiSpecies> {
        self.check(&self.species_calls)?;
        let found = match id_or_name.parse::<u32>() {
            Ok(id) => self.species.get(&id),
            Err(_) => self.species.values().find(|s| s.name == id_or_name),
        };
        found
            .cloned()
            .ok_or_else(|| missing(format!("pokemon-species/{id_or_name}")))
    }

    fn fetch_generation(&self, generation_id: u32) -> PokecardResult<ApiGeneration> {
        self.check(&self.generation_calls)?;
        self.generations
            .get(&generation_id)
            .cloned()
            .ok_or_else(|| missing(format!("generation/{generation_id}")))
    }

    fn fetch_sprite(&self, pokemon_id: u32) -> PokecardResult<Vec<u8>> {
        self.check(&self.sprite_calls)?;
        if self.pokemon.contains_key(&pokemon_id) {
            Ok(fake_sprite_bytes(pokemon_id))
        } else {
            Err(missing(format!("sprite/{pokemon_id}")))
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}
