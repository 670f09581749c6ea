//! ResolutionEngine: one operation per facet, each climbing the cache/remote ladder.
//!
//! Public facet operations take raw caller input, validate it, and return the
//! facet's empty result on any failure. The `*_for` variants take already
//! validated ids and a starting rung; the entity factory uses those.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use pokecard_core::errors::{PokecardError, PokecardResult, StorageError};
use pokecard_core::models::{
    Category, Facet, GenerationId, PokemonId, PokemonStats, RawId, RosterEntry, SpeciesProfile,
};
use pokecard_core::traits::{ICacheStore, ICatalogSource, INameIndex};
use pokecard_observability::tracing_setup::events;
use pokecard_observability::{resolution_span, ResolutionMetrics};

use crate::ladder::{Ladder, Rung};
use crate::parsers::cached::FieldError;
use crate::parsers::{cached, remote};
use crate::validator::{self, GenerationCheck, NameCheck};

/// Local-miss category used for the name index.
const NAME_INDEX_CATEGORY: &str = "name-index";

#[derive(Clone)]
pub struct ResolutionEngine {
    cache: Arc<dyn ICacheStore>,
    catalog: Arc<dyn ICatalogSource>,
    names: Arc<dyn INameIndex>,
    metrics: Arc<ResolutionMetrics>,
}

impl ResolutionEngine {
    pub fn new(
        cache: Arc<dyn ICacheStore>,
        catalog: Arc<dyn ICatalogSource>,
        names: Arc<dyn INameIndex>,
        metrics: Arc<ResolutionMetrics>,
    ) -> Self {
        Self {
            cache,
            catalog,
            names,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Arc<ResolutionMetrics> {
        &self.metrics
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.name()
    }

    // --- Raw-input facet operations ---

    /// Stats of a pokemon. Empty (id 0, no name, no stats) on any failure.
    pub fn pokemon_stats(&self, id: impl Into<RawId>, depth: impl Into<RawId>) -> PokemonStats {
        match self.pokemon_start(Facet::Stats, &id.into(), &depth.into()) {
            Some((id, rung)) => self.pokemon_stats_for(id, rung),
            None => PokemonStats::default(),
        }
    }

    /// Generation label and rarity of a pokemon. Empty with `Rarity::None` on any failure.
    pub fn rarity_and_generation(
        &self,
        id: impl Into<RawId>,
        depth: impl Into<RawId>,
    ) -> SpeciesProfile {
        match self.pokemon_start(Facet::RarityGeneration, &id.into(), &depth.into()) {
            Some((id, rung)) => self.rarity_and_generation_for(id, rung),
            None => SpeciesProfile::default(),
        }
    }

    /// Web path of the pokemon's sprite. Empty string on any failure.
    pub fn sprite_path(&self, id: impl Into<RawId>, depth: impl Into<RawId>) -> String {
        match self.pokemon_start(Facet::Sprite, &id.into(), &depth.into()) {
            Some((id, rung)) => self.sprite_path_for(id, rung),
            None => String::new(),
        }
    }

    /// Roster of a generation in catalog order. Empty on any failure.
    pub fn generation_roster(
        &self,
        generation: impl Into<RawId>,
        depth: impl Into<RawId>,
    ) -> Vec<RosterEntry> {
        let (generation, depth) = (generation.into(), depth.into());
        let check = validator::validate_generation_and_depth(&generation, &depth);
        if check != GenerationCheck::Ok {
            self.reject(
                Facet::Roster,
                "generation",
                &generation.to_string(),
                &format!("{check:?} (depth {depth})"),
            );
            return Vec::new();
        }
        let start = validator::validate_identifier(&depth).and_then(Rung::from_depth);
        let generation = validator::validate_identifier(&generation)
            .and_then(|g| GenerationId::new(g).ok());
        match (generation, start) {
            (Some(generation), Some(start)) => self.generation_roster_for(generation, start),
            _ => Vec::new(),
        }
    }

    /// Catalog id for a pokemon name. `None` if the name is invalid or unknown.
    pub fn pokemon_id_from_name(&self, name: &str, depth: impl Into<RawId>) -> Option<u32> {
        if validator::validate_name(name) == NameCheck::Invalid {
            self.reject(Facet::NameIndex, "name", name, "must be alphabetic and non-empty");
            return None;
        }
        let start = self.start_rung(Facet::NameIndex, &depth.into())?;
        self.pokemon_id_from_name_for(name, start)
    }

    // --- Validated facet operations ---

    pub fn pokemon_stats_for(&self, id: PokemonId, start: Rung) -> PokemonStats {
        let key = id.cache_key();
        let _span = resolution_span!(Facet::Stats, key).entered();
        self.ladder(Facet::Stats, &key)
            .climb(
                start,
                || {
                    let record = self.load_record(Category::Pokemon, &key)?;
                    cached::stats(&record).map_err(|e| field_err(Category::Pokemon, &key, e))
                },
                || {
                    let pokemon = self.catalog.fetch_pokemon(id.get())?;
                    self.write_through(Facet::Stats, Category::Pokemon, &key, &pokemon);
                    Ok(remote::stats(&pokemon))
                },
            )
            .unwrap_or_default()
    }

    pub fn rarity_and_generation_for(&self, id: PokemonId, start: Rung) -> SpeciesProfile {
        let key = id.cache_key();
        let _span = resolution_span!(Facet::RarityGeneration, key).entered();
        self.ladder(Facet::RarityGeneration, &key)
            .climb(
                start,
                || {
                    let record = self.load_record(Category::PokemonSpecies, &key)?;
                    cached::species(&record)
                        .map_err(|e| field_err(Category::PokemonSpecies, &key, e))
                },
                || {
                    let species = self.catalog.fetch_species(&key)?;
                    self.write_through(
                        Facet::RarityGeneration,
                        Category::PokemonSpecies,
                        &key,
                        &species,
                    );
                    Ok(remote::species(&species))
                },
            )
            .unwrap_or_default()
    }

    /// The remote rung downloads the image into the sprite tree; a failed
    /// write there fails the facet, since there is no path to return.
    pub fn sprite_path_for(&self, id: PokemonId, start: Rung) -> String {
        let key = id.cache_key();
        let _span = resolution_span!(Facet::Sprite, key).entered();
        self.ladder(Facet::Sprite, &key)
            .climb(
                start,
                || self.cache.sprite_path(id.get()),
                || {
                    let bytes = self.catalog.fetch_sprite(id.get())?;
                    self.cache.store_sprite(id.get(), &bytes)
                },
            )
            .unwrap_or_default()
    }

    pub fn generation_roster_for(&self, generation: GenerationId, start: Rung) -> Vec<RosterEntry> {
        let key = generation.cache_key();
        let _span = resolution_span!(Facet::Roster, key).entered();
        self.ladder(Facet::Roster, &key)
            .climb(
                start,
                || {
                    let record = self.load_record(Category::Generation, &key)?;
                    cached::roster(&record).map_err(|e| field_err(Category::Generation, &key, e))
                },
                || {
                    let payload = self.catalog.fetch_generation(generation.get())?;
                    let roster = remote::roster(&payload)?;
                    self.write_through(Facet::Roster, Category::Generation, &key, &payload);
                    Ok(roster)
                },
            )
            .unwrap_or_default()
    }

    /// Rung 0 is the name index, rung 1 a species lookup by name. A remote hit
    /// is recorded in the name index and written through to the species cache.
    pub fn pokemon_id_from_name_for(&self, name: &str, start: Rung) -> Option<u32> {
        let _span = resolution_span!(Facet::NameIndex, name).entered();
        self.ladder(Facet::NameIndex, name).climb(
            start,
            || {
                self.names.lookup(name).ok_or_else(|| {
                    StorageError::NotFound {
                        category: NAME_INDEX_CATEGORY.to_string(),
                        key: name.to_string(),
                    }
                    .into()
                })
            },
            || {
                let species = self.catalog.fetch_species(name)?;
                match self.names.record(name, species.id) {
                    Ok(()) => events::name_recorded(name, species.id),
                    Err(e) => events::write_through_failed(Facet::NameIndex, name, &e.to_string()),
                }
                self.write_through(
                    Facet::NameIndex,
                    Category::PokemonSpecies,
                    &species.id.to_string(),
                    &species,
                );
                Ok(species.id)
            },
        )
    }

    // --- Helpers ---

    fn ladder<'a>(&'a self, facet: Facet, key: &'a str) -> Ladder<'a> {
        Ladder {
            facet,
            key,
            metrics: &self.metrics,
        }
    }

    fn reject(&self, facet: Facet, field: &str, value: &str, reason: &str) {
        self.metrics.record_rejected(facet);
        events::input_rejected(facet, field, value, reason);
    }

    /// Validate depth into a starting rung, rejecting anything beyond the ladder.
    fn start_rung(&self, facet: Facet, depth: &RawId) -> Option<Rung> {
        let rung = validator::validate_identifier(depth).and_then(Rung::from_depth);
        if rung.is_none() {
            self.reject(facet, "depth", &depth.to_string(), "must be 0 or 1");
        }
        rung
    }

    /// Validate a pokemon id (at least 1) and depth.
    fn pokemon_start(&self, facet: Facet, id: &RawId, depth: &RawId) -> Option<(PokemonId, Rung)> {
        let Some(value) = validator::validate_identifier(id) else {
            self.reject(facet, "pokemon_id", &id.to_string(), "must be a non-negative integer");
            return None;
        };
        let id = match PokemonId::new(value) {
            Ok(id) => id,
            Err(e) => {
                self.reject(facet, "pokemon_id", &value.to_string(), &e.to_string());
                return None;
            }
        };
        Some((id, self.start_rung(facet, depth)?))
    }

    fn load_record(&self, category: Category, key: &str) -> PokecardResult<Value> {
        let body = self.cache.load(category, key)?;
        serde_json::from_str(&body).map_err(|e| {
            StorageError::CorruptRecord {
                category: category.as_str().to_string(),
                key: key.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Store a remote payload in the cache. Failure is logged and ignored.
    fn write_through<T: Serialize>(&self, facet: Facet, category: Category, key: &str, payload: &T) {
        let result = serde_json::to_string(payload)
            .map_err(PokecardError::from)
            .and_then(|body| self.cache.store(category, key, &body));
        if let Err(e) = result {
            events::write_through_failed(facet, key, &e.to_string());
        }
    }
}

/// A missing field reads as a local miss, a mistyped one as a corrupt record.
fn field_err(category: Category, key: &str, err: FieldError) -> PokecardError {
    match err {
        FieldError::Missing(_) => StorageError::NotFound {
            category: category.as_str().to_string(),
            key: key.to_string(),
        }
        .into(),
        FieldError::WrongType(_) => StorageError::CorruptRecord {
            category: category.as_str().to_string(),
            key: key.to_string(),
            reason: err.to_string(),
        }
        .into(),
    }
}
