//! Resolver: the entry points the web layer calls.

use std::sync::Arc;

use pokecard_core::config::PokecardConfig;
use pokecard_core::errors::{PokecardResult, ResolutionError};
use pokecard_core::models::{GenerationEntity, GenerationId, PokemonEntity, PokemonId, RawId};
use pokecard_core::traits::{ICacheStore, ICatalogSource, INameIndex};
use pokecard_observability::ResolutionMetrics;
use pokecard_storage::{CacheStore, NameIndexCache};

use crate::engine::ResolutionEngine;
use crate::factory::EntityFactory;
use crate::validator;

#[derive(Clone)]
pub struct Resolver {
    factory: EntityFactory,
    load_sprites: bool,
}

impl Resolver {
    /// Wire a resolver from its collaborators with fresh metrics.
    pub fn new(
        cache: Arc<dyn ICacheStore>,
        catalog: Arc<dyn ICatalogSource>,
        names: Arc<dyn INameIndex>,
    ) -> Self {
        Self::with_metrics(cache, catalog, names, Arc::new(ResolutionMetrics::new()))
    }

    pub fn with_metrics(
        cache: Arc<dyn ICacheStore>,
        catalog: Arc<dyn ICatalogSource>,
        names: Arc<dyn INameIndex>,
        metrics: Arc<ResolutionMetrics>,
    ) -> Self {
        let engine = ResolutionEngine::new(cache, catalog, names, metrics);
        Self {
            factory: EntityFactory::new(engine),
            load_sprites: true,
        }
    }

    /// Open the cache tree and name index and pick the catalog the config names.
    pub fn from_config(config: &PokecardConfig) -> PokecardResult<Self> {
        PokecardConfig::validate(config)?;
        let cache = Arc::new(CacheStore::open(&config.cache)?);
        let names = Arc::new(NameIndexCache::new(config.cache.name_index_path()));
        let catalog = pokecard_catalog::catalog_from_config(&config.catalog);
        tracing::info!(
            static_root = %config.cache.static_root,
            catalog = catalog.name(),
            "resolver ready"
        );
        Ok(Self::new(cache, catalog, names))
    }

    /// Whether pokemon entities include the sprite facet. On by default.
    pub fn load_sprites(mut self, load_sprites: bool) -> Self {
        self.load_sprites = load_sprites;
        self
    }

    pub fn factory(&self) -> &EntityFactory {
        &self.factory
    }

    pub fn engine(&self) -> &ResolutionEngine {
        self.factory.engine()
    }

    pub fn metrics(&self) -> &Arc<ResolutionMetrics> {
        self.engine().metrics()
    }

    pub fn resolve_pokemon_by_id(&self, id: impl Into<RawId>) -> PokecardResult<PokemonEntity> {
        let id = parse_pokemon_id(&id.into())?;
        Ok(self.factory.build_pokemon(id, self.load_sprites))
    }

    pub fn resolve_pokemon_by_name(&self, name: &str) -> PokecardResult<PokemonEntity> {
        Ok(self.factory.build_pokemon_by_name(name, self.load_sprites)?)
    }

    pub fn resolve_generation_roster(
        &self,
        generation: impl Into<RawId>,
    ) -> PokecardResult<GenerationEntity> {
        let generation = parse_generation_id(&generation.into())?;
        Ok(self.factory.build_generation(generation))
    }

    pub fn resolve_random_from_generation(
        &self,
        generation: impl Into<RawId>,
    ) -> PokecardResult<PokemonEntity> {
        let generation = self.resolve_generation_roster(generation)?;
        Ok(self.factory.random_member(&generation, self.load_sprites)?)
    }

    pub fn resolve_generation_member(
        &self,
        generation: impl Into<RawId>,
        index: usize,
    ) -> PokecardResult<PokemonEntity> {
        let generation = self.resolve_generation_roster(generation)?;
        Ok(self.factory.member_at(&generation, index, self.load_sprites)?)
    }
}

fn parse_pokemon_id(raw: &RawId) -> Result<PokemonId, ResolutionError> {
    let value = validator::validate_identifier(raw).ok_or_else(|| invalid("pokemon_id", raw))?;
    PokemonId::new(value)
}

fn parse_generation_id(raw: &RawId) -> Result<GenerationId, ResolutionError> {
    let value =
        validator::validate_identifier(raw).ok_or_else(|| invalid("generation_id", raw))?;
    GenerationId::new(value)
}

fn invalid(field: &str, raw: &RawId) -> ResolutionError {
    ResolutionError::InvalidInput {
        field: field.to_string(),
        value: raw.to_string(),
        reason: "must be an integer or a string containing only digits".to_string(),
    }
}
