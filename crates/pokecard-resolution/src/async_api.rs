//! AsyncResolver: runs blocking resolutions on tokio's blocking pool.

use std::sync::Arc;

use pokecard_core::errors::{PokecardError, PokecardResult};
use pokecard_core::models::{GenerationEntity, PokemonEntity, RawId};

use crate::resolver::Resolver;

#[derive(Clone)]
pub struct AsyncResolver {
    inner: Arc<Resolver>,
}

impl AsyncResolver {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            inner: Arc::new(resolver),
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.inner
    }

    async fn run<T, F>(&self, f: F) -> PokecardResult<T>
    where
        F: FnOnce(&Resolver) -> PokecardResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(inner.as_ref()))
            .await
            .map_err(|e| PokecardError::TaskFailed {
                reason: e.to_string(),
            })?
    }

    pub async fn resolve_pokemon_by_id(
        &self,
        id: impl Into<RawId>,
    ) -> PokecardResult<PokemonEntity> {
        let id = id.into();
        self.run(move |r| r.resolve_pokemon_by_id(id)).await
    }

    pub async fn resolve_pokemon_by_name(&self, name: &str) -> PokecardResult<PokemonEntity> {
        let name = name.to_string();
        self.run(move |r| r.resolve_pokemon_by_name(&name)).await
    }

    pub async fn resolve_generation_roster(
        &self,
        generation: impl Into<RawId>,
    ) -> PokecardResult<GenerationEntity> {
        let generation = generation.into();
        self.run(move |r| r.resolve_generation_roster(generation))
            .await
    }

    pub async fn resolve_random_from_generation(
        &self,
        generation: impl Into<RawId>,
    ) -> PokecardResult<PokemonEntity> {
        let generation = generation.into();
        self.run(move |r| r.resolve_random_from_generation(generation))
            .await
    }

    pub async fn resolve_generation_member(
        &self,
        generation: impl Into<RawId>,
        index: usize,
    ) -> PokecardResult<PokemonEntity> {
        let generation = generation.into();
        self.run(move |r| r.resolve_generation_member(generation, index))
            .await
    }
}
