use rand::Rng;

use pokecard_core::errors::ResolutionError;
use pokecard_core::models::{GenerationEntity, GenerationId, PokemonEntity, PokemonId};
use pokecard_observability::factory_span;

use super::EntityFactory;
use crate::ladder::Rung;

impl EntityFactory {
    /// Build a generation with its roster. An empty roster is a valid result.
    pub fn build_generation(&self, generation: GenerationId) -> GenerationEntity {
        let _span = factory_span!("generation", generation).entered();
        let roster = self.engine.generation_roster_for(generation, Rung::Cache);
        GenerationEntity::new(generation, roster)
    }

    /// Build the pokemon at `index` in the roster.
    pub fn member_at(
        &self,
        generation: &GenerationEntity,
        index: usize,
        load_sprite: bool,
    ) -> Result<PokemonEntity, ResolutionError> {
        let entry = generation.entry_at(index)?;
        let id = PokemonId::new(u64::from(entry.id))?;
        Ok(self.build_pokemon(id, load_sprite))
    }

    /// Build a uniformly random roster member.
    pub fn random_member(
        &self,
        generation: &GenerationEntity,
        load_sprite: bool,
    ) -> Result<PokemonEntity, ResolutionError> {
        self.random_member_with(generation, load_sprite, &mut rand::thread_rng())
    }

    /// Build a random roster member using the given RNG.
    pub fn random_member_with<R: Rng + ?Sized>(
        &self,
        generation: &GenerationEntity,
        load_sprite: bool,
        rng: &mut R,
    ) -> Result<PokemonEntity, ResolutionError> {
        if generation.is_empty() {
            return Err(ResolutionError::EmptyRoster {
                generation: generation.id().get(),
            });
        }
        let index = rng.gen_range(0..generation.len());
        self.member_at(generation, index, load_sprite)
    }
}
