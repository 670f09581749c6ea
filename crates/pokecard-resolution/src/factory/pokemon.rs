use pokecard_core::errors::ResolutionError;
use pokecard_core::models::{PokemonEntity, PokemonId};
use pokecard_observability::factory_span;

use super::EntityFactory;
use crate::ladder::Rung;
use crate::validator::{self, NameCheck};

impl EntityFactory {
    /// Build a pokemon from its stats, rarity/generation and (optionally) sprite facets.
    pub fn build_pokemon(&self, id: PokemonId, load_sprite: bool) -> PokemonEntity {
        let _span = factory_span!("pokemon", id).entered();
        let stats = self.engine.pokemon_stats_for(id, Rung::Cache);
        let profile = self.engine.rarity_and_generation_for(id, Rung::Cache);
        let sprite_path = if load_sprite {
            self.engine.sprite_path_for(id, Rung::Cache)
        } else {
            String::new()
        };
        PokemonEntity::assemble(id, stats, profile, sprite_path)
    }

    /// Resolve `name` to an id, then build the pokemon.
    ///
    /// `EntityNotFound` means the catalog has no such name, which callers can
    /// tell apart from an entity whose facets came back empty.
    pub fn build_pokemon_by_name(
        &self,
        name: &str,
        load_sprite: bool,
    ) -> Result<PokemonEntity, ResolutionError> {
        if validator::validate_name(name) == NameCheck::Invalid {
            return Err(ResolutionError::InvalidInput {
                field: "pokemon_name".to_string(),
                value: name.to_string(),
                reason: "must be non-empty and alphabetic".to_string(),
            });
        }
        let id = self
            .engine
            .pokemon_id_from_name_for(name, Rung::Cache)
            .ok_or_else(|| ResolutionError::EntityNotFound {
                name: name.to_string(),
            })?;
        let id = PokemonId::new(u64::from(id))?;
        Ok(self.build_pokemon(id, load_sprite))
    }
}
