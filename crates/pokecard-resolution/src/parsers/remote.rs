//! Parse typed catalog payloads.

use pokecard_core::errors::{CatalogError, PokecardResult};
use pokecard_core::models::{
    ApiGeneration, ApiPokemon, ApiSpecies, PokemonStats, Rarity, RosterEntry, SpeciesProfile,
    Stat,
};

/// `pokemon` payload -> stats facet.
pub fn stats(pokemon: &ApiPokemon) -> PokemonStats {
    PokemonStats {
        id: pokemon.id,
        name: pokemon.name.clone(),
        stats: pokemon
            .stats
            .iter()
            .map(|s| Stat::new(s.stat.name.clone(), s.base_stat))
            .collect(),
    }
}

/// `pokemon-species` payload -> rarity/generation facet.
pub fn species(species: &ApiSpecies) -> SpeciesProfile {
    SpeciesProfile {
        generation: species.generation.name.clone(),
        rarity: Rarity::from_flags(species.is_mythical, species.is_legendary),
    }
}

/// `generation` payload -> roster facet. Fails if any member URL carries no id.
pub fn roster(generation: &ApiGeneration) -> PokecardResult<Vec<RosterEntry>> {
    generation
        .pokemon_species
        .iter()
        .map(|member| -> PokecardResult<RosterEntry> {
            let id = member.id_from_url().ok_or_else(|| CatalogError::DecodeFailed {
                reason: format!("no id in species url {:?}", member.url),
            })?;
            Ok(RosterEntry::new(id, member.name.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pokecard_core::models::ApiNamedResource;

    use super::*;

    fn species_with(is_mythical: bool, is_legendary: bool) -> ApiSpecies {
        ApiSpecies {
            id: 151,
            name: "mew".to_string(),
            is_legendary,
            is_mythical,
            generation: ApiNamedResource::new("generation-i", ""),
        }
    }

    #[test]
    fn rarity_matches_cached_parser() {
        use serde_json::json;
        for (mythical, legendary) in [(true, true), (true, false), (false, true), (false, false)] {
            let remote = species(&species_with(mythical, legendary));
            let cached = super::super::cached::species(&json!({
                "is_mythical": mythical,
                "is_legendary": legendary,
                "generation": {"name": "generation-i"}
            }))
            .unwrap();
            assert_eq!(remote, cached);
        }
    }

    #[test]
    fn roster_rejects_member_without_id() {
        let generation = ApiGeneration {
            id: 1,
            name: "generation-i".to_string(),
            pokemon_species: vec![ApiNamedResource::new("bulbasaur", "no-id-here")],
        };
        assert!(roster(&generation).is_err());
    }
}
