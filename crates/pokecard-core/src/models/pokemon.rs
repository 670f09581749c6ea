use serde::{Deserialize, Serialize};

use super::{PokemonId, PokemonStats, Rarity, SpeciesProfile};

/// One base stat, e.g. `("hp", 45)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "stat_name")]
    pub name: String,
    #[serde(rename = "stat_value")]
    pub value: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A fully assembled pokemon card.
///
/// Built fresh for every request from the stats, rarity/generation and sprite
/// facets. Each facet may independently have fallen back to its empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntity {
    #[serde(rename = "pokemon_id")]
    id: u32,
    #[serde(rename = "pokemon_name")]
    name: String,
    #[serde(rename = "pokemon_generation")]
    generation: String,
    #[serde(rename = "pokemon_rarity")]
    rarity: Rarity,
    #[serde(rename = "pokemon_points")]
    score: u64,
    #[serde(rename = "pokemon_stats")]
    stats: Vec<Stat>,
    #[serde(rename = "pokemon_sprite_path")]
    sprite_path: String,
}

impl PokemonEntity {
    /// Compose the entity from facet results and derive the score.
    ///
    /// Score is the first stat (hp) times the rarity multiplier, and is 0
    /// exactly when no stats were resolved. That relies on the catalog never
    /// reporting a base hp of 0; a record that does scores 0 with its stats kept.
    pub fn assemble(
        id: PokemonId,
        stats: PokemonStats,
        profile: SpeciesProfile,
        sprite_path: String,
    ) -> Self {
        let score = stats
            .stats
            .first()
            .map(|base| u64::from(base.value) * profile.rarity.multiplier())
            .unwrap_or(0);

        Self {
            id: id.get(),
            name: stats.name,
            generation: profile.generation,
            rarity: profile.rarity,
            score,
            stats: stats.stats,
            sprite_path,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generation(&self) -> &str {
        &self.generation
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn sprite_path(&self) -> &str {
        &self.sprite_path
    }
}
