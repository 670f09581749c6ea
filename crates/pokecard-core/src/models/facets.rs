//! Facets: the independently resolvable attribute groups of an entity, and
//! the normalized results the engine produces for them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Rarity, Stat};

/// One independently resolvable attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Stats,
    RarityGeneration,
    Sprite,
    Roster,
    NameIndex,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Self::Stats,
        Self::RarityGeneration,
        Self::Sprite,
        Self::Roster,
        Self::NameIndex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::RarityGeneration => "rarity_generation",
            Self::Sprite => "sprite",
            Self::Roster => "roster",
            Self::NameIndex => "name_index",
        }
    }

    /// Position in [`Facet::ALL`], used to index per-facet counters.
    pub fn index(&self) -> usize {
        match self {
            Self::Stats => 0,
            Self::RarityGeneration => 1,
            Self::Sprite => 2,
            Self::Roster => 3,
            Self::NameIndex => 4,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the stats facet. `Default` is the empty result: id 0, no name, no stats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonStats {
    pub id: u32,
    pub name: String,
    /// Catalog's canonical stat order.
    pub stats: Vec<Stat>,
}

impl PokemonStats {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Result of the rarity/generation facet. `Default` is the empty result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Generation label, e.g. "generation-i".
    pub generation: String,
    pub rarity: Rarity,
}

impl SpeciesProfile {
    pub fn is_empty(&self) -> bool {
        self.rarity == Rarity::None
    }
}
