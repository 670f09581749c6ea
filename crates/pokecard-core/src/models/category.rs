use std::fmt;

use serde::{Deserialize, Serialize};

/// Record category in the local cache, named after the remote catalog resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Pokemon,
    PokemonSpecies,
    Generation,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Pokemon, Self::PokemonSpecies, Self::Generation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::PokemonSpecies => "pokemon-species",
            Self::Generation => "generation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
