use serde::{Deserialize, Serialize};

use crate::constants;

/// Rarity class of a pokemon species.
///
/// `None` only appears when the species facet could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    None,
    Normal,
    Legendary,
    Mythical,
}

impl Rarity {
    /// Three-way rarity check. Mythical wins over legendary.
    pub fn from_flags(is_mythical: bool, is_legendary: bool) -> Self {
        if is_mythical {
            Self::Mythical
        } else if is_legendary {
            Self::Legendary
        } else {
            Self::Normal
        }
    }

    /// Score multiplier applied to the base stat.
    pub fn multiplier(&self) -> u64 {
        match self {
            Self::None | Self::Normal => constants::NORMAL_MULTIPLIER,
            Self::Legendary => constants::LEGENDARY_MULTIPLIER,
            Self::Mythical => constants::MYTHIC_MULTIPLIER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Normal => "normal",
            Self::Legendary => "legendary",
            Self::Mythical => "mythical",
        }
    }
}
