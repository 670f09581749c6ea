//! Identifier types.
//!
//! [`RawId`] is what callers hand in (an integer or a digit string) before
//! validation. [`PokemonId`] and [`GenerationId`] are the validated forms the
//! entity factory works with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ResolutionError;

/// An unvalidated identifier as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for RawId {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for RawId {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Catalog id of a pokemon. Always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PokemonId(u32);

impl PokemonId {
    pub fn new(value: u64) -> Result<Self, ResolutionError> {
        match u32::try_from(value) {
            Ok(v) if v >= 1 => Ok(Self(v)),
            _ => Err(ResolutionError::InvalidInput {
                field: "pokemon_id".to_string(),
                value: value.to_string(),
                reason: "must be an integer of at least 1".to_string(),
            }),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Key of this pokemon's records in the local cache.
    pub fn cache_key(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u32> for PokemonId {
    type Error = ResolutionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(u64::from(value))
    }
}

impl From<PokemonId> for u32 {
    fn from(id: PokemonId) -> Self {
        id.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A supported generation, `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GenerationId(u32);

impl GenerationId {
    pub fn new(value: u64) -> Result<Self, ResolutionError> {
        if (constants::MIN_GENERATION..=constants::MAX_GENERATION).contains(&value) {
            // Range check above keeps this lossless.
            Ok(Self(value as u32))
        } else {
            Err(ResolutionError::InvalidInput {
                field: "generation_id".to_string(),
                value: value.to_string(),
                reason: format!(
                    "only generations {} - {} are supported",
                    constants::MIN_GENERATION,
                    constants::MAX_GENERATION
                ),
            })
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn cache_key(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u32> for GenerationId {
    type Error = ResolutionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(u64::from(value))
    }
}

impl From<GenerationId> for u32 {
    fn from(id: GenerationId) -> Self {
        id.0
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
