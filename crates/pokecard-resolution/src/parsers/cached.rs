//! Parse cached catalog records.
//!
//! A missing field reads as [`FieldError::Missing`]; the engine treats that
//! like a missing key so the remote rung can repair the record. A field of the
//! wrong type is [`FieldError::WrongType`] and ends the facet.

use serde_json::Value;

use pokecard_core::models::{
    id_from_url, PokemonStats, Rarity, RosterEntry, SpeciesProfile, Stat,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(String),
    WrongType(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "missing field {path}"),
            Self::WrongType(path) => write!(f, "field {path} has the wrong type"),
        }
    }
}

fn field<'a>(value: &'a Value, name: &str) -> Result<&'a Value, FieldError> {
    match value.get(name) {
        Some(Value::Null) | None => Err(FieldError::Missing(name.to_string())),
        Some(v) => Ok(v),
    }
}

fn as_u32(value: &Value, name: &str) -> Result<u32, FieldError> {
    field(value, name)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| FieldError::WrongType(name.to_string()))
}

fn as_str<'a>(value: &'a Value, name: &str) -> Result<&'a str, FieldError> {
    field(value, name)?
        .as_str()
        .ok_or_else(|| FieldError::WrongType(name.to_string()))
}

fn as_bool(value: &Value, name: &str) -> Result<bool, FieldError> {
    field(value, name)?
        .as_bool()
        .ok_or_else(|| FieldError::WrongType(name.to_string()))
}

fn as_array<'a>(value: &'a Value, name: &str) -> Result<&'a Vec<Value>, FieldError> {
    field(value, name)?
        .as_array()
        .ok_or_else(|| FieldError::WrongType(name.to_string()))
}

/// `pokemon` record -> stats facet.
pub fn stats(record: &Value) -> Result<PokemonStats, FieldError> {
    let stats = as_array(record, "stats")?
        .iter()
        .map(|entry| -> Result<Stat, FieldError> {
            let value = as_u32(entry, "base_stat")?;
            let name = as_str(field(entry, "stat")?, "name")?;
            Ok(Stat::new(name, value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PokemonStats {
        id: as_u32(record, "id")?,
        name: as_str(record, "name")?.to_string(),
        stats,
    })
}

/// `pokemon-species` record -> rarity/generation facet.
pub fn species(record: &Value) -> Result<SpeciesProfile, FieldError> {
    let rarity = Rarity::from_flags(
        as_bool(record, "is_mythical")?,
        as_bool(record, "is_legendary")?,
    );
    let generation = as_str(field(record, "generation")?, "name")?.to_string();
    Ok(SpeciesProfile { generation, rarity })
}

/// `generation` record -> roster facet.
pub fn roster(record: &Value) -> Result<Vec<RosterEntry>, FieldError> {
    as_array(record, "pokemon_species")?
        .iter()
        .map(|entry| -> Result<RosterEntry, FieldError> {
            let name = as_str(entry, "name")?;
            let url = as_str(entry, "url")?;
            let id = id_from_url(url).ok_or_else(|| FieldError::WrongType("url".to_string()))?;
            Ok(RosterEntry::new(id, name))
        })
        .collect()
}
