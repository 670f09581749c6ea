use serde::{Deserialize, Serialize};

use super::GenerationId;
use crate::errors::ResolutionError;

/// One member of a generation roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "pokemon_id")]
    pub id: u32,
    #[serde(rename = "pokemon_name")]
    pub name: String,
}

impl RosterEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A generation and its roster, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationEntity {
    #[serde(rename = "generation_id")]
    id: GenerationId,
    #[serde(rename = "pokemon_list")]
    roster: Vec<RosterEntry>,
}

impl GenerationEntity {
    pub fn new(id: GenerationId, roster: Vec<RosterEntry>) -> Self {
        Self { id, roster }
    }

    pub fn id(&self) -> GenerationId {
        self.id
    }

    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Roster entry at `index`.
    ///
    /// An empty roster is reported as `EmptyRoster` regardless of the index.
    pub fn entry_at(&self, index: usize) -> Result<&RosterEntry, ResolutionError> {
        if self.roster.is_empty() {
            return Err(ResolutionError::EmptyRoster {
                generation: self.id.get(),
            });
        }
        self.roster.get(index).ok_or(ResolutionError::OutOfRange {
            index,
            len: self.roster.len(),
        })
    }
}
