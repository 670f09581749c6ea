//! Persisted `name -> id` index.
//!
//! The whole mapping is a single JSON object on disk. Every `lookup` reads the
//! full file and every `record` rewrites it. A missing or corrupt file reads as
//! an empty mapping. Entries are never removed: catalog ids do not change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pokecard_core::errors::{PokecardResult, StorageError};
use pokecard_core::traits::INameIndex;

use crate::sprites::write_replace;
use crate::to_io_err;

pub struct NameIndexCache {
    path: PathBuf,
    /// Serializes `record` within this process.
    write_lock: Mutex<()>,
}

impl NameIndexCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole mapping. Never fails.
    pub fn load_all(&self) -> BTreeMap<String, u32> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "name index unreadable, treating as empty");
                return BTreeMap::new();
            }
        };
        if content.trim().is_empty() {
            return BTreeMap::new();
        }
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "name index corrupt, treating as empty");
            BTreeMap::new()
        })
    }

    fn persist(&self, mapping: &BTreeMap<String, u32>) -> PokecardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| to_io_err(parent, e))?;
            }
        }
        let body = serde_json::to_vec_pretty(mapping)?;
        write_replace(&self.path, &body)
    }
}

impl INameIndex for NameIndexCache {
    fn lookup(&self, name: &str) -> Option<u32> {
        self.load_all().get(name).copied()
    }

    fn record(&self, name: &str, id: u32) -> PokecardResult<()> {
        let _guard = self.write_lock.lock().map_err(|e| StorageError::Io {
            path: self.path.display().to_string(),
            message: format!("name index lock poisoned: {e}"),
        })?;

        // Re-read under the lock so concurrent recorders in this process
        // don't drop each other's entries.
        let mut mapping = self.load_all();
        if mapping.get(name) == Some(&id) {
            return Ok(());
        }
        mapping.insert(name.to_string(), id);
        self.persist(&mapping)
    }
}
