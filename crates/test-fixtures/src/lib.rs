//! Test fixture loader for pokecard catalog payloads, plus in-memory fakes of
//! the engine's collaborators.
//!
//! Fixtures live under `catalog/` in PokeAPI shape:
//! `catalog/pokemon/<id>.json`, `catalog/pokemon-species/<id>.json`,
//! `catalog/generation/<id>.json`.

mod broken_cache;
mod fake_catalog;

pub use broken_cache::BrokenCacheStore;
pub use fake_catalog::FakeCatalog;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture payloads.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("catalog")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text, e.g. to serve it from a mock HTTP server.
pub fn fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Ids of every fixture in a category directory, sorted.
pub fn fixture_ids(category: &str) -> Vec<u32> {
    let dir = fixtures_root().join(category);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut ids: Vec<u32> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem()?.to_str()?.parse().ok()
            } else {
                None
            }
        })
        .collect();
    ids.sort_unstable();
    ids
}
