use std::sync::atomic::{AtomicUsize, Ordering};

use pokecard_core::errors::{PokecardError, PokecardResult, StorageError};
use pokecard_core::models::Category;
use pokecard_core::traits::ICacheStore;

/// Cache whose every operation fails with a storage error that is not
/// `NotFound`, so the engine must not escalate to the remote catalog.
#[derive(Debug, Default)]
pub struct BrokenCacheStore {
    calls: AtomicUsize,
}

impl BrokenCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls made against this store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail(&self) -> PokecardError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StorageError::SqliteError {
            message: "database disk image is malformed".to_string(),
        }
        .into()
    }
}

impl ICacheStore for BrokenCacheStore {
    fn load(&self, _category: Category, _key: &str) -> PokecardResult<String> {
        Err(self.fail())
    }

    fn store(&self, _category: Category, _key: &str, _body: &str) -> PokecardResult<()> {
        Err(self.fail())
    }

    fn sprite_path(&self, _pokemon_id: u32) -> PokecardResult<String> {
        Err(self.fail())
    }

    fn store_sprite(&self, _pokemon_id: u32, _bytes: &[u8]) -> PokecardResult<String> {
        Err(self.fail())
    }
}
