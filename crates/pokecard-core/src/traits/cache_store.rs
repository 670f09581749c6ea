use crate::errors::PokecardResult;
use crate::models::Category;

/// Durable key-value cache addressed by `(category, key)`.
///
/// Implementations must report an absent key as `StorageError::NotFound`;
/// that is the only failure that lets the engine escalate to the remote
/// catalog. Any other error is terminal for the facet.
pub trait ICacheStore: Send + Sync {
    /// Load the serialized record stored under `(category, key)`.
    fn load(&self, category: Category, key: &str) -> PokecardResult<String>;

    /// Insert or overwrite the record stored under `(category, key)`.
    fn store(&self, category: Category, key: &str, body: &str) -> PokecardResult<()>;

    /// Web path of the cached sprite for `pokemon_id`, e.g. `/.cache/sprite/pokemon/20.png`.
    fn sprite_path(&self, pokemon_id: u32) -> PokecardResult<String>;

    /// Write sprite image bytes into the sprite tree and return the web path.
    fn store_sprite(&self, pokemon_id: u32, bytes: &[u8]) -> PokecardResult<String>;
}
