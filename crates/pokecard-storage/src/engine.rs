//! CacheStore: owns the connection pool and the sprite tree, implements ICacheStore.

use std::path::Path;

use chrono::Utc;

use pokecard_core::config::CacheConfig;
use pokecard_core::errors::{PokecardResult, StorageError};
use pokecard_core::models::Category;
use pokecard_core::traits::ICacheStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::cache_ops;
use crate::sprites::SpriteTree;
use crate::to_io_err;

/// The local tier of the resolution ladder.
pub struct CacheStore {
    pool: ConnectionPool,
    sprites: SpriteTree,
}

impl CacheStore {
    /// Open the cache tree described by `config`, creating it if needed.
    pub fn open(config: &CacheConfig) -> PokecardResult<Self> {
        let root = config.cache_root();
        std::fs::create_dir_all(&root).map_err(|e| to_io_err(&root, e))?;
        let pool = ConnectionPool::open(
            &config.db_path(),
            config.read_pool_size,
            migrations::run_migrations,
        )?;
        tracing::debug!(db = %config.db_path().display(), "opened catalog cache");
        Ok(Self {
            pool,
            sprites: SpriteTree::new(&config.static_root, &config.cache_dir),
        })
    }

    /// SQLite in memory, sprites still on disk under `config.static_root`.
    pub fn open_in_memory(config: &CacheConfig) -> PokecardResult<Self> {
        let pool = ConnectionPool::open_in_memory(migrations::run_migrations)?;
        Ok(Self {
            pool,
            sprites: SpriteTree::new(&config.static_root, &config.cache_dir),
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn sprites(&self) -> &SpriteTree {
        &self.sprites
    }

    /// Database file backing this store, `None` in memory.
    pub fn db_path(&self) -> Option<&Path> {
        self.pool.db_path.as_deref()
    }

    /// Number of cached records in a category.
    pub fn record_count(&self, category: Category) -> PokecardResult<u64> {
        self.pool
            .with_reader(|conn| cache_ops::count_records(conn, category.as_str()))
    }
}

impl ICacheStore for CacheStore {
    fn load(&self, category: Category, key: &str) -> PokecardResult<String> {
        self.pool
            .with_reader(|conn| cache_ops::get_record(conn, category.as_str(), key))?
            .ok_or_else(|| {
                StorageError::NotFound {
                    category: category.as_str().to_string(),
                    key: key.to_string(),
                }
                .into()
            })
    }

    fn store(&self, category: Category, key: &str, body: &str) -> PokecardResult<()> {
        let fetched_at = Utc::now().to_rfc3339();
        self.pool.writer.with_conn_sync(|conn| {
            cache_ops::upsert_record(conn, category.as_str(), key, body, &fetched_at)
        })
    }

    fn sprite_path(&self, pokemon_id: u32) -> PokecardResult<String> {
        self.sprites.load(pokemon_id)
    }

    fn store_sprite(&self, pokemon_id: u32, bytes: &[u8]) -> PokecardResult<String> {
        self.sprites.store(pokemon_id, bytes)
    }
}
