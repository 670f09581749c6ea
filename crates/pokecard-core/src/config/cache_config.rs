use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Local cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory that web paths (sprite paths) are made relative to.
    pub static_root: String,
    /// Cache tree, relative to `static_root`.
    pub cache_dir: String,
    /// SQLite file inside the cache tree.
    pub db_file: String,
    /// Name index file inside the cache tree.
    pub name_index_file: String,
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            static_root: defaults::DEFAULT_STATIC_ROOT.to_string(),
            cache_dir: defaults::DEFAULT_CACHE_DIR.to_string(),
            db_file: defaults::DEFAULT_DB_FILENAME.to_string(),
            name_index_file: defaults::DEFAULT_NAME_INDEX_FILENAME.to_string(),
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}

impl CacheConfig {
    /// Absolute (or cwd-relative) cache tree root.
    pub fn cache_root(&self) -> PathBuf {
        PathBuf::from(&self.static_root).join(&self.cache_dir)
    }

    pub fn db_path(&self) -> PathBuf {
        self.cache_root().join(&self.db_file)
    }

    pub fn name_index_path(&self) -> PathBuf {
        self.cache_root().join(&self.name_index_file)
    }
}
