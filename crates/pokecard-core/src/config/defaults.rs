// Single source of truth for all default values.

// --- Cache ---
pub const DEFAULT_STATIC_ROOT: &str = "static";
pub const DEFAULT_CACHE_DIR: &str = ".cache";
pub const DEFAULT_DB_FILENAME: &str = "catalog.db";
pub const DEFAULT_NAME_INDEX_FILENAME: &str = "name_id_cache.json";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Catalog ---
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("pokecard/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_OFFLINE_MODE: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
