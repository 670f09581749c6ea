/// pokecard version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest generation the catalog supports.
pub const MIN_GENERATION: u64 = 1;

/// Highest generation the catalog supports.
pub const MAX_GENERATION: u64 = 3;

/// Deepest rung of the fallback ladder (0 = local cache, 1 = remote catalog).
pub const MAX_DEPTH: u64 = 1;

/// Score multipliers per rarity.
pub const NORMAL_MULTIPLIER: u64 = 1;
pub const LEGENDARY_MULTIPLIER: u64 = 2;
pub const MYTHIC_MULTIPLIER: u64 = 5;

/// Sub-directory of the cache tree that holds sprite images.
pub const SPRITE_DIR: &str = "sprite";

/// File extension of cached sprites.
pub const SPRITE_EXTENSION: &str = "png";
