//! v001: catalog_cache, one serialized catalog record per `(category, cache_key)`.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS catalog_cache (
    category    TEXT NOT NULL,
    cache_key   TEXT NOT NULL,
    body        TEXT NOT NULL,
    fetched_at  TEXT NOT NULL,
    PRIMARY KEY (category, cache_key)
) WITHOUT ROWID;

CREATE INDEX IF NOT EXISTS idx_catalog_cache_fetched ON catalog_cache(fetched_at);
";
