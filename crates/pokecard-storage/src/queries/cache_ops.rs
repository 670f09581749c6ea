//! Record lookup and upsert on `catalog_cache`.

use rusqlite::{params, Connection, OptionalExtension};

use pokecard_core::errors::PokecardResult;

use crate::to_storage_err;

/// Body stored under `(category, key)`, if any.
pub fn get_record(conn: &Connection, category: &str, key: &str) -> PokecardResult<Option<String>> {
    conn.query_row(
        "SELECT body FROM catalog_cache WHERE category = ?1 AND cache_key = ?2",
        params![category, key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert or overwrite the record under `(category, key)`.
pub fn upsert_record(
    conn: &Connection,
    category: &str,
    key: &str,
    body: &str,
    fetched_at: &str,
) -> PokecardResult<()> {
    conn.execute(
        "INSERT INTO catalog_cache (category, cache_key, body, fetched_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(category, cache_key) DO UPDATE SET
            body = excluded.body,
            fetched_at = excluded.fetched_at",
        params![category, key, body, fetched_at],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Number of records in a category.
pub fn count_records(conn: &Connection, category: &str) -> PokecardResult<u64> {
    conn.query_row(
        "SELECT COUNT(*) FROM catalog_cache WHERE category = ?1",
        params![category],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n.max(0) as u64)
    .map_err(|e| to_storage_err(e.to_string()))
}
