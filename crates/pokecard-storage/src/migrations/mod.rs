//! Schema migrations, tracked in `PRAGMA user_version`.

pub mod v001_catalog_cache;

use rusqlite::Connection;

use pokecard_core::errors::{PokecardResult, StorageError};

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> PokecardResult<()> {
    let current_version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;

    let migrations: &[(&str, u32)] = &[(v001_catalog_cache::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current_version < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::debug!(version = *version, "applied cache migration");
        }
    }
    Ok(())
}

/// Current `user_version` of a connection.
pub fn schema_version(conn: &Connection) -> PokecardResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| crate::to_storage_err(e.to_string()))
}
