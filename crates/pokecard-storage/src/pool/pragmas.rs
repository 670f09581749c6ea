//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use pokecard_core::errors::PokecardResult;

use crate::to_storage_err;

/// WAL journal, NORMAL sync, 5s busy timeout.
pub fn apply_pragmas(conn: &Connection) -> PokecardResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -16000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Read-side pragmas. Skips everything that would write.
pub fn apply_read_pragmas(conn: &Connection) -> PokecardResult<()> {
    conn.execute_batch(
        "
        PRAGMA query_only = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Whether WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> PokecardResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
