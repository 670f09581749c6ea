//! Single write connection behind a mutex. Writes are serialized.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use pokecard_core::errors::PokecardResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> PokecardResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> PokecardResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    ///
    /// Callers on an async runtime go through `spawn_blocking` first.
    pub fn with_conn_sync<F, T>(&self, f: F) -> PokecardResult<T>
    where
        F: FnOnce(&Connection) -> PokecardResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
