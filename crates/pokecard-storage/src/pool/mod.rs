//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};

use rusqlite::{Connection, OpenFlags};

use pokecard_core::errors::PokecardResult;

use crate::to_storage_err;
use pragmas::apply_read_pragmas;

pub use write_connection::WriteConnection;

/// Upper bound on read connections, whatever the config asks for.
const MAX_READERS: usize = 8;

/// Read-only connections for cache lookups.
///
/// A lookup takes the first idle connection, scanning from a rotating start
/// so load spreads evenly, and only waits when every connection is busy.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    pub fn open(path: &Path, size: usize) -> PokecardResult<Self> {
        let connections = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn)?;
                Ok(Mutex::new(conn))
            })
            .collect::<PokecardResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn with_conn<F, T>(&self, f: F) -> PokecardResult<T>
    where
        F: FnOnce(&Connection) -> PokecardResult<T>,
    {
        let guard = self.acquire()?;
        f(&guard)
    }

    fn acquire(&self) -> PokecardResult<MutexGuard<'_, Connection>> {
        let n = self.connections.len();
        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % n;
        for offset in 0..n {
            match self.connections[(start + offset) % n].try_lock() {
                Ok(guard) => return Ok(guard),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(e)) => {
                    return Err(to_storage_err(format!("reader poisoned: {e}")))
                }
            }
        }
        self.connections[start]
            .lock()
            .map_err(|e| to_storage_err(format!("reader poisoned: {e}")))
    }
}

/// The single write connection plus the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer, run `init` on it, then open the readers.
    ///
    /// Readers are opened read-only, so the schema has to exist before they
    /// connect.
    pub fn open<F>(path: &Path, read_pool_size: usize, init: F) -> PokecardResult<Self>
    where
        F: FnOnce(&Connection) -> PokecardResult<()>,
    {
        let writer = WriteConnection::open(path)?;
        writer.with_conn_sync(init)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database. There is no read pool: separate in-memory
    /// connections would be separate databases.
    pub fn open_in_memory<F>(init: F) -> PokecardResult<Self>
    where
        F: FnOnce(&Connection) -> PokecardResult<()>,
    {
        let writer = WriteConnection::open_in_memory()?;
        writer.with_conn_sync(init)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Run a read-only closure on a reader, or on the writer when there is no pool.
    pub fn with_reader<F, T>(&self, f: F) -> PokecardResult<T>
    where
        F: FnOnce(&Connection) -> PokecardResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }
}
