//! # pokecard-storage
//!
//! The local tier of the resolution ladder: catalog records in SQLite keyed
//! by `(category, key)`, sprite images in a file tree, and the JSON
//! `name -> id` index.

pub mod engine;
pub mod migrations;
pub mod name_index;
pub mod pool;
pub mod queries;
pub mod sprites;

pub use engine::CacheStore;
pub use name_index::NameIndexCache;
pub use sprites::SpriteTree;

use pokecard_core::errors::{PokecardError, StorageError};

/// Convert a SQLite failure message into a `PokecardError`.
pub(crate) fn to_storage_err(message: String) -> PokecardError {
    StorageError::SqliteError { message }.into()
}

/// Convert a filesystem failure into a `PokecardError`.
pub(crate) fn to_io_err(path: &std::path::Path, err: std::io::Error) -> PokecardError {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}
