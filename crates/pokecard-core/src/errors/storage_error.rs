/// Local cache errors: SQLite records, sprite files, the name index file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no cached {category} entry for key {key}")]
    NotFound { category: String, key: String },

    #[error("cached {category} entry {key} is unusable: {reason}")]
    CorruptRecord {
        category: String,
        key: String,
        reason: String,
    },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
