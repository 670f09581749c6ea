//! Error handling for pokecard.
//! One error enum per subsystem, `thiserror` only, aggregated into [`PokecardError`].

pub mod catalog_error;
pub mod config_error;
pub mod resolution_error;
pub mod storage_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use resolution_error::ResolutionError;
pub use storage_error::StorageError;

/// Top-level error for every pokecard operation.
#[derive(Debug, thiserror::Error)]
pub enum PokecardError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("resolution error: {0}")]
    ResolutionError(#[from] ResolutionError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("background task failed: {reason}")]
    TaskFailed { reason: String },
}

/// Convenience alias used across the workspace.
pub type PokecardResult<T> = Result<T, PokecardError>;

impl PokecardError {
    /// True when the local cache has no entry for the requested key.
    ///
    /// This is the only failure that moves the fallback ladder from the cache
    /// rung to the remote rung.
    pub fn is_not_found_locally(&self) -> bool {
        matches!(self, Self::StorageError(StorageError::NotFound { .. }))
    }
}
