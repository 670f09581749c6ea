//! Top-level pokecard configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CacheConfig, CatalogConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up by [`PokecardConfig::load`].
pub const CONFIG_FILENAME: &str = "pokecard.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`POKECARD_*`)
/// 2. Project config (`pokecard.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PokecardConfig {
    pub cache: CacheConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl PokecardConfig {
    /// Load configuration with 3-layer resolution and validate the result.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PokecardConfig) -> Result<(), ConfigError> {
        if config.catalog.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "catalog.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.cache.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cache.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `POKECARD_*` environment variable overrides.
    fn apply_env_overrides(config: &mut PokecardConfig) -> Result<(), ConfigError> {
        if let Ok(root) = std::env::var("POKECARD_STATIC_ROOT") {
            config.cache.static_root = root;
        }
        if let Ok(url) = std::env::var("POKECARD_CATALOG_URL") {
            config.catalog.base_url = url;
        }
        if let Ok(val) = std::env::var("POKECARD_OFFLINE") {
            config.catalog.offline_mode = parse_bool("POKECARD_OFFLINE", &val)?;
        }
        if let Ok(val) = std::env::var("POKECARD_TIMEOUT_SECS") {
            config.catalog.timeout_secs =
                val.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: "POKECARD_TIMEOUT_SECS".to_string(),
                        message: format!("not a number: {val}"),
                    })?;
        }
        Ok(())
    }
}

fn parse_bool(field: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("not a boolean: {val}"),
        }),
    }
}
