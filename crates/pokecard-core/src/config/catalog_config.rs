use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog REST API, without trailing slash.
    pub base_url: String,
    /// Base URL sprites are downloaded from.
    pub sprite_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Never contact the remote catalog; every remote rung fails.
    pub offline_mode: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_CATALOG_URL.to_string(),
            sprite_base_url: defaults::DEFAULT_SPRITE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            offline_mode: defaults::DEFAULT_OFFLINE_MODE,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
