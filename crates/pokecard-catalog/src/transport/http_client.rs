//! Blocking HTTP client with timeout and gzip.
//!
//! Exactly one attempt per request: the resolution ladder bounds each facet to
//! one remote access, so nothing here retries.

use std::sync::OnceLock;
use std::time::Duration;

use pokecard_core::config::CatalogConfig;
use pokecard_core::errors::{CatalogError, PokecardError, PokecardResult};
use serde::de::DeserializeOwned;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, connect included.
    pub timeout: Duration,
    pub user_agent: String,
}

impl From<&CatalogConfig> for HttpClientConfig {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

fn net_err(reason: String) -> PokecardError {
    CatalogError::NetworkError { reason }.into()
}

/// HTTP transport client. The underlying reqwest client is built lazily on
/// first use and reused for every request after that.
#[derive(Debug)]
pub struct CatalogHttpClient {
    config: HttpClientConfig,
    client: OnceLock<reqwest::blocking::Client>,
}

impl CatalogHttpClient {
    pub fn new(config: HttpClientConfig) -> Self {
        Self {
            config,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> PokecardResult<&reqwest::blocking::Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent.clone())
            .gzip(true)
            .build()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;
        Ok(self.client.get_or_init(|| client))
    }

    fn send(&self, url: &str) -> PokecardResult<reqwest::blocking::Response> {
        tracing::debug!(url = %url, "catalog GET");
        let resp = self
            .client()?
            .get(url)
            .send()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                resource: url.to_string(),
            }
            .into());
        }
        Err(CatalogError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        }
        .into())
    }

    /// GET `url` and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> PokecardResult<T> {
        let body = self
            .send(url)?
            .text()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            CatalogError::DecodeFailed {
                reason: format!("{url}: {e}"),
            }
            .into()
        })
    }

    /// GET `url` and return the raw body.
    pub fn get_bytes(&self, url: &str) -> PokecardResult<Vec<u8>> {
        self.send(url)?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e: reqwest::Error| net_err(e.to_string()))
    }
}
