//! HTTP transport for the remote catalog.

pub mod http_client;

pub use http_client::{CatalogHttpClient, HttpClientConfig};
