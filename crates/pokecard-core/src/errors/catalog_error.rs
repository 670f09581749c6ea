/// Remote catalog errors. Every variant is terminal for the fallback ladder.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("remote catalog has no resource {resource}")]
    NotFound { resource: String },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("could not decode catalog payload: {reason}")]
    DecodeFailed { reason: String },

    #[error("remote catalog unavailable: {reason}")]
    Unavailable { reason: String },
}
