//! Structured log events for the resolution ladder.
//!
//! Each function emits a `tracing` event with structured fields.

use pokecard_core::models::Facet;

/// Input failed validation; the facet returns its empty result.
pub fn input_rejected(facet: Facet, field: &str, value: &str, reason: &str) {
    tracing::error!(
        event = "input_rejected",
        facet = %facet,
        field = %field,
        value = %value,
        reason = %reason,
        "input rejected"
    );
}

/// The cache had no entry; the ladder moves to the remote rung.
pub fn cache_miss(facet: Facet, key: &str) {
    tracing::debug!(
        event = "cache_miss",
        facet = %facet,
        key = %key,
        rung = 0,
        "cache miss, escalating to remote catalog"
    );
}

/// A facet was served.
pub fn resolved(facet: Facet, key: &str, rung: u8) {
    tracing::debug!(
        event = "resolved",
        facet = %facet,
        key = %key,
        rung = rung,
        "facet resolved"
    );
}

/// A rung failed terminally; the facet returns its empty result.
pub fn resolution_failed(facet: Facet, key: &str, rung: u8, error: &str) {
    tracing::warn!(
        event = "resolution_failed",
        facet = %facet,
        key = %key,
        rung = rung,
        error = %error,
        "facet resolution failed, returning empty result"
    );
}

/// Writing a remote payload back into the cache failed. The facet result is unaffected.
pub fn write_through_failed(facet: Facet, key: &str, error: &str) {
    tracing::warn!(
        event = "write_through_failed",
        facet = %facet,
        key = %key,
        error = %error,
        "cache write-through failed"
    );
}

/// A new `name -> id` pair was added to the name index.
pub fn name_recorded(name: &str, id: u32) {
    tracing::info!(
        event = "name_recorded",
        name = %name,
        id = id,
        "name index updated"
    );
}
