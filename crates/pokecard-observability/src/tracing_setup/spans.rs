//! Span definitions for the resolution ladder and the entity factory.

/// Span wrapping one facet resolution (validation, cache rung, remote rung).
#[macro_export]
macro_rules! resolution_span {
    ($facet:expr, $key:expr) => {
        tracing::debug_span!("pokecard.resolution", facet = %$facet, key = %$key)
    };
}

/// Span wrapping the assembly of one entity from its facets.
#[macro_export]
macro_rules! factory_span {
    ($entity:expr, $key:expr) => {
        tracing::info_span!("pokecard.factory", entity = %$entity, key = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RESOLUTION: &str = "pokecard.resolution";
    pub const FACTORY: &str = "pokecard.factory";
}
