//! Collaborator traits consumed by the resolution engine.

pub mod cache_store;
pub mod catalog_source;
pub mod name_index;

pub use cache_store::ICacheStore;
pub use catalog_source::ICatalogSource;
pub use name_index::INameIndex;
