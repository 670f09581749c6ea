//! SQL for the catalog cache table.

pub mod cache_ops;
