//! # pokecard-resolution
//!
//! Turns an id, a name or a generation number into a fully populated entity.
//! Every facet is looked up in the local cache first and, on a cache miss
//! only, in the remote catalog once. Failures degrade to the facet's empty
//! result; only "no such entity" and roster index errors reach callers.

pub mod async_api;
pub mod engine;
pub mod factory;
pub mod ladder;
pub mod parsers;
pub mod resolver;
pub mod validator;

pub use async_api::AsyncResolver;
pub use engine::ResolutionEngine;
pub use factory::EntityFactory;
pub use ladder::Rung;
pub use resolver::Resolver;
pub use validator::{GenerationCheck, NameCheck};
