//! EntityFactory: assembles entities from facet results.
//!
//! Facets are resolved independently; one failing facet leaves its fields at
//! their empty defaults without affecting the others.

mod generation;
mod pokemon;

use crate::engine::ResolutionEngine;

#[derive(Clone)]
pub struct EntityFactory {
    engine: ResolutionEngine,
}

impl EntityFactory {
    pub fn new(engine: ResolutionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }
}
