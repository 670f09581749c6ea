/// Failures surfaced to callers of the entity factory.
///
/// Facet-level problems never show up here; they degrade to empty defaults
/// inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("no pokemon named {name:?} exists in the catalog")]
    EntityNotFound { name: String },

    #[error("roster index {index} out of range for roster of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("roster of generation {generation} is empty")]
    EmptyRoster { generation: u32 },
}
