use crate::errors::PokecardResult;

/// Persisted `name -> id` index.
///
/// `lookup` followed by `record` is not atomic. Two resolutions of the same
/// new name may both reach the remote catalog; the last full-map write wins.
/// Ids never change in the catalog, so a lost update only costs a fetch.
pub trait INameIndex: Send + Sync {
    /// Exact, case-sensitive lookup. A missing or unreadable index is empty.
    fn lookup(&self, name: &str) -> Option<u32>;

    /// Upsert `name -> id` and persist the whole mapping.
    fn record(&self, name: &str, id: u32) -> PokecardResult<()>;
}
