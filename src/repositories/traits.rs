use crate::error::StoreResult;
use crate::registry::RegistryState;

/// Durable storage for the whole registry.
///
/// The registry is always saved and loaded as one unit. Implementations only
/// hold the state transiently while encoding or decoding it; the in-memory
/// [`Registry`](crate::registry::Registry) stays the source of truth.
pub trait CustomerStore: Send + Sync {
    /// Read the last saved state.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. Unreadable or
    /// corrupt data is an error.
    fn load(&self) -> StoreResult<Option<RegistryState>>;

    /// Replace the stored state with `state`.
    fn save(&self, state: &RegistryState) -> StoreResult<()>;
}
