use customer_registry::error::{StoreError, StoreResult};
use customer_registry::registry::RegistryState;
use customer_registry::repositories::CustomerStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock customer store for testing.
///
/// Provides an in-memory implementation of CustomerStore that can be seeded
/// with state, told to fail, and tracks method calls for verification.
/// Clones share the same state, so a test can keep one handle while the
/// service owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCustomerStore {
    saved: Arc<Mutex<Option<RegistryState>>>,
    fail_loads: Arc<Mutex<bool>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockCustomerStore {
    /// Create a new store with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `state`.
    pub fn with_state(state: RegistryState) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(state);
        store
    }

    /// Make every load fail as if the store were corrupt.
    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Make every save fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved state.
    pub fn saved_state(&self) -> Option<RegistryState> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl CustomerStore for MockCustomerStore {
    fn load(&self) -> StoreResult<Option<RegistryState>> {
        self.track_call("load");

        if *self.fail_loads.lock().unwrap() {
            return Err(StoreError::Corrupt("mock load failure".to_string()));
        }
        Ok(self.saved_state())
    }

    fn save(&self, state: &RegistryState) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io {
                path: "mock://customers".into(),
                source: io::Error::new(io::ErrorKind::Other, "mock save failure"),
            });
        }
        *self.saved.lock().unwrap() = Some(state.clone());
        Ok(())
    }
}
