//! Customer service layer.
//!
//! Ties the in-memory [`Registry`] to a [`CustomerStore`]: bootstraps the
//! registry on startup, persists after changes and checkpoints on shutdown.
//! Persistence failures are logged and never abort the session; the registry
//! in memory stays authoritative until a later save succeeds.

use crate::error::{RegistryResult, StoreResult};
use crate::models::Customer;
use crate::registry::{CustomerUpdate, Registry};
use crate::repositories::CustomerStore;
use tracing::{debug, info, warn};

/// Session owner of the registry and its store.
pub struct CustomerService {
    registry: Registry,
    store: Box<dyn CustomerStore>,
    autosave: bool,
}

impl CustomerService {
    /// Load the registry from `store`, falling back to an empty one.
    ///
    /// A missing, unreadable or corrupt store is not fatal: the session starts
    /// empty and the empty state is saved immediately so the next run finds a
    /// valid store.
    pub fn open(store: Box<dyn CustomerStore>, autosave: bool) -> Self {
        let (registry, bootstrap) = match store.load() {
            Ok(Some(state)) => match Registry::from_state(state) {
                Ok(registry) => (registry, false),
                Err(e) => {
                    warn!(error = %e, "Stored customers are inconsistent, starting empty");
                    (Registry::new(), true)
                }
            },
            Ok(None) => {
                warn!("Customer store not found, creating a new one");
                (Registry::new(), true)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read customer store, creating a new one");
                (Registry::new(), true)
            }
        };

        let service = Self::with_registry(registry, store, autosave);
        if bootstrap {
            service.checkpoint();
        }
        info!(count = service.registry.len(), "Customer registry ready");
        service
    }

    /// Wrap an existing registry without touching the store.
    pub fn with_registry(registry: Registry, store: Box<dyn CustomerStore>, autosave: bool) -> Self {
        Self {
            registry,
            store,
            autosave,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> RegistryResult<Customer> {
        let customer = self.registry.add(name, email, phone)?.clone();
        self.after_mutation("add");
        Ok(customer)
    }

    pub fn list(&self) -> Vec<&Customer> {
        self.registry.list()
    }

    pub fn find_by_phone(&self, phone: &str) -> RegistryResult<&Customer> {
        self.registry.find_by_phone(phone)
    }

    pub fn update(&mut self, phone: &str, changes: CustomerUpdate) -> RegistryResult<Customer> {
        if changes.is_empty() {
            return self.registry.find_by_phone(phone).cloned();
        }
        let customer = self.registry.update(phone, changes)?.clone();
        self.after_mutation("update");
        Ok(customer)
    }

    pub fn delete(&mut self, phone: &str) -> RegistryResult<Customer> {
        let customer = self.registry.delete(phone)?;
        self.after_mutation("delete");
        Ok(customer)
    }

    /// Save the full registry now.
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.registry.snapshot())
    }

    /// Save the full registry, logging instead of returning a failure.
    ///
    /// Returns whether the save succeeded.
    pub fn checkpoint(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save customers, keeping in-memory state");
                false
            }
        }
    }

    /// Final save before the process exits. Gives the registry back.
    pub fn shutdown(self) -> Registry {
        if self.checkpoint() {
            info!(count = self.registry.len(), "Customer registry saved on exit");
        }
        self.registry
    }

    fn after_mutation(&self, operation: &str) {
        if self.autosave {
            debug!(operation, "Autosaving customer registry");
            self.checkpoint();
        }
    }
}
