//! In-memory customer registry.
//!
//! The [`Registry`] owns every [`Customer`] and keys them by phone number in
//! insertion order. All operations are pure in-memory calls with no I/O, so the
//! registry can be driven directly from tests or from any front end.
//!
//! Invariants kept by every operation:
//!
//! - each key equals the `phone` field of its record
//! - no two records share a phone number
//! - listing order is insertion order; re-keying a record keeps its position
//! - a failed operation leaves the registry untouched

mod state;

pub use state::RegistryState;

use crate::domain::{CustomerName, EmailAddress, PhoneNumber};
use crate::error::{RegistryError, RegistryResult};
use crate::models::Customer;
use indexmap::IndexMap;
use tracing::debug;

/// Requested changes for [`Registry::update`].
///
/// Each field is independent. `None` or an empty string leaves the current
/// value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        provided(&self.name).is_none()
            && provided(&self.email).is_none()
            && provided(&self.phone).is_none()
    }
}

/// Treat `Some("")` the same as `None`.
fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Ordered mapping from phone number to customer.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    customers: IndexMap<PhoneNumber, Customer>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from a persisted snapshot, keeping its order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicatePhone` if two records in the snapshot
    /// share a phone number.
    pub fn from_state(state: RegistryState) -> RegistryResult<Self> {
        let mut customers = IndexMap::with_capacity(state.len());
        for customer in state.into_customers() {
            let key = customer.phone.clone();
            if customers.contains_key(&key) {
                return Err(RegistryError::DuplicatePhone(key.into_inner()));
            }
            customers.insert(key, customer);
        }
        Ok(Self { customers })
    }

    /// Take an ordered copy of every record for persistence.
    pub fn snapshot(&self) -> RegistryState {
        RegistryState::new(self.customers.values().cloned().collect())
    }

    /// Add a new customer at the end of the listing order.
    ///
    /// Fields are validated in order name, email, phone; then the phone is
    /// checked for uniqueness. The first failure is returned and nothing is
    /// inserted.
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> RegistryResult<&Customer> {
        let customer = Customer::parse(name, email, phone)?;
        if self.customers.contains_key(phone) {
            return Err(RegistryError::DuplicatePhone(phone.to_string()));
        }

        debug!(phone = %customer.phone, "Adding customer");
        let (index, _) = self.customers.insert_full(customer.phone.clone(), customer);
        Ok(&self.customers[index])
    }

    /// All customers in insertion order.
    pub fn list(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    /// Iterate over customers in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Customer> {
        self.customers.values()
    }

    /// Exact-match lookup by phone number.
    pub fn find_by_phone(&self, phone: &str) -> RegistryResult<&Customer> {
        self.customers
            .get(phone)
            .ok_or_else(|| RegistryError::NotFound(phone.to_string()))
    }

    /// Whether a customer is stored under `phone`.
    pub fn contains(&self, phone: &str) -> bool {
        self.customers.contains_key(phone)
    }

    /// Change any of a customer's fields, re-keying it if the phone changes.
    ///
    /// All requested changes are validated before any is applied, so the call
    /// either applies every change or none of them. A new phone equal to the
    /// current one is not a re-key. A re-keyed customer keeps its position in
    /// the listing order.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no customer has `phone`
    /// - `InvalidName`, `InvalidEmail`, `InvalidPhone` for malformed new values
    /// - `DuplicatePhone` if the new phone belongs to a different customer
    pub fn update(&mut self, phone: &str, changes: CustomerUpdate) -> RegistryResult<&Customer> {
        let index = self
            .customers
            .get_index_of(phone)
            .ok_or_else(|| RegistryError::NotFound(phone.to_string()))?;

        let name = provided(&changes.name).map(CustomerName::new).transpose()?;
        let email = provided(&changes.email).map(EmailAddress::new).transpose()?;
        let new_phone = provided(&changes.phone)
            .filter(|candidate| *candidate != phone)
            .map(PhoneNumber::new)
            .transpose()?;

        if let Some(ref new_phone) = new_phone {
            if self.customers.contains_key(new_phone) {
                return Err(RegistryError::DuplicatePhone(new_phone.to_string()));
            }
        }

        let Some(new_phone) = new_phone else {
            let customer = &mut self.customers[index];
            if let Some(name) = name {
                customer.name = name;
            }
            if let Some(email) = email {
                customer.email = email;
            }
            debug!(phone = %customer.phone, "Updated customer");
            return Ok(&self.customers[index]);
        };

        let (_, mut customer) = self
            .customers
            .shift_remove_index(index)
            .ok_or_else(|| RegistryError::NotFound(phone.to_string()))?;
        if let Some(name) = name {
            customer.name = name;
        }
        if let Some(email) = email {
            customer.email = email;
        }
        customer.phone = new_phone.clone();

        debug!(old_phone = %phone, new_phone = %new_phone, "Re-keyed customer");
        self.customers.shift_insert(index, new_phone, customer);
        Ok(&self.customers[index])
    }

    /// Remove and return the customer stored under `phone`.
    pub fn delete(&mut self, phone: &str) -> RegistryResult<Customer> {
        let customer = self
            .customers
            .shift_remove(phone)
            .ok_or_else(|| RegistryError::NotFound(phone.to_string()))?;
        debug!(phone = %customer.phone, "Deleted customer");
        Ok(customer)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
