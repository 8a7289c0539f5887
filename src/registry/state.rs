//! Registry snapshot handed to the persistence store.

use crate::models::Customer;

/// Ordered copy of every customer in a registry.
///
/// This is what crosses the persistence boundary. It never aliases the live
/// registry: [`Registry::snapshot`](super::Registry::snapshot) clones into it
/// and [`Registry::from_state`](super::Registry::from_state) consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryState {
    customers: Vec<Customer>,
}

impl RegistryState {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Customers in listing order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn into_customers(self) -> Vec<Customer> {
        self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
