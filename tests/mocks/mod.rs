//! Test doubles shared by the integration tests.

mod mock_customer_store;

pub use mock_customer_store::MockCustomerStore;
