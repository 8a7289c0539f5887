//! Customer Registry - an interactive console directory of customer records.
//!
//! Customers (name, email, phone) are kept in an insertion-ordered registry
//! keyed by phone number and persisted to a local JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects and the field validation predicates
//! - **models**: The `Customer` record
//! - **registry**: In-memory CRUD over customers with uniqueness invariants
//! - **repositories**: Persistence boundary (`CustomerStore`) and the JSON file store
//! - **services**: Session owner tying the registry to its store
//! - **shell**: Interactive menu driver
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod registry;
pub mod repositories;
pub mod services;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, RegistryError, RegistryResult, StoreError, StoreResult};
pub use models::Customer;
pub use registry::{CustomerUpdate, Registry, RegistryState};
pub use repositories::{CustomerStore, JsonFileStore};
pub use services::CustomerService;
pub use shell::Shell;
