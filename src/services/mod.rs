//! Application service layer.
//!
//! Services own the session state and orchestrate the registry and its
//! persistence store. They provide a clean boundary between the interactive
//! shell and the data layer.

mod customer_service;

pub use customer_service::CustomerService;
