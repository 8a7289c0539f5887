//! Error types for the customer registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by registry operations.
///
/// Every variant carries the input that caused it. None of them is fatal: the
/// format variants are fixed by re-entering one field, `DuplicatePhone` by
/// choosing another number, and `NotFound` by re-entering or abandoning the
/// lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Name is empty or contains something other than letters and spaces
    #[error("Invalid name format: {0:?}")]
    InvalidName(String),

    /// Email does not have the local@domain.tld shape
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Phone is not exactly ten digits
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),

    /// Phone number already belongs to another customer
    #[error("Phone number already exists for another customer: {0}")]
    DuplicatePhone(String),

    /// No customer is stored under this phone number
    #[error("Customer with phone number {0} not found")]
    NotFound(String),
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidName(name) => Self::InvalidName(name),
            ValidationError::InvalidEmail(email) => Self::InvalidEmail(email),
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
        }
    }
}

/// Errors that can occur while loading or saving the persisted registry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem operation failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode the store document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store was written by an incompatible format version
    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u32),

    /// Store decoded but its records break registry invariants
    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
