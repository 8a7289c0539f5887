//! CustomerName value object.

use super::errors::ValidationError;
use super::validation::is_valid_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A customer's display name: non-empty, ASCII letters and spaces only.
///
/// # Example
///
/// ```
/// use customer_registry::domain::CustomerName;
///
/// assert!(CustomerName::new("Jane Doe").is_ok());
/// assert!(CustomerName::new("Jane3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    /// Create a new CustomerName, validating the characters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` for an empty name or one with
    /// digits, punctuation or other symbols.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !is_valid_name(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for CustomerName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CustomerName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
