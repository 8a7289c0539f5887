//! Customer model representing one directory entry.

use crate::domain::{CustomerName, EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer record.
///
/// Every field is a validated value object, so a `Customer` that exists is
/// always well formed. The `phone` field doubles as the record's identity key
/// inside a [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Display name (letters and spaces)
    pub name: CustomerName,

    /// Contact email address
    pub email: EmailAddress,

    /// Ten digit phone number, unique within a registry
    pub phone: PhoneNumber,
}

impl Customer {
    /// Build a customer from already validated fields.
    pub fn new(name: CustomerName, email: EmailAddress, phone: PhoneNumber) -> Self {
        Self { name, email, phone }
    }

    /// Validate raw field input and build a customer.
    ///
    /// Fields are checked in prompt order (name, email, phone) and the first
    /// failure is returned.
    pub fn parse(name: &str, email: &str, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: CustomerName::new(name)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Email: {}, Phone: {}",
            self.name, self.email, self.phone
        )
    }
}
