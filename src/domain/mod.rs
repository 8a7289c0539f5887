//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the three customer fields.
//! Each value object validates at construction time, so a `Customer` built
//! from them can never hold a malformed name, email or phone number.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod validation;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::CustomerName;
pub use phone::PhoneNumber;
pub use validation::{is_valid_email, is_valid_name, is_valid_phone};
