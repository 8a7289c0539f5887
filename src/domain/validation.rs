//! Field validation predicates.
//!
//! These are total functions: they never panic and always answer with a
//! boolean. The value objects in this module call them at construction time,
//! and interactive drivers can call them directly to re-prompt a single field.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// `local@label.label.tld`, where the local part is word characters, hyphens
/// and dots, every domain label is word characters or hyphens, and the final
/// label is 2 to 4 characters long.
///
/// This is a format sanity check, not RFC 5322 validation.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` iff `phone` is exactly ten ASCII decimal digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` iff `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns `true` iff `name` is non-empty and made of ASCII letters and spaces.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}
