//! Contact-point validation utilities.
//!
//! Registration accepts an email address and a phone number; both are
//! validated here so the core service and the API DTO layer agree on what a
//! well-formed contact point looks like.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Digits with optional leading + or (, separators allowed between groups
    Regex::new(r"^[+(]?[0-9][0-9 ().\-]{4,18}[0-9]$").expect("phone pattern must compile")
});

/// Check whether a string is a plausible email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check whether a string is a plausible phone number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Normalize an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
