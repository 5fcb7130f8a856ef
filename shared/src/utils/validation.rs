//! Recipient shape checks
//!
//! Checks are shape-only and never normalize: the recipient string doubles
//! as the passcode lookup key, so rewriting it here would split a
//! generate/verify pair across two keys.

use once_cell::sync::Lazy;
use regex::Regex;

// Basic RFC-ish address shape; deliverability is the mail provider's problem
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

// Bare national or international number without separators
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{10,15}$").unwrap()
});

/// Check if an email address has a sendable shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a mobile number is 10 to 15 bare digits
pub fn is_valid_mobile_number(number: &str) -> bool {
    MOBILE_REGEX.is_match(number)
}
