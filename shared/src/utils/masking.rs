//! Display-masking utilities for contact details
//!
//! Masked forms appear in user-facing confirmation messages and in logs;
//! raw recipients never leave the service boundary.

/// Mask a mobile number, revealing only the last four characters
/// (e.g., `9876543210` becomes `******3210`).
///
/// Numbers shorter than four characters are returned unchanged.
pub fn mask_phone(number: &str) -> String {
    let len = number.chars().count();
    if len < 4 {
        return number.to_string();
    }
    let visible: String = number.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), visible)
}

/// Mask an email address, keeping the character immediately before the `@`
/// and everything after it (e.g., `john.doe@example.com` becomes
/// `*******e@example.com`).
///
/// Addresses without an `@`, or with a local part of one character, are
/// returned unchanged.
pub fn mask_email(email: &str) -> String {
    let Some(at_pos) = email.chars().position(|c| c == '@') else {
        return email.to_string();
    };
    if at_pos <= 1 {
        return email.to_string();
    }
    let tail: String = email.chars().skip(at_pos - 1).collect();
    format!("{}{}", "*".repeat(at_pos - 1), tail)
}
