//! Email address utility functions for the password-reset service
//!
//! Normalization, format validation and log masking for email identities.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check: one `@`, non-empty local part, and a domain
/// with at least one dot. Deliverability is the mail provider's problem.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap()
});

/// Normalizes an email address for use as an identity key
///
/// Trims surrounding whitespace and lower-cases the whole address. Every
/// component of the reset flow addresses records through this form.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that a string looks like an email address
///
/// # Examples
///
/// ```
/// use tn_core::services::password_reset::email_utils::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example"));
/// assert!(!is_valid_email("not an email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Masks an email address for logging
///
/// Keeps the first character of the local part and the domain:
/// `sam.teal@example.com` becomes `s***@example.com`. Addresses without an
/// `@` are fully masked.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
