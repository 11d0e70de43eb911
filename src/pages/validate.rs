//! Client-side form validation.
//!
//! These checks run before any network call; failures stay on the form and
//! never reach the session manager. The backend remains the authority.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimal email shape check: something before `@`, a dot in the domain.
pub fn email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required");
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Some("Enter a valid email address");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Some("Enter a valid email address");
    }
    None
}

/// Presence-only check used on the login form.
pub fn password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Password is required")
    } else {
        None
    }
}

/// Strength check for registration and password reset.
pub fn new_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Password is required")
    } else if value.chars().count() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

pub fn password_confirmation(value: &str, confirmation: &str) -> Option<&'static str> {
    if value == confirmation {
        None
    } else {
        Some("Passwords do not match")
    }
}

/// Verification codes are exactly six digits.
pub fn code(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        Some("Verification code is required")
    } else if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        Some("Verification code must be 6 digits")
    } else {
        None
    }
}

pub fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}
