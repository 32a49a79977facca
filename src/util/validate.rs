//! Form-field validation.
//!
//! Validation runs locally on submit; a field that fails never reaches the
//! network layer. Each validator returns `Some(message)` with the inline
//! error to show, or `None` when the field is acceptable.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate an email address: required and shaped like `local@domain.tld`.
pub fn email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required");
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Some("Enter a valid email");
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Some("Enter a valid email");
    }
    None
}

/// Validate a password: required, minimum length enforced.
pub fn password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Password is required");
    }
    if value.len() < MIN_PASSWORD_LEN {
        return Some("Password should be of minimum 8 char length");
    }
    None
}

/// Validate the first name on the registration form.
pub fn first_name(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("First name is required");
    }
    None
}
