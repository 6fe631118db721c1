//! Field-level validation shared by every entity.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Local part, a single `@`, and a dotted domain with no whitespace anywhere.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Validate that a required text field is not blank.
pub fn validate_required(name: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Validate that a number is strictly greater than zero.
pub fn validate_positive(name: &str, value: f64) -> Result<(), CoreError> {
    if value.is_nan() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a count is zero or more.
pub fn validate_non_negative(name: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    if !EMAIL_RE.is_match(value) {
        return Err(CoreError::Validation(format!(
            "email '{value}' is not a valid email address"
        )));
    }
    Ok(())
}
