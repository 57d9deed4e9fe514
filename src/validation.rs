//! Form Validation Helpers
//!
//! Pure checks over user-entered text. Each returns `None` when the value is
//! acceptable and a field-scoped error otherwise.

use serde::Serialize;

/// A failed check for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Rejects missing or whitespace-only values.
pub fn validate_required(value: Option<&str>, field: &str) -> Option<ValidationError> {
    if is_blank(value) {
        return Some(ValidationError::new(field, format!("{} is required", field)));
    }
    None
}

/// Checks the character count is within `min..=max`. Blank values count as too short.
pub fn validate_length(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Option<ValidationError> {
    let too_short = || {
        Some(ValidationError::new(
            field,
            format!("{} must be at least {} characters long", field, min),
        ))
    };

    if is_blank(Some(value)) {
        return too_short();
    }

    let len = value.chars().count();
    if len < min {
        return too_short();
    }
    if len > max {
        return Some(ValidationError::new(
            field,
            format!("{} must not exceed {} characters", field, max),
        ));
    }
    None
}

/// Accepts only non-empty strings of ASCII digits.
pub fn validate_numeric(value: &str, field: &str) -> Option<ValidationError> {
    if is_blank(Some(value)) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Some(ValidationError::new(
            field,
            format!("{} must contain only numbers", field),
        ));
    }
    None
}
