//! Validation rules for interactively captured session fields.
//!
//! These are stricter than the store: hours and cost must be strictly
//! positive here, while [`SessionStore::add`](super::SessionStore::add)
//! accepts zero. Both rules are kept as they are.

use crate::domain::foundation::ValidationError;

/// Accepts any non-empty line of text, returned as typed.
pub fn validate_text(field: &str, raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(text.trim_start().to_string())
}

/// Parses a strictly positive, finite number.
pub fn validate_positive(field: &str, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::not_a_number(field))?;
    if !value.is_finite() {
        return Err(ValidationError::not_a_number(field));
    }
    if value <= 0.0 {
        return Err(ValidationError::not_positive(field, value));
    }
    Ok(value)
}
