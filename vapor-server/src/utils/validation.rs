//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. The store has no schema, so every limit lives here.

use crate::utils::AppError;

/// Entity names: product name, category, promo code, username
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and broadcast messages
pub const MAX_TEXT_LEN: usize = 1000;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a numeric field is not negative.
pub fn validate_non_negative(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

/// Validate that a numeric field falls inside an inclusive range.
pub fn validate_range(value: i64, field: &str, min: i64, max: i64) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max} (got {value})"
        )));
    }
    Ok(())
}
