//! Field validation for student input.
//!
//! Each rule is a plain function returning a [`FieldViolation`] on failure.
//! [`validate_new_student`] trims the raw values, runs every rule and collects
//! all violations so callers can log the complete picture at once. A
//! [`NewStudent`] only exists after every rule has passed.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use validator::{ValidateEmail, ValidateLength};

use crate::domain::entities::NewStudent;

/// Minimum name length in characters, after trimming.
pub const NAME_MIN_LENGTH: u64 = 2;
/// Maximum name length in characters, after trimming.
pub const NAME_MAX_LENGTH: u64 = 100;
/// Maximum email length in characters, after trimming.
pub const EMAIL_MAX_LENGTH: u64 = 255;

/// A single failed rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    /// Machine-readable rule name: `required`, `length` or `email`.
    pub code: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    const fn new(field: &'static str, code: &'static str, message: &'static str) -> Self {
        Self {
            field,
            code,
            message,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found while validating one student payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid student: {}", join(.violations))]
pub struct StudentValidationError {
    pub violations: Vec<FieldViolation>,
}

#[cfg(test)]
impl StudentValidationError {
    fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns true when the value is missing, empty or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Checks an already trimmed name.
///
/// # Errors
///
/// Returns a `required` violation for an empty name and a `length` violation
/// when it is outside 2..=100 characters.
pub fn validate_name(name: &str) -> Result<(), FieldViolation> {
    if name.is_empty() {
        return Err(FieldViolation::new("name", "required", "Name is required"));
    }

    if !name.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
        return Err(FieldViolation::new(
            "name",
            "length",
            "Name must be between 2 and 100 characters",
        ));
    }

    Ok(())
}

/// Checks an already trimmed email.
///
/// # Errors
///
/// Returns a `required` violation for an empty email, a `length` violation
/// above 255 characters and an `email` violation for anything that is not
/// shaped like an address.
pub fn validate_email(email: &str) -> Result<(), FieldViolation> {
    if email.is_empty() {
        return Err(FieldViolation::new("email", "required", "Email is required"));
    }

    if !email.validate_length(None, Some(EMAIL_MAX_LENGTH), None) {
        return Err(FieldViolation::new(
            "email",
            "length",
            "Email must not exceed 255 characters",
        ));
    }

    if !email.validate_email() {
        return Err(FieldViolation::new("email", "email", "Email must be valid"));
    }

    Ok(())
}

/// Trims and validates raw input, producing a domain [`NewStudent`].
///
/// # Errors
///
/// Returns [`StudentValidationError`] listing every failed rule on both fields.
pub fn validate_new_student(name: &str, email: &str) -> Result<NewStudent, StudentValidationError> {
    let name = name.trim();
    let email = email.trim();

    let violations: Vec<FieldViolation> = [validate_name(name), validate_email(email)]
        .into_iter()
        .filter_map(Result::err)
        .collect();

    if !violations.is_empty() {
        return Err(StudentValidationError { violations });
    }

    Ok(NewStudent::new(name, email))
}
