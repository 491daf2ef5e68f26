//! Required-field validation errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why one field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Field is empty or whitespace-only.
    Blank,
    /// Field carries a label outside its enum's label set.
    UnknownLabel(String),
    /// Numeric field is outside `0..=max`.
    OutOfRange { value: i64, max: i64 },
}

/// Rejection of a candidate record on one named field.
///
/// Raised before any storage call, so a rejected write never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn blank(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::Blank,
        }
    }

    pub fn unknown_label(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            reason: ValidationReason::UnknownLabel(value.into()),
        }
    }

    pub fn out_of_range(field: &'static str, value: i64, max: i64) -> Self {
        Self {
            field,
            reason: ValidationReason::OutOfRange { value, max },
        }
    }

    /// Returns whether this is a missing required field.
    pub fn is_blank(&self) -> bool {
        matches!(self.reason, ValidationReason::Blank)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            ValidationReason::Blank => write!(f, "`{}` is required", self.field),
            ValidationReason::UnknownLabel(value) => {
                write!(f, "`{}` has unknown value `{value}`", self.field)
            }
            ValidationReason::OutOfRange { value, max } => write!(
                f,
                "`{}` must be between 0 and {max}, got {value}",
                self.field
            ),
        }
    }
}

impl Error for ValidationError {}

/// Fails with `Blank` when `value` is empty after trimming.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require, ValidationError};

    #[test]
    fn require_rejects_whitespace_only() {
        assert_eq!(
            require("title", " \t\n").unwrap_err(),
            ValidationError::blank("title")
        );
        assert!(require("title", " x ").is_ok());
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(
            ValidationError::blank("description").to_string(),
            "`description` is required"
        );
        assert_eq!(
            ValidationError::out_of_range("level", 120, 100).to_string(),
            "`level` must be between 0 and 100, got 120"
        );
    }
}
