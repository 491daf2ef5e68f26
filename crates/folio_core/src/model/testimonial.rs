//! Testimonial domain model.

use super::validation::{require, ValidationError};
use super::Record;
use serde::{Deserialize, Serialize};

/// Stored testimonial with its session-local identity.
pub type TestimonialRecord = Record<Testimonial>;

/// Quote from a person who worked with the portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    /// Role or relationship; optional free text.
    pub role: String,
    pub text: String,
}

impl Testimonial {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            text: text.into(),
        }
    }

    /// Checks that `name` and `text` are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("text", &self.text)
    }
}
