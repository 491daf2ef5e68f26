//! Skill levels and achievements shown on the skills page.

use super::validation::{require, ValidationError};
use super::Record;
use serde::{Deserialize, Serialize};

/// Highest allowed skill level (percent).
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Stored achievement with its session-local identity.
pub type AchievementRecord = Record<Achievement>;

/// Programming skill with a self-assessed level in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        validate_skill_level(u32::from(self.level)).map(|_| ())
    }
}

/// Narrows a raw level to `u8`, rejecting values above `MAX_SKILL_LEVEL`.
pub fn validate_skill_level(level: u32) -> Result<u8, ValidationError> {
    if level > u32::from(MAX_SKILL_LEVEL) {
        return Err(ValidationError::out_of_range(
            "level",
            i64::from(level),
            i64::from(MAX_SKILL_LEVEL),
        ));
    }
    // Bounded above by MAX_SKILL_LEVEL.
    Ok(level as u8)
}

/// Certification or award line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub text: String,
}

impl Achievement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("text", &self.text)
    }
}
