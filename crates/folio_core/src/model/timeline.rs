//! Timeline event domain model.

use super::validation::{require, ValidationError};
use super::Record;
use serde::{Deserialize, Serialize};

/// Stored timeline event with its session-local identity.
pub type TimelineEventRecord = Record<TimelineEvent>;

/// One entry on the academic/project timeline.
///
/// `year` is display text ("2024", "Spring 2025"), not a calendar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub event: String,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(
        year: impl Into<String>,
        event: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            event: event.into(),
            description: description.into(),
        }
    }

    /// Checks that `year` and `event` are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("year", &self.year)?;
        require("event", &self.event)
    }
}
