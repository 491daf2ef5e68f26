//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its constrained `type`/`year` enums.
//! - Map enum values to and from their display labels.
//!
//! # Invariants
//! - `title` and `description` are non-empty on creation and replacement.
//! - Year labels and type labels are disjoint string sets.

use super::validation::{require, ValidationError};
use super::Record;
use serde::{Deserialize, Serialize};

/// Stored project with its session-local identity.
pub type ProjectRecord = Record<Project>;

/// Project category shown in the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Individual,
    Group,
    Internship,
    Dissertation,
    ClassAssignment,
}

impl ProjectKind {
    /// Every kind in form-selector order.
    pub const ALL: [ProjectKind; 5] = [
        ProjectKind::Individual,
        ProjectKind::Group,
        ProjectKind::Internship,
        ProjectKind::Dissertation,
        ProjectKind::ClassAssignment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Group => "Group",
            Self::Internship => "Internship",
            Self::Dissertation => "Dissertation",
            Self::ClassAssignment => "Class Assignment",
        }
    }

    /// Parses an exact display label.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == value)
    }
}

/// Study year a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectYear {
    #[serde(rename = "year_1")]
    Year1,
    #[serde(rename = "year_2")]
    Year2,
    #[serde(rename = "year_3")]
    Year3,
    #[serde(rename = "final_year")]
    FinalYear,
}

impl ProjectYear {
    /// Every year in form-selector order.
    pub const ALL: [ProjectYear; 4] = [
        ProjectYear::Year1,
        ProjectYear::Year2,
        ProjectYear::Year3,
        ProjectYear::FinalYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Year1 => "Year 1",
            Self::Year2 => "Year 2",
            Self::Year3 => "Year 3",
            Self::FinalYear => "Final Year",
        }
    }

    /// Parses an exact display label.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|year| year.label() == value)
    }
}

/// Portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Serialized as `type` to match the form field naming.
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub year: ProjectYear,
    pub description: String,
    /// Free URL text; not checked beyond being stored verbatim.
    pub link: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        kind: ProjectKind,
        year: ProjectYear,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            year,
            description: description.into(),
            link: link.into(),
        }
    }

    /// Builds a candidate from raw form labels.
    ///
    /// # Errors
    /// - `UnknownLabel` on `type` or `year` when the label is not recognized.
    pub fn from_labels(
        title: impl Into<String>,
        kind_label: &str,
        year_label: &str,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let kind = ProjectKind::from_label(kind_label.trim())
            .ok_or_else(|| ValidationError::unknown_label("type", kind_label))?;
        let year = ProjectYear::from_label(year_label.trim())
            .ok_or_else(|| ValidationError::unknown_label("year", year_label))?;
        Ok(Self::new(title, kind, year, description, link))
    }

    /// Checks required fields.
    ///
    /// # Errors
    /// - `Blank` on `title` or `description`, reported in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}
