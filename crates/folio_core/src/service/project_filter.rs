//! Project filter criteria.
//!
//! # Invariants
//! - A non-`All` criterion matches a project when its label equals the
//!   project's year label OR its type label.
//! - Available criteria are derived from current content: `All`, then
//!   distinct year labels sorted lexicographically, then distinct type labels
//!   sorted lexicographically.

use crate::model::project::{Project, ProjectKind, ProjectRecord, ProjectYear};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Label of the sentinel criterion that matches every project.
pub const ALL_FILTER_LABEL: &str = "All";

/// Criterion used to narrow the displayed project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    All,
    Year(ProjectYear),
    Kind(ProjectKind),
}

impl ProjectFilter {
    /// Parses a criterion label: `All`, a year label, or a type label.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label == ALL_FILTER_LABEL {
            return Some(Self::All);
        }
        ProjectYear::from_label(label)
            .map(Self::Year)
            .or_else(|| ProjectKind::from_label(label).map(Self::Kind))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_FILTER_LABEL,
            Self::Year(year) => year.label(),
            Self::Kind(kind) => kind.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            other => {
                let label = other.label();
                project.year.label() == label || project.kind.label() == label
            }
        }
    }

    /// Lazily yields the matching records, preserving input order.
    pub fn apply<'a>(
        &'a self,
        records: &'a [ProjectRecord],
    ) -> impl Iterator<Item = &'a ProjectRecord> + 'a {
        records.iter().filter(move |record| self.matches(&record.item))
    }
}

impl Display for ProjectFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives the selectable criteria for the given projects.
pub fn available_filters<'a>(projects: impl IntoIterator<Item = &'a Project>) -> Vec<ProjectFilter> {
    let mut years = BTreeMap::new();
    let mut kinds = BTreeMap::new();
    for project in projects {
        years.insert(project.year.label(), project.year);
        kinds.insert(project.kind.label(), project.kind);
    }

    let mut filters = Vec::with_capacity(1 + years.len() + kinds.len());
    filters.push(ProjectFilter::All);
    filters.extend(years.into_values().map(ProjectFilter::Year));
    filters.extend(kinds.into_values().map(ProjectFilter::Kind));
    filters
}
