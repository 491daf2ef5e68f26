//! Core content logic for the Folio portfolio.
//! This crate is the single source of truth for content invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::FolioConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactLink, ContactMessage, ContactReceipt};
pub use model::profile::ProfileFields;
pub use model::project::{Project, ProjectKind, ProjectRecord, ProjectYear};
pub use model::skill::{Achievement, AchievementRecord, Skill, MAX_SKILL_LEVEL};
pub use model::testimonial::{Testimonial, TestimonialRecord};
pub use model::timeline::{TimelineEvent, TimelineEventRecord};
pub use model::validation::{ValidationError, ValidationReason};
pub use model::{ItemId, Record};
pub use repo::{RepoError, RepoResult};
pub use service::content_store::{ContentCounts, ContentStore, StoreError, StoreResult};
pub use service::project_filter::{ProjectFilter, ALL_FILTER_LABEL};
pub use session::registry::{SessionError, SessionId, SessionRegistry};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
