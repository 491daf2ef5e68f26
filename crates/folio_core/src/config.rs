//! Environment-driven runtime settings.
//!
//! # Responsibility
//! - Resolve session capacity and logging settings from `FOLIO_*` variables.
//!
//! # Invariants
//! - Blank or unparsable values fall back to defaults instead of failing.

use crate::logging::default_log_level;
use crate::session::registry::DEFAULT_MAX_SESSIONS;
use std::path::PathBuf;

pub const ENV_MAX_SESSIONS: &str = "FOLIO_MAX_SESSIONS";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";

/// Runtime settings shared by the presentation-facing crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub max_sessions: usize,
    pub log_level: String,
    /// `None` keeps logging disabled.
    pub log_dir: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl FolioConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back per field.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            max_sessions: read(ENV_MAX_SESSIONS)
                .and_then(|value| value.parse::<usize>().ok())
                .filter(|value| *value > 0)
                .unwrap_or(defaults.max_sessions),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}
