//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into session-level content operations.
//! - Keep presentation layers decoupled from storage details.

pub mod content_store;
pub mod project_filter;
pub mod seed;
