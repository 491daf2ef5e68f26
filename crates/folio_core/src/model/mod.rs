//! Typed domain model for portfolio content.
//!
//! # Responsibility
//! - Define canonical records for projects, testimonials, timeline events,
//!   profile fields, skills, achievements and contact data.
//! - Own required-field validation shared by every write path.
//!
//! # Invariants
//! - Required text fields are non-empty after trimming whitespace.
//! - Constrained fields (`ProjectKind`, `ProjectYear`) are enums, never free text.
//! - Stored items are addressed by a stable `ItemId` assigned on append.

pub mod contact;
pub mod profile;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod timeline;
pub mod validation;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one stored collection item.
pub type ItemId = Uuid;

/// Stored read model: a collection item plus its session-local identity.
///
/// `item` is exactly the candidate that was appended; no field is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: ItemId,
    #[serde(flatten)]
    pub item: T,
}

impl<T> Record<T> {
    pub fn new(id: ItemId, item: T) -> Self {
        Self { id, item }
    }
}
