//! Per-session store ownership.
//!
//! # Responsibility
//! - Map session ids to independent `ContentStore` instances.
//! - Serialize operations on one session while keeping sessions isolated.
//!
//! # Invariants
//! - Sessions never share storage; closing one drops only its content.

pub mod registry;
