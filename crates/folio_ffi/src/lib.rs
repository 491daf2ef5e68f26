//! Flutter-facing bindings for the Folio portfolio core.

pub mod api;
