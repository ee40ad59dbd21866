//! Checklist state persistence.
//!
//! # Responsibility
//! - Define the injected item-list surface the host UI provides.
//! - Persist and restore per-page checked state through a `KeyValueStore`.
//!
//! # Invariants
//! - Stored state applies only when its length matches the live item count.
//! - Malformed or misshapen stored data is absence, never a hard error.

pub mod state_store;
pub mod surface;
