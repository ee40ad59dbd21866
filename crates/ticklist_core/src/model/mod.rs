//! Domain models for persisted UI state.
//!
//! # Responsibility
//! - Define the canonical shapes written to the key-value store.
//! - Keep serialization concerns out of the service layer.

pub mod checklist;
pub mod theme;
