//! Core state persistence for the ticklist UI.
//! This crate owns checklist state, theme preference and refresh handling;
//! the host UI is injected behind surface traits.

pub mod checklist;
pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod refresh;
pub mod store;
pub mod theme;

pub use checklist::state_store::{ChecklistEvents, ChecklistStateStore};
pub use checklist::surface::ChecklistSurface;
pub use layout::{HeaderOffsetSync, LayoutSurface, HEADER_OFFSET_PROPERTY};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::checklist::{ChecklistState, PageKey, PageKeyError};
pub use model::theme::Theme;
pub use refresh::{PageReloader, RefreshListener, SseFrame};
pub use store::{KeyValueStore, MemoryKeyValueStore, StoreError, StoreResult};
pub use store::sqlite_store::SqliteKeyValueStore;
pub use theme::ThemeStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
