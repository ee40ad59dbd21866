//! Theme preference persistence.
//!
//! # Responsibility
//! - Persist the theme tag under one fixed key shared by every page.
//!
//! # Invariants
//! - Absent or unrecognized stored tags resolve to the default theme.

use crate::model::theme::Theme;
use crate::store::{KeyValueStore, StoreResult};
use log::debug;

/// Fixed store key for the theme tag; shared across all pages of the origin.
pub const THEME_KEY: &str = "theme";

/// Persists the user's theme choice through a `KeyValueStore`.
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Releases the wrapped backend.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Reads the active theme; absent or unknown tags fall back to default.
    pub fn load(&self) -> StoreResult<Theme> {
        let theme = match self.store.get(THEME_KEY)? {
            Some(tag) => Theme::from_tag(&tag).unwrap_or_default(),
            None => Theme::default(),
        };
        Ok(theme)
    }

    /// Persists the given theme.
    pub fn save(&self, theme: Theme) -> StoreResult<()> {
        self.store.set(THEME_KEY, theme.as_tag())?;
        debug!(
            "event=theme_save module=theme status=ok tag={}",
            theme.as_tag()
        );
        Ok(())
    }

    /// Flips the active theme, persists it and returns the new value.
    pub fn toggle(&self) -> StoreResult<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}
