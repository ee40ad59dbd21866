//! Checklist state store.
//!
//! # Responsibility
//! - Persist the checked flags of every rendered item under the page key.
//! - Restore persisted flags on page ready, guarded by an exact length match.
//!
//! # Invariants
//! - `save` never writes when zero items are rendered.
//! - `load` applies a stored sequence only when its length equals the live
//!   item count; anything else is discarded silently.
//! - Every item mutation through `set_item` persists the full list
//!   immediately; there is no separate commit step.

use crate::checklist::surface::ChecklistSurface;
use crate::model::checklist::{ChecklistState, PageKey};
use crate::store::{KeyValueStore, StoreResult};
use log::debug;

/// Persists and restores one page's checklist state.
///
/// Generic over the injected store backend and item surface so the component
/// runs without a real browser environment.
pub struct ChecklistStateStore<S: KeyValueStore, V: ChecklistSurface> {
    store: S,
    surface: V,
    page: PageKey,
}

impl<S: KeyValueStore, V: ChecklistSurface> ChecklistStateStore<S, V> {
    /// Binds a store backend and item surface to one page key.
    pub fn new(store: S, surface: V, page: PageKey) -> Self {
        Self {
            store,
            surface,
            page,
        }
    }

    /// Page key owning this checklist's stored entry.
    pub fn page(&self) -> &PageKey {
        &self.page
    }

    /// Read access to the injected surface.
    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Releases the wrapped backend and surface.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.surface)
    }

    /// Serializes every item's checked flag and writes it under the page key.
    ///
    /// No-op when zero items are rendered: no write, no error.
    pub fn save(&mut self) -> StoreResult<()> {
        let count = self.surface.item_count();
        if count == 0 {
            return Ok(());
        }

        let flags = (0..count)
            .map(|index| self.surface.is_checked(index))
            .collect::<Vec<_>>();
        let snapshot = ChecklistState::new(flags);
        self.store
            .set(self.page.as_str(), &snapshot.to_stored_text())?;
        debug!(
            "event=state_save module=checklist status=ok page={} items={}",
            self.page, count
        );
        Ok(())
    }

    /// Restores the stored sequence onto the live items.
    ///
    /// Absent entries, undecodable text and length mismatches all leave the
    /// items untouched; no partial application ever happens.
    pub fn load(&mut self) -> StoreResult<()> {
        let count = self.surface.item_count();
        if count == 0 {
            return Ok(());
        }

        let Some(text) = self.store.get(self.page.as_str())? else {
            return Ok(());
        };

        let Some(snapshot) = ChecklistState::from_stored_text(&text) else {
            debug!(
                "event=state_discard module=checklist reason=undecodable page={}",
                self.page
            );
            return Ok(());
        };

        if snapshot.len() != count {
            debug!(
                "event=state_discard module=checklist reason=length_mismatch page={} stored={} live={}",
                self.page,
                snapshot.len(),
                count
            );
            return Ok(());
        }

        for (index, &checked) in snapshot.flags().iter().enumerate() {
            self.surface.set_checked(index, checked);
            self.surface.set_marker(index, checked);
        }
        debug!(
            "event=state_load module=checklist status=ok page={} items={}",
            self.page, count
        );
        Ok(())
    }

    /// Unchecks every item, clears every marker and deletes the stored entry.
    ///
    /// Idempotent: succeeds with zero items and with no stored entry.
    pub fn reset(&mut self) -> StoreResult<()> {
        let count = self.surface.item_count();
        for index in 0..count {
            self.surface.set_checked(index, false);
            self.surface.set_marker(index, false);
        }
        self.store.remove(self.page.as_str())?;
        debug!(
            "event=state_reset module=checklist status=ok page={} items={}",
            self.page, count
        );
        Ok(())
    }

    /// Applies one item's flag, updates its marker and persists the full list.
    ///
    /// Out-of-range indices are ignored. The immediate save is intentional
    /// coupling: every visual update persists state.
    pub fn set_item(&mut self, index: usize, checked: bool) -> StoreResult<()> {
        if index >= self.surface.item_count() {
            return Ok(());
        }
        self.surface.set_checked(index, checked);
        self.surface.set_marker(index, checked);
        self.save()
    }
}

/// Capability set the host event loop drives the component through.
///
/// All handlers are synchronous and run to completion before the next event
/// is processed.
pub trait ChecklistEvents {
    /// Page finished loading: restore persisted state.
    fn on_ready(&mut self) -> StoreResult<()>;

    /// User toggled one item.
    fn on_change(&mut self, index: usize, checked: bool) -> StoreResult<()>;

    /// User triggered the reset control.
    fn on_reset(&mut self) -> StoreResult<()>;
}

impl<S: KeyValueStore, V: ChecklistSurface> ChecklistEvents for ChecklistStateStore<S, V> {
    fn on_ready(&mut self) -> StoreResult<()> {
        self.load()
    }

    fn on_change(&mut self, index: usize, checked: bool) -> StoreResult<()> {
        self.set_item(index, checked)
    }

    fn on_reset(&mut self) -> StoreResult<()> {
        self.reset()
    }
}
