//! Injected checklist item surface.

/// Host-provided access to the rendered checklist items.
///
/// The real embedding backs this with the page's checkbox rows in document
/// order; tests back it with plain vectors. Items are addressed by position
/// only, there is no stable per-item identifier.
///
/// Implementations must tolerate `set_checked`/`set_marker` for any index
/// below `item_count()`; callers never pass indices at or above it.
pub trait ChecklistSurface {
    /// Number of items currently rendered.
    fn item_count(&self) -> usize;

    /// Checked flag of the item at `index`.
    fn is_checked(&self, index: usize) -> bool;

    /// Sets the checked flag of the item at `index`.
    fn set_checked(&mut self, index: usize, checked: bool);

    /// Adds or removes the visual "checked" marker on the item's label.
    fn set_marker(&mut self, index: usize, marked: bool);
}
