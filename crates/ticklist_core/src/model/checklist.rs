//! Checklist state model.
//!
//! # Responsibility
//! - Define the stored boolean sequence for one page's checklist.
//! - Define the page-path key that owns each stored entry.
//!
//! # Invariants
//! - Items carry no stable ID; a flag maps to an item by position only.
//! - A stored sequence may only be applied to a checklist of the same length.
//! - A `PageKey` is never empty; two keys collide only by literal equality.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ordered checked/unchecked flags for one page's checklist.
///
/// Serialized as a bare JSON array of booleans, one per rendered item in
/// document order. The shape deliberately has no version field or item IDs;
/// the length guard in the service layer is the only compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    flags: Vec<bool>,
}

impl ChecklistState {
    /// Builds a state snapshot from per-item flags in document order.
    pub fn new(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Number of items covered by this snapshot.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flags in document order.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Serializes this snapshot to its stored JSON text.
    pub fn to_stored_text(&self) -> String {
        // A Vec<bool> cannot fail JSON serialization.
        serde_json::to_string(&self.flags).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parses stored text back into a snapshot.
    ///
    /// Returns `None` for anything that is not a JSON array of booleans.
    /// Malformed entries are absence, not errors.
    pub fn from_stored_text(text: &str) -> Option<Self> {
        serde_json::from_str::<Vec<bool>>(text)
            .ok()
            .map(Self::new)
    }
}

impl From<Vec<bool>> for ChecklistState {
    fn from(flags: Vec<bool>) -> Self {
        Self::new(flags)
    }
}

/// Error for page keys that cannot own a store entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKeyError {
    Empty,
}

impl Display for PageKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "page key cannot be empty"),
        }
    }
}

impl Error for PageKeyError {}

/// Store key derived from the current page's path.
///
/// The path is kept literally; no normalization beyond trimming surrounding
/// whitespace is applied, so `/checklists/AIR` and `/checklists/AIR/` own
/// distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageKey(String);

impl PageKey {
    /// Creates a key from a page path.
    pub fn new(path: impl Into<String>) -> Result<Self, PageKeyError> {
        let path = path.into();
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(PageKeyError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
