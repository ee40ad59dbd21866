//! Theme preference model.
//!
//! # Invariants
//! - The persisted form is a literal tag string (`light` / `dark`).
//! - An unknown or missing tag falls back to the default theme.

use serde::{Deserialize, Serialize};

/// Visual theme selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Literal tag written to the store.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored tag; unknown tags are treated as absent.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn tags_round_trip() {
        assert_eq!(Theme::from_tag("light"), Some(Theme::Light));
        assert_eq!(Theme::from_tag(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::Dark.as_tag(), "dark");
    }

    #[test]
    fn unknown_tag_is_absent() {
        assert_eq!(Theme::from_tag("solarized"), None);
        assert_eq!(Theme::from_tag(""), None);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
