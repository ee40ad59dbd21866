//! Header offset synchronization.
//!
//! # Responsibility
//! - Mirror the header element's rendered height into a CSS custom property
//!   consumed by external stylesheets.
//!
//! # Invariants
//! - `sync` is a no-op when no header element is present.
//! - The property value is whole pixels, rounded to the nearest integer.

/// CSS custom property carrying the header height.
pub const HEADER_OFFSET_PROPERTY: &str = "--header-offset";

/// Host-provided layout access.
pub trait LayoutSurface {
    /// Rendered header height in pixels, `None` when no header exists.
    fn header_height_px(&self) -> Option<f64>;

    /// Writes one CSS custom property on the document root.
    fn set_css_property(&mut self, name: &str, value: &str);
}

/// Keeps `--header-offset` equal to the header's rendered height.
///
/// Driven externally on load and resize events; each call re-measures.
pub struct HeaderOffsetSync<L: LayoutSurface> {
    surface: L,
}

impl<L: LayoutSurface> HeaderOffsetSync<L> {
    pub fn new(surface: L) -> Self {
        Self { surface }
    }

    /// Releases the wrapped surface.
    pub fn into_inner(self) -> L {
        self.surface
    }

    /// Re-measures the header and updates the property.
    pub fn sync(&mut self) {
        let Some(height) = self.surface.header_height_px() else {
            return;
        };
        let value = format_offset(height);
        self.surface
            .set_css_property(HEADER_OFFSET_PROPERTY, &value);
    }
}

fn format_offset(height: f64) -> String {
    let rounded = if height.is_finite() && height > 0.0 {
        height.round() as u32
    } else {
        0
    };
    format!("{rounded}px")
}

#[cfg(test)]
mod tests {
    use super::{format_offset, HeaderOffsetSync, LayoutSurface, HEADER_OFFSET_PROPERTY};

    struct FakeLayout {
        height: Option<f64>,
        written: Vec<(String, String)>,
    }

    impl LayoutSurface for FakeLayout {
        fn header_height_px(&self) -> Option<f64> {
            self.height
        }

        fn set_css_property(&mut self, name: &str, value: &str) {
            self.written.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn sync_writes_rounded_pixel_value() {
        let mut sync = HeaderOffsetSync::new(FakeLayout {
            height: Some(63.6),
            written: Vec::new(),
        });
        sync.sync();
        let surface = sync.into_inner();
        assert_eq!(
            surface.written,
            vec![(HEADER_OFFSET_PROPERTY.to_string(), "64px".to_string())]
        );
    }

    #[test]
    fn sync_without_header_writes_nothing() {
        let mut sync = HeaderOffsetSync::new(FakeLayout {
            height: None,
            written: Vec::new(),
        });
        sync.sync();
        assert!(sync.into_inner().written.is_empty());
    }

    #[test]
    fn degenerate_heights_clamp_to_zero() {
        assert_eq!(format_offset(-5.0), "0px");
        assert_eq!(format_offset(f64::NAN), "0px");
        assert_eq!(format_offset(0.4), "0px");
    }
}
