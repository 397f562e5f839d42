use crate::{ScrollPosition, ViewportSize};

/// A viewport-relative rectangle of the placeholder element, as reported by
/// the rendering layer's measurement (the `getBoundingClientRect` shape).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientRect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ClientRect {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Computed left/top margins of the placeholder element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: f64,
    pub top: f64,
}

impl Margins {
    pub const ZERO: Self = Self { left: 0.0, top: 0.0 };

    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Parses computed-style margin values ("24px", "0", …). Absent or
    /// unparseable values are treated as 0.
    pub fn from_style_values(left: Option<&str>, top: Option<&str>) -> Self {
        Self {
            left: left.map(parse_px).unwrap_or(0.0),
            top: top.map(parse_px).unwrap_or(0.0),
        }
    }
}

fn parse_px(value: &str) -> f64 {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed);
    digits.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// One measurement of the placeholder: its viewport-relative rectangle plus
/// its computed margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderGeometry {
    pub rect: ClientRect,
    pub margins: Margins,
}

impl PlaceholderGeometry {
    pub const fn new(rect: ClientRect, margins: Margins) -> Self {
        Self { rect, margins }
    }

    /// Converts the measurement to a document-space bounding box.
    ///
    /// The scroll offset translates viewport-relative coordinates into
    /// document space; the margins shift the whole box, so the top margin is
    /// added to both top and bottom and the left margin to both left and
    /// right.
    pub fn bounding_box(&self, scroll: ScrollPosition) -> BoundingBox {
        BoundingBox {
            top: scroll.y + self.rect.top + self.margins.top,
            bottom: scroll.y + self.rect.bottom + self.margins.top,
            left: scroll.x + self.rect.left + self.margins.left,
            right: scroll.x + self.rect.right + self.margins.left,
        }
    }
}

/// Document-space bounding box of a tracked region. Derived per check, never
/// stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BoundingBox {
    /// Tests the box against a viewport enlarged by `threshold` pixels on all
    /// four sides. `threshold = 0` requires exact geometric overlap.
    pub fn in_viewport(&self, viewport: Viewport, threshold: f64) -> bool {
        viewport.top - threshold <= self.bottom
            && viewport.bottom + threshold >= self.top
            && viewport.left - threshold <= self.right
            && viewport.right + threshold >= self.left
    }
}

/// The visible rectangular region of the scrollable container, in document
/// space. Derived from a scroll offset and the window's client dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Viewport {
    pub fn from_scroll(scroll: ScrollPosition, size: ViewportSize) -> Self {
        Self {
            top: scroll.y,
            bottom: scroll.y + size.height,
            left: scroll.x,
            right: scroll.x + size.width,
        }
    }
}
