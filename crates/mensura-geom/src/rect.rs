//! Rectangle and offset value types.
//!
//! [CSSOM View § 9 Geometry](https://www.w3.org/TR/cssom-view-1/#geometry)
//!
//! All values are sub-pixel floats, matching the fractional coordinates native
//! bounding-box APIs report. Nothing here rounds.

use serde::Serialize;

/// A rectangle positioned in a flat 2D coordinate space.
///
/// [CSSOM View § 9](https://www.w3.org/TR/cssom-view-1/#the-domrect-interface)
/// "A DOMRect object represents a rectangle."
///
/// The derived edges maintain `right = left + width` and
/// `bottom = top + height`. A `Rect` is always a detached value: it never
/// aliases the entity it was measured from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Horizontal position of the left edge.
    pub left: f32,
    /// Vertical position of the top edge.
    pub top: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Build a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// "The right attribute must return left + width." (§ 9)
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// "The bottom attribute must return top + height." (§ 9)
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The same rectangle with its top-left corner moved to `at`.
    #[must_use]
    pub const fn positioned_at(&self, at: Offset) -> Self {
        Self {
            left: at.left,
            top: at.top,
            width: self.width,
            height: self.height,
        }
    }
}

/// A point in the same coordinate space as [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    /// Horizontal coordinate.
    pub left: f32,
    /// Vertical coordinate.
    pub top: f32,
}

impl Offset {
    /// Build an offset point.
    #[must_use]
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// Per-side values: edge thicknesses, or a signed per-side overflow report.
///
/// [CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model)
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas... determined by their respective edges."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EdgeSizes {
    /// Top edge value.
    pub top: f32,
    /// Right edge value.
    pub right: f32,
    /// Bottom edge value.
    pub bottom: f32,
    /// Left edge value.
    pub left: f32,
}

impl EdgeSizes {
    /// The same value on all four sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
