//! Rectangle, box-edge, and overlap primitives for the Mensura geometry engine.
//!
//! # Scope
//!
//! This crate implements the value types every other Mensura component speaks:
//! - **Rectangles** ([CSSOM View § 9](https://www.w3.org/TR/cssom-view-1/#the-domrect-interface))
//!   - `Rect` with the `right = left + width`, `bottom = top + height` invariant
//!   - `Offset` points and per-side `EdgeSizes`
//! - **Box edges** ([CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model))
//!   - the five nested layers: content, padding, scrollbar, border, margin
//! - **Overlap geometry**
//!   - intersection, distance, and signed per-side overflow between rectangles
//!
//! Everything here is a pure value computation: no entity is read, nothing is
//! cached, and all types are `Copy`.

/// Box-model layer enumeration per [CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model).
pub mod edge;
/// Spatial relations between rectangles: intersection, distance, overflow.
pub mod overlap;
/// Rectangle and offset value types per [CSSOM View § 9](https://www.w3.org/TR/cssom-view-1/#the-domrect-interface).
pub mod rect;

pub use edge::{Edge, ParseEdgeError};
pub use overlap::{distance, intersection, overflow};
pub use rect::{EdgeSizes, Offset, Rect};
