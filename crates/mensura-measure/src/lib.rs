//! Box-model measurement, containing-block resolution, and anchored
//! placement over a frozen layout snapshot.
//!
//! # Scope
//!
//! Everything here is a pure, synchronous read of a
//! [`LayoutQuery`](mensura_snapshot::LayoutQuery) implementation; nothing
//! mutates layout, style, or scroll state, and every
//! call is independently re-entrant. The components, leaf-first:
//!
//! - **Box geometry** ([`dimension`], [`offset`]): width, height, offset,
//!   and rect of an entity at any of the five box-model layers
//!   ([CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model)),
//!   including the scrollbar layer no native API exposes directly.
//! - **Resolvers** ([`containing`]): the containing-block and
//!   offset-container ancestor walks of
//!   [CSS Positioned Layout Level 3 § 2.1](https://www.w3.org/TR/css-position-3/#def-cb).
//! - **Placement solver** ([`place`]): anchor-point alignment with offsets
//!   and push/forcepush containment, built on box geometry and the overlap
//!   primitives of `mensura-geom`.
//!
//! # Example
//!
//! ```
//! use mensura_geom::{Edge, Rect};
//! use mensura_measure::{place, width, PlaceRequest};
//! use mensura_snapshot::{LayoutNode, LayoutSnapshot, NodeId};
//!
//! let mut snapshot = LayoutSnapshot::new(800.0, 600.0);
//! let target = snapshot.insert(NodeId::ROOT, LayoutNode::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! let tooltip = snapshot.insert(NodeId::ROOT, LayoutNode::new(Rect::new(10.0, 10.0, 10.0, 10.0)));
//!
//! assert!((width(&snapshot, (tooltip, Edge::Border)) - 10.0).abs() < 1e-6);
//!
//! let request = PlaceRequest::new(tooltip, target)
//!     .anchors_str("left top right bottom")
//!     .unwrap();
//! let position = place(&snapshot, &request);
//! assert!((position.left - 10.0).abs() < 1e-6);
//! assert!((position.top - 10.0).abs() < 1e-6);
//! ```

/// Containing-block and offset-container resolution per
/// [CSS Positioned Layout Level 3](https://www.w3.org/TR/css-position-3/).
pub mod containing;
/// Width and height at any box-model layer.
pub mod dimension;
/// Measurable entities and argument normalization.
pub mod entity;
/// Document-relative offsets and combined rectangles.
pub mod offset;
/// The anchored-placement solver.
pub mod place;

pub use containing::{
    containing_block, offset_container, ContainingBlock, OffsetContainer, ResolveOptions,
};
pub use dimension::{height, width};
pub use entity::{BoxTarget, Entity, RelativeTo};
pub use offset::{offset, offset_from, rect, rect_from};
pub use place::{
    place, place_with, Anchor, AnchorAxis, CollisionMode, CollisionRules, Containment,
    PlaceError, PlaceOffset, PlaceRequest, PlacementAnchors, PlacementData,
};
