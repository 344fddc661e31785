//! Document-relative offsets and combined rectangles.
//!
//! [CSSOM View § 6.1](https://www.w3.org/TR/cssom-view-1/#dom-element-getboundingclientrect)
//!
//! An element's bounding box reports its border-layer corner in viewport
//! coordinates; everything here is expressed in one unified coordinate space
//! with the document's top-left as the origin. A `relative_to` argument
//! translates the result into another entity's space by subtracting that
//! entity's own offset.

use mensura_geom::{Edge, Offset, Rect};
use mensura_snapshot::{LayoutQuery, NodeId};

use crate::dimension::{height, width};
use crate::entity::{BoxTarget, Entity, RelativeTo};

/// Document-relative top-left corner of `target` at its requested box edge.
#[must_use]
pub fn offset<Q: LayoutQuery + ?Sized>(q: &Q, target: impl Into<BoxTarget>) -> Offset {
    target_offset(q, target.into())
}

/// Offset of `target` translated into the coordinate space of `relative_to`.
///
/// The origin is either another measured target (its own offset is
/// subtracted) or a literal point.
#[must_use]
pub fn offset_from<Q: LayoutQuery + ?Sized>(
    q: &Q,
    target: impl Into<BoxTarget>,
    relative_to: impl Into<RelativeTo>,
) -> Offset {
    let measured = target_offset(q, target.into());
    let origin = match relative_to.into() {
        RelativeTo::Target(other) => target_offset(q, other),
        RelativeTo::Point(point) => point,
    };
    Offset::new(measured.left - origin.left, measured.top - origin.top)
}

/// Size and offset of `target` combined into a document-relative [`Rect`].
#[must_use]
pub fn rect<Q: LayoutQuery + ?Sized>(q: &Q, target: impl Into<BoxTarget>) -> Rect {
    let target = target.into();
    let corner = target_offset(q, target);
    Rect::new(corner.left, corner.top, width(q, target), height(q, target))
}

/// [`rect`] translated into the coordinate space of `relative_to`.
#[must_use]
pub fn rect_from<Q: LayoutQuery + ?Sized>(
    q: &Q,
    target: impl Into<BoxTarget>,
    relative_to: impl Into<RelativeTo>,
) -> Rect {
    let target = target.into();
    let corner = offset_from(q, target, relative_to);
    Rect::new(corner.left, corner.top, width(q, target), height(q, target))
}

pub(crate) fn target_offset<Q: LayoutQuery + ?Sized>(q: &Q, target: BoxTarget) -> Offset {
    match target.entity {
        Entity::Element(node) => element_offset(q, node, target.edge),
        // The window's corner is wherever the document has been scrolled to.
        Entity::Window => q.scroll_offset(),
        Entity::Document => Offset::default(),
        Entity::Rect(rect) => Offset::new(rect.left, rect.top),
    }
}

/// Shift the border-layer corner outward or inward to the requested layer.
/// The scrollbar layer shares the padding layer's corner: scrollbars sit on
/// the far side of the box.
fn element_offset<Q: LayoutQuery + ?Sized>(q: &Q, node: NodeId, edge: Edge) -> Offset {
    let style = q.style(node);
    let boxed = q.border_box(node);
    let (left, top) = match edge {
        Edge::Margin => (
            boxed.left - style.margin.left.max(0.0),
            boxed.top - style.margin.top.max(0.0),
        ),
        Edge::Border => (boxed.left, boxed.top),
        Edge::Padding | Edge::Scrollbar => (
            boxed.left + style.border.left,
            boxed.top + style.border.top,
        ),
        Edge::Content => (
            boxed.left + style.border.left + style.padding.left,
            boxed.top + style.border.top + style.padding.top,
        ),
    };
    Offset::new(left, top)
}
