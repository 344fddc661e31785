//! Width and height at any box-model layer.
//!
//! [CSSOM View § 5](https://www.w3.org/TR/cssom-view-1/#extensions-to-the-window-interface)
//! and [CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! An element's native bounding box reports the border layer. The functions
//! here invert the five nested layers around it: margins are added outward,
//! borders, scrollbar space, and paddings are peeled inward, stopping at the
//! requested [`Edge`]. The window and the document have entity-specific rules
//! instead of a box model.

use mensura_geom::{Edge, EdgeSizes};
use mensura_snapshot::{LayoutQuery, NodeId};

use crate::entity::{BoxTarget, Entity};

/// The axis a size is measured along. Picks which pair of edge thicknesses
/// applies and which perpendicular overflow value gates scrollbar space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Width of `target` at its requested box edge.
#[must_use]
pub fn width<Q: LayoutQuery + ?Sized>(q: &Q, target: impl Into<BoxTarget>) -> f32 {
    size(q, target.into(), Axis::Horizontal)
}

/// Height of `target` at its requested box edge.
#[must_use]
pub fn height<Q: LayoutQuery + ?Sized>(q: &Q, target: impl Into<BoxTarget>) -> f32 {
    size(q, target.into(), Axis::Vertical)
}

fn size<Q: LayoutQuery + ?Sized>(q: &Q, target: BoxTarget, axis: Axis) -> f32 {
    match target.entity {
        Entity::Element(node) => element_size(q, node, target.edge, axis),
        Entity::Window => window_size(q, target.edge, axis),
        Entity::Document => document_size(q, axis),
        // The identity case: a literal rectangle has no box layers.
        Entity::Rect(rect) => pick(axis, rect.width, rect.height),
    }
}

/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Walk from the border-box size reported by the bounding box to the
/// requested layer.
fn element_size<Q: LayoutQuery + ?Sized>(q: &Q, node: NodeId, edge: Edge, axis: Axis) -> f32 {
    let style = q.style(node);
    let boxed = q.border_box(node);
    let mut size = pick(axis, boxed.width, boxed.height);

    // STEP 1: the margin layer extends outward from the border box. Negative
    // margins pull adjacent content but never shrink the margin box below
    // the border box, so each side contributes max(0, margin).
    if edge == Edge::Margin {
        let (near, far) = sides(axis, style.margin);
        return size + near.max(0.0) + far.max(0.0);
    }
    if edge == Edge::Border {
        return size;
    }

    // STEP 2: peel the borders off to reach the scrollbar layer (the padding
    // box including any scrollbar-occupied space).
    let (border_near, border_far) = sides(axis, style.border);
    size -= border_near + border_far;
    if edge == Edge::Scrollbar {
        return size;
    }

    // STEP 3: subtract the scrollbar footprint, derived from the difference
    // between the (rounded) padding box and the integer client size. A
    // scrollbar only occupies space when the perpendicular axis can scroll,
    // and never on the root element, whose scrollbar belongs to the viewport.
    let perpendicular = pick(axis, style.overflow_y, style.overflow_x);
    if node != q.root() && perpendicular.is_scrollable() {
        let client = q.client_size(node);
        size -= (size.round() - pick(axis, client.0, client.1)).max(0.0);
    }
    if edge == Edge::Padding {
        return size;
    }

    // STEP 4: peel the paddings off to reach the content layer.
    let (padding_near, padding_far) = sides(axis, style.padding);
    size - padding_near - padding_far
}

/// [CSSOM View § 4.1](https://www.w3.org/TR/cssom-view-1/#dom-window-innerwidth)
///
/// The window is viewport-sized: with its classic scrollbar for the outer
/// layers (scrollbar and up), without it for the inner ones.
fn window_size<Q: LayoutQuery + ?Sized>(q: &Q, edge: Edge, axis: Axis) -> f32 {
    let (width, height) = if edge >= Edge::Scrollbar {
        q.viewport_size()
    } else {
        q.viewport_client_size()
    };
    pick(axis, width, height)
}

/// [CSSOM View § 5.3](https://www.w3.org/TR/cssom-view-1/#dom-element-scrollwidth)
///
/// The document is never measured smaller than what is visible: the maximum
/// of the scrollable extent, the viewport client extent, and the document
/// element's own bounding size. The box edge is irrelevant at this scale.
fn document_size<Q: LayoutQuery + ?Sized>(q: &Q, axis: Axis) -> f32 {
    let scroll = q.document_scroll_size();
    let client = q.viewport_client_size();
    let root = q.border_box(q.root());
    pick(axis, scroll.0, scroll.1)
        .max(pick(axis, client.0, client.1))
        .max(pick(axis, root.width, root.height))
}

/// Select the value belonging to `axis`.
const fn pick<T: Copy>(axis: Axis, horizontal: T, vertical: T) -> T {
    match axis {
        Axis::Horizontal => horizontal,
        Axis::Vertical => vertical,
    }
}

/// The pair of side thicknesses that bound `axis`: (left, right) or
/// (top, bottom).
const fn sides(axis: Axis, sizes: EdgeSizes) -> (f32, f32) {
    match axis {
        Axis::Horizontal => (sizes.left, sizes.right),
        Axis::Vertical => (sizes.top, sizes.bottom),
    }
}
