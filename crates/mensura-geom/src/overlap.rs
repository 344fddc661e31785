//! Spatial relations between rectangles.
//!
//! Pure functions over [`Rect`] values, independent of what kind of entity a
//! rectangle was measured from. Results are always detached values.
//!
//! Boundary convention: rectangles whose edges merely touch do **not**
//! intersect. [`intersection`] reports `None` for them and [`distance`]
//! reports a gap of zero.

use crate::rect::{EdgeSizes, Rect};

/// Do the two rectangles strictly overlap (shared area, not just an edge)?
fn intersects(a: Rect, b: Rect) -> bool {
    a.left < b.right() && b.left < a.right() && a.top < b.bottom() && b.top < a.bottom()
}

/// Overlap of two rectangles, or `None` when they share no area.
fn narrow(a: Rect, b: Rect) -> Option<Rect> {
    let left = a.left.max(b.left);
    let top = a.top.max(b.top);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    (right > left && bottom > top).then(|| Rect::new(left, top, right - left, bottom - top))
}

/// The rectangle shared by `first` and every rectangle in `rest`.
///
/// Folds left to right, repeatedly narrowing the running rectangle to its
/// overlap with the next input; the emptiness test always compares the
/// accumulated rectangle against the next operand, so a three-way
/// intersection correctly comes out empty whenever two consecutive
/// narrowings fail. Returns `None` as soon as any narrowing produces no
/// shared area; with an empty `rest`, returns a copy of `first`.
///
/// For two rectangles the result is order-independent.
#[must_use]
pub fn intersection(first: Rect, rest: &[Rect]) -> Option<Rect> {
    rest.iter().try_fold(first, |narrowed, &next| {
        narrow(narrowed, next)
    })
}

/// Shortest distance between two non-overlapping rectangles.
///
/// `None` when the rectangles strictly overlap ("already overlapping" is a
/// normal outcome, not an error). Touching edges count as a distance of
/// `0.0`.
///
/// The plane around a rectangle divides into 8 zones: past each of the four
/// sides, and past each of the four corners. In a side zone only one axis has
/// a gap, so the hypotenuse degenerates to the perpendicular gap; in a corner
/// zone both axes gap and the result is the Euclidean distance between the
/// two nearest corners.
#[must_use]
pub fn distance(a: Rect, b: Rect) -> Option<f32> {
    if intersects(a, b) {
        return None;
    }

    let x_gap = if b.left >= a.right() {
        b.left - a.right()
    } else if a.left >= b.right() {
        a.left - b.right()
    } else {
        0.0
    };

    let y_gap = if b.top >= a.bottom() {
        b.top - a.bottom()
    } else if a.top >= b.bottom() {
        a.top - b.bottom()
    } else {
        0.0
    };

    Some(x_gap.hypot(y_gap))
}

/// Signed per-side gap between `target` and `container`.
///
/// Positive means `target` extends past `container` on that side; negative
/// means `container` extends past `target`. Defined even when the rectangles
/// do not intersect.
///
/// Each side compares the corresponding edges of the two rectangles
/// independently (not a swapped pairing), so the report is not antisymmetric
/// under swapping the operands:
///
/// ```text
/// left   = container.left  - target.left
/// right  = target.right    - container.right
/// top    = container.top   - target.top
/// bottom = target.bottom   - container.bottom
/// ```
#[must_use]
pub fn overflow(target: Rect, container: Rect) -> EdgeSizes {
    EdgeSizes {
        top: container.top - target.top,
        right: target.right() - container.right(),
        bottom: target.bottom() - container.bottom(),
        left: container.left - target.left,
    }
}
