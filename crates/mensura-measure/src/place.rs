//! The anchored-placement solver.
//!
//! [CSS Anchor Positioning § 2](https://www.w3.org/TR/css-anchor-position-1/#positioning)
//! solves a similar problem declaratively; this module does it as a direct
//! computation: align an anchor point of the placed rectangle with an anchor
//! point of the target rectangle, apply an offset, and optionally push the
//! result back inside a containment boundary when it overflows.
//!
//! All rectangles are resolved in the shared document coordinate space, so
//! the returned position is directly comparable to [`crate::offset::rect`]
//! output for the same element.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumString};
use thiserror::Error;

use mensura_geom::{overflow, EdgeSizes, Offset, Rect};
use mensura_snapshot::LayoutQuery;

use crate::entity::BoxTarget;
use crate::offset::rect;

/// A named reference location on one axis of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Anchor {
    /// The left/top edge.
    #[default]
    Start,
    /// The midpoint.
    Center,
    /// The right/bottom edge.
    End,
}

impl Anchor {
    /// The anchor's coordinate on an axis spanning `[start, start + size]`.
    #[must_use]
    pub fn resolve(self, start: f32, size: f32) -> f32 {
        start + self.offset_within(size)
    }

    /// The anchor's distance from the start edge of a box of the given size.
    #[must_use]
    pub fn offset_within(self, size: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => size / 2.0,
            Self::End => size,
        }
    }

    fn from_keyword(token: &str, axis: AnchorAxis) -> Result<Self, PlaceError> {
        let anchor = match (token, axis) {
            ("left", AnchorAxis::X) | ("top", AnchorAxis::Y) => Self::Start,
            ("center", _) => Self::Center,
            ("right", AnchorAxis::X) | ("bottom", AnchorAxis::Y) => Self::End,
            _ => {
                return Err(PlaceError::AnchorKeyword {
                    token: token.to_string(),
                    axis,
                })
            }
        };
        Ok(anchor)
    }
}

/// The axis an anchor keyword belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize)]
pub enum AnchorAxis {
    /// Horizontal: `left | center | right`.
    #[strum(serialize = "x")]
    X,
    /// Vertical: `top | center | bottom`.
    #[strum(serialize = "y")]
    Y,
}

/// The four anchors of one placement: the placed element's x/y pair followed
/// by the target's x/y pair.
///
/// Parsed from the 4-token keyword string, e.g. `"left top right bottom"` =
/// the element's left/top corner aligned to the target's right/bottom corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlacementAnchors {
    /// Horizontal anchor on the placed element.
    pub element_x: Anchor,
    /// Vertical anchor on the placed element.
    pub element_y: Anchor,
    /// Horizontal anchor on the target.
    pub target_x: Anchor,
    /// Vertical anchor on the target.
    pub target_y: Anchor,
}

impl PlacementAnchors {
    /// Anchors given explicitly, element pair first.
    #[must_use]
    pub const fn new(element_x: Anchor, element_y: Anchor, target_x: Anchor, target_y: Anchor) -> Self {
        Self {
            element_x,
            element_y,
            target_x,
            target_y,
        }
    }
}

impl FromStr for PlacementAnchors {
    type Err = PlaceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = input.split_ascii_whitespace().collect();
        let [element_x, element_y, target_x, target_y] = tokens.as_slice() else {
            return Err(PlaceError::AnchorCount {
                input: input.to_string(),
                got: tokens.len(),
            });
        };
        Ok(Self {
            element_x: Anchor::from_keyword(element_x, AnchorAxis::X)?,
            element_y: Anchor::from_keyword(element_y, AnchorAxis::Y)?,
            target_x: Anchor::from_keyword(target_x, AnchorAxis::X)?,
            target_y: Anchor::from_keyword(target_y, AnchorAxis::Y)?,
        })
    }
}

/// An extra shift applied after anchor alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PlaceOffset {
    /// An absolute pixel shift.
    Px(f32),
    /// A shift relative to the placed element's own size on that axis
    /// (`100.0` = one full element length).
    Percent(f32),
}

impl PlaceOffset {
    /// The shift in pixels, given the placed element's size on this axis.
    #[must_use]
    pub fn resolve(self, element_size: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(percent) => percent / 100.0 * element_size,
        }
    }
}

impl Default for PlaceOffset {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl From<f32> for PlaceOffset {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

impl FromStr for PlaceOffset {
    type Err = PlaceError;

    /// Accepts `"12"`, `"12px"`, and `"-7.5%"` forms.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let malformed = || PlaceError::Offset {
            input: input.to_string(),
        };
        if let Some(percent) = trimmed.strip_suffix('%') {
            return percent
                .trim_end()
                .parse()
                .map(Self::Percent)
                .map_err(|_| malformed());
        }
        trimmed
            .strip_suffix("px")
            .map_or(trimmed, str::trim_end)
            .parse()
            .map(Self::Px)
            .map_err(|_| malformed())
    }
}

/// What to do when the placed rectangle overflows the boundary on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum CollisionMode {
    /// Leave the overflow alone.
    None,
    /// Shift the rectangle inward, but never so far that it starts
    /// overflowing the opposite side.
    #[default]
    Push,
    /// Shift the rectangle inward unconditionally; wins over the opposite
    /// side's wishes.
    ForcePush,
}

/// Per-side collision modes for a containment boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollisionRules {
    /// Mode for overflow past the boundary's left edge.
    pub left: CollisionMode,
    /// Mode for overflow past the boundary's right edge.
    pub right: CollisionMode,
    /// Mode for overflow past the boundary's top edge.
    pub top: CollisionMode,
    /// Mode for overflow past the boundary's bottom edge.
    pub bottom: CollisionMode,
}

impl CollisionRules {
    /// The same mode on all four sides.
    #[must_use]
    pub const fn all(mode: CollisionMode) -> Self {
        Self {
            left: mode,
            right: mode,
            top: mode,
            bottom: mode,
        }
    }

    /// One mode per axis.
    #[must_use]
    pub const fn axes(x: CollisionMode, y: CollisionMode) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }
}

impl Default for CollisionRules {
    fn default() -> Self {
        Self::all(CollisionMode::Push)
    }
}

/// A containment boundary with its per-side overflow policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Containment {
    /// The boundary the placed rectangle should stay inside.
    pub within: BoxTarget,
    /// What to do per side when it does not.
    pub on_overflow: CollisionRules,
}

impl Containment {
    /// Contain within `boundary`, pushing on every side.
    #[must_use]
    pub fn new(boundary: impl Into<BoxTarget>) -> Self {
        Self {
            within: boundary.into(),
            on_overflow: CollisionRules::default(),
        }
    }

    /// Replace the per-side overflow policy.
    #[must_use]
    pub const fn with_rules(mut self, rules: CollisionRules) -> Self {
        self.on_overflow = rules;
        self
    }
}

/// One placement problem: where should `element` go, relative to `target`?
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaceRequest {
    /// The entity being placed, at its requested box edge.
    pub element: BoxTarget,
    /// The entity it is placed against, at its requested box edge.
    pub target: BoxTarget,
    /// The anchor pairs to align (defaults to `"left top left top"`).
    pub anchors: PlacementAnchors,
    /// Extra horizontal shift after anchor alignment.
    pub offset_x: PlaceOffset,
    /// Extra vertical shift after anchor alignment.
    pub offset_y: PlaceOffset,
    /// Optional containment boundary and overflow policy.
    pub contain: Option<Containment>,
}

impl PlaceRequest {
    /// Place `element` against `target` with the default anchors, zero
    /// offsets, and no containment.
    #[must_use]
    pub fn new(element: impl Into<BoxTarget>, target: impl Into<BoxTarget>) -> Self {
        Self {
            element: element.into(),
            target: target.into(),
            anchors: PlacementAnchors::default(),
            offset_x: PlaceOffset::default(),
            offset_y: PlaceOffset::default(),
            contain: None,
        }
    }

    /// Replace the anchor pairs.
    #[must_use]
    pub const fn anchors(mut self, anchors: PlacementAnchors) -> Self {
        self.anchors = anchors;
        self
    }

    /// Parse the anchor pairs from the 4-token keyword string.
    ///
    /// # Errors
    /// Fails fast on a malformed anchor string; see [`PlaceError`].
    pub fn anchors_str(mut self, anchors: &str) -> Result<Self, PlaceError> {
        self.anchors = anchors.parse()?;
        Ok(self)
    }

    /// Replace both axis offsets.
    #[must_use]
    pub fn offset(mut self, x: impl Into<PlaceOffset>, y: impl Into<PlaceOffset>) -> Self {
        self.offset_x = x.into();
        self.offset_y = y.into();
        self
    }

    /// Contain the result within a boundary.
    #[must_use]
    pub const fn contain(mut self, containment: Containment) -> Self {
        self.contain = Some(containment);
        self
    }
}

/// The intermediate state of one placement, handed to an adjustment hook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementData {
    /// The placed element's rect as measured, before any movement.
    pub element_rect: Rect,
    /// The target's rect.
    pub target_rect: Rect,
    /// The containment boundary's rect, when a policy was given.
    pub container_rect: Option<Rect>,
    /// The offset applied after anchor alignment.
    pub shift: Offset,
    /// Raw per-side overflow of the candidate position against the boundary,
    /// before correction. `None` without a containment policy.
    pub overflow: Option<EdgeSizes>,
    /// The net collision correction actually applied.
    pub overflow_correction: Offset,
}

/// Fail-fast errors for malformed placement input.
///
/// These indicate caller bugs; silently defaulting them would mask the bug
/// with a plausible-looking position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The anchor string did not hold exactly four tokens.
    #[error("expected 4 anchor keywords in '{input}', got {got}")]
    AnchorCount {
        /// The offending input.
        input: String,
        /// How many tokens it held.
        got: usize,
    },
    /// An anchor token was not a keyword of its axis.
    #[error("unrecognized {axis}-axis anchor keyword '{token}'")]
    AnchorKeyword {
        /// The offending token.
        token: String,
        /// The axis it was parsed for.
        axis: AnchorAxis,
    },
    /// An offset string was not a number with an optional `px`/`%` suffix.
    #[error("malformed placement offset '{input}'")]
    Offset {
        /// The offending input.
        input: String,
    },
}

/// Solve a placement: the document-relative position for the placed
/// element's reference box corner.
#[must_use]
pub fn place<Q: LayoutQuery + ?Sized>(q: &Q, request: &PlaceRequest) -> Offset {
    place_with(q, request, |_, _| {})
}

/// [`place`] with an adjustment hook.
///
/// The hook receives the mutable result and a read-only snapshot of the
/// intermediate state, and may move the result in place; whatever it leaves
/// behind is returned.
#[must_use]
pub fn place_with<Q: LayoutQuery + ?Sized>(
    q: &Q,
    request: &PlaceRequest,
    adjust: impl FnOnce(&mut Offset, &PlacementData),
) -> Offset {
    // STEP 1: resolve both rects in the shared document coordinate space.
    let element_rect = rect(q, request.element);
    let target_rect = rect(q, request.target);
    let anchors = request.anchors;

    // STEP 2: the zero point per axis is the target's anchor coordinate
    // minus the placed element's own anchor offset, so that the two anchors
    // coincide exactly.
    let zero = Offset::new(
        anchors.target_x.resolve(target_rect.left, target_rect.width)
            - anchors.element_x.offset_within(element_rect.width),
        anchors.target_y.resolve(target_rect.top, target_rect.height)
            - anchors.element_y.offset_within(element_rect.height),
    );

    // STEP 3: the caller's offset; percentages resolve against the placed
    // element's own size on that axis.
    let shift = Offset::new(
        request.offset_x.resolve(element_rect.width),
        request.offset_y.resolve(element_rect.height),
    );
    let mut result = Offset::new(zero.left + shift.left, zero.top + shift.top);

    // STEP 4: collision correction against the containment boundary.
    let mut container_rect = None;
    let mut raw_overflow = None;
    let mut correction = Offset::default();
    if let Some(containment) = &request.contain {
        let boundary = rect(q, containment.within);
        let candidate = element_rect.positioned_at(result);
        let sides = overflow(candidate, boundary);
        let rules = containment.on_overflow;

        correction = Offset::new(
            axis_correction(sides.left, sides.right, rules.left, rules.right),
            axis_correction(sides.top, sides.bottom, rules.top, rules.bottom),
        );
        result.left += correction.left;
        result.top += correction.top;

        container_rect = Some(boundary);
        raw_overflow = Some(sides);
    }

    // STEP 5: the adjustment hook sees everything and has the last word.
    let data = PlacementData {
        element_rect,
        target_rect,
        container_rect,
        shift,
        overflow: raw_overflow,
        overflow_correction: correction,
    };
    adjust(&mut result, &data);
    result
}

/// The correction for one axis, positive toward the far (right/bottom) side.
///
/// A side contributes only when its mode is not `none` and its overflow is
/// positive. When both sides contribute, `forcepush` outranks `push` and two
/// equal ranks split the difference, centering the element within the
/// boundary on this axis. A lone `push` is capped at the opposite side's
/// slack so it never creates new overflow there.
fn axis_correction(near: f32, far: f32, near_mode: CollisionMode, far_mode: CollisionMode) -> f32 {
    let near_wants = near_mode != CollisionMode::None && near > 0.0;
    let far_wants = far_mode != CollisionMode::None && far > 0.0;

    match (near_wants, far_wants) {
        (true, true) => match (near_mode, far_mode) {
            (CollisionMode::ForcePush, CollisionMode::ForcePush) => (near - far) / 2.0,
            (CollisionMode::ForcePush, _) => near,
            (_, CollisionMode::ForcePush) => -far,
            // Two pushes in conflict behave like two forcepushes: split the
            // difference rather than thrash.
            _ => (near - far) / 2.0,
        },
        (true, false) => {
            if near_mode == CollisionMode::ForcePush {
                near
            } else {
                near.min((-far).max(0.0))
            }
        }
        (false, true) => {
            if far_mode == CollisionMode::ForcePush {
                -far
            } else {
                -(far.min((-near).max(0.0)))
            }
        }
        (false, false) => 0.0,
    }
}
