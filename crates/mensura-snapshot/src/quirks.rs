//! Engine-quirk profiles for containing-block resolution.
//!
//! [CSS Positioned Layout Level 3 § 2.1](https://www.w3.org/TR/css-position-3/#def-cb)
//! defines which ancestors establish a containing block, but shipping engines
//! diverge on the filter- and content-visibility-related triggers. Rather
//! than sniffing the runtime, the divergent branches are captured in an
//! injected profile so the predicate logic itself stays engine-agnostic and
//! each profile is testable on its own.

use serde::Serialize;

/// Browser-conditional switches consulted by the containing-block predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineQuirks {
    /// A non-`none` `filter`/`backdrop-filter` (or a `will-change` hint for
    /// either) promotes *any* ancestor to a containing block for fixed
    /// elements, block-level or not. True on Blink and Gecko; WebKit does
    /// not implement this trigger.
    pub filter_forces_fixed_containing_block: bool,
    /// `content-visibility: auto` on a block-level ancestor establishes a
    /// containing block. Not implemented by WebKit.
    pub content_visibility_forces_containing_block: bool,
    /// WebKit only: `will-change: filter` on a *block-level* ancestor
    /// establishes a containing block (its substitute for the general
    /// filter trigger above).
    pub will_change_filter_on_block_level: bool,
}

impl EngineQuirks {
    /// The Blink/Gecko behavior profile.
    #[must_use]
    pub const fn blink() -> Self {
        Self {
            filter_forces_fixed_containing_block: true,
            content_visibility_forces_containing_block: true,
            will_change_filter_on_block_level: false,
        }
    }

    /// The WebKit (Safari) behavior profile.
    #[must_use]
    pub const fn webkit() -> Self {
        Self {
            filter_forces_fixed_containing_block: false,
            content_visibility_forces_containing_block: false,
            will_change_filter_on_block_level: true,
        }
    }
}

impl Default for EngineQuirks {
    fn default() -> Self {
        Self::blink()
    }
}
