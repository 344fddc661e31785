//! The five nested layers of the CSS box model.
//!
//! [CSS Box Model Level 3 § 3](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! Mensura adds a fifth layer between padding and border: the space a
//! scrollbar occupies. No single native API exposes that layer directly; the
//! measuring code derives it from the difference between the padding box and
//! the client area.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::Display;
use thiserror::Error;

/// A box-model layer, ordered innermost to outermost.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// ```text
/// margin > border > scrollbar > padding > content
/// ```
///
/// Every geometry query is parameterized by an `Edge`; the default is
/// [`Edge::Border`], matching what native bounding-box APIs report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Edge {
    /// "The content box contains the actual content of the element." (§ 3)
    Content = 0,
    /// "The padding box contains both the content and padding areas." (§ 3.2)
    Padding = 1,
    /// The padding box plus any space occupied by scrollbars.
    Scrollbar = 2,
    /// "The border box contains content, padding, and border areas." (§ 3.3)
    #[default]
    Border = 3,
    /// "The margin box is the outermost box, and contains all four areas." (§ 3.1)
    Margin = 4,
}

impl Edge {
    /// The ordinal alias of this layer (`0..=4`, innermost to outermost).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Fail-fast error for unrecognized box-edge input.
///
/// An unknown edge keyword indicates a caller bug, so it is surfaced loudly
/// instead of being defaulted away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized box edge '{0}' (expected content|padding|scrollbar|border|margin or 0..=4)")]
pub struct ParseEdgeError(pub String);

impl FromStr for Edge {
    type Err = ParseEdgeError;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "padding" => Ok(Self::Padding),
            "scrollbar" => Ok(Self::Scrollbar),
            "border" => Ok(Self::Border),
            "margin" => Ok(Self::Margin),
            _ => Err(ParseEdgeError(keyword.to_string())),
        }
    }
}

impl TryFrom<u8> for Edge {
    type Error = ParseEdgeError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Self::Content),
            1 => Ok(Self::Padding),
            2 => Ok(Self::Scrollbar),
            3 => Ok(Self::Border),
            4 => Ok(Self::Margin),
            _ => Err(ParseEdgeError(ordinal.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trip() {
        for edge in [
            Edge::Content,
            Edge::Padding,
            Edge::Scrollbar,
            Edge::Border,
            Edge::Margin,
        ] {
            assert_eq!(edge.to_string().parse::<Edge>(), Ok(edge));
        }
    }

    #[test]
    fn ordinal_alias_matches_layer_order() {
        assert_eq!(Edge::try_from(0), Ok(Edge::Content));
        assert_eq!(Edge::try_from(4), Ok(Edge::Margin));
        assert!(Edge::try_from(5).is_err());
    }

    #[test]
    fn layers_are_ordered_innermost_first() {
        assert!(Edge::Content < Edge::Padding);
        assert!(Edge::Padding < Edge::Scrollbar);
        assert!(Edge::Scrollbar < Edge::Border);
        assert!(Edge::Border < Edge::Margin);
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert!("outline".parse::<Edge>().is_err());
    }
}
