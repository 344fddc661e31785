//! Computed geometry-affecting style.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//! "The computed value is the result of resolving the specified value..."
//!
//! Mensura does not cascade or inherit; a [`ComputedGeometry`] carries the
//! already-computed values a style inspector reported for one node, reduced
//! to the properties that influence measurement and containing-block
//! resolution.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumString};

use mensura_common::warning::warn_once;
use mensura_geom::EdgeSizes;

/// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// "The display property defines an element's display type, which consists
/// of the two basic qualities of how an element generates boxes."
///
/// Mensura only needs the distinctions that decide block-level-ness and box
/// generation, so the outer/inner split is collapsed into one keyword enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Display {
    /// "The element generates a block-level box." (§ 2.1)
    #[default]
    Block,
    /// "The element generates an inline-level box." (§ 2.1)
    Inline,
    /// "This value causes an element to generate an inline-level block
    /// container." (§ 2.4)
    InlineBlock,
    /// "The element generates a principal flex container box." (§ 2.2)
    Flex,
    /// "The element generates a principal grid container box." (§ 2.2)
    Grid,
    /// [§ 2.5 display: contents](https://www.w3.org/TR/css-display-3/#valdef-display-contents)
    /// "The element itself does not generate any boxes."
    Contents,
    /// [§ 2.6 display: none](https://www.w3.org/TR/css-display-3/#valdef-display-none)
    /// "The element and its descendants generate no boxes or text runs."
    None,
}

impl Display {
    /// Does this display type generate a block-level principal box?
    ///
    /// Everything except `none`, `inline`, and `contents` qualifies; this is
    /// the ancestor test used by containing-block resolution for in-flow
    /// elements.
    #[must_use]
    pub const fn is_block_level(self) -> bool {
        !matches!(self, Self::Inline | Self::Contents | Self::None)
    }

    /// Does this display type generate any box at all?
    #[must_use]
    pub const fn generates_box(self) -> bool {
        !matches!(self, Self::Contents | Self::None)
    }
}

/// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
///
/// "The 'position' and 'float' properties determine which of the CSS 2
/// positioning algorithms is used to calculate the position of a box."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    /// "The box is a normal box, laid out according to the normal flow."
    #[default]
    Static,
    /// "The box's position is calculated according to the normal flow.
    /// Then the box is offset relative to its normal position."
    Relative,
    /// "The box's position (and possibly size) is specified with the
    /// 'top', 'right', 'bottom', and 'left' properties."
    Absolute,
    /// "The box's position is calculated according to the 'absolute' model,
    /// but the box is fixed with respect to some reference."
    Fixed,
    /// [CSS Positioned Layout Level 3 § 3.2](https://www.w3.org/TR/css-position-3/#sticky-position)
    /// "Positioned similarly to a relatively positioned box, but the offset
    /// is computed with reference to the nearest scrolling ancestor."
    Sticky,
}

/// [§ 11.1.1 'overflow'](https://www.w3.org/TR/CSS2/visufx.html#overflow)
///
/// "This property specifies whether content of a block container element
/// is clipped when it overflows the element's box."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum Overflow {
    /// "Content is not clipped."
    #[default]
    Visible,
    /// "Content is clipped and no scrolling mechanism is provided."
    Hidden,
    /// "Content is clipped and a scrolling mechanism is provided."
    Scroll,
    /// "Provide a scrolling mechanism for overflowing boxes."
    Auto,
}

impl Overflow {
    /// Does this overflow value reserve scrollbar space (`auto` or `scroll`)?
    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// The computed values of one node that affect measurement.
///
/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Keyword-valued properties whose only interesting state is "none vs
/// anything else" (transform, perspective, filter, backdrop-filter, contain,
/// content-visibility) are stored as `Option<String>` with `None` meaning
/// the `none` keyword.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComputedGeometry {
    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    pub display: Display,
    /// [§ 9.3.1 'position'](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
    pub position: Position,
    /// [§ 11.1.1 'overflow-x'](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
    pub overflow_x: Overflow,
    /// [§ 11.1.1 'overflow-y'](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
    pub overflow_y: Overflow,
    /// [§ 6.1 Margins](https://www.w3.org/TR/css-box-4/#margins), used px values.
    pub margin: EdgeSizes,
    /// [§ 4.3 Border widths](https://www.w3.org/TR/css-backgrounds-3/#border-width), used px values.
    pub border: EdgeSizes,
    /// [§ 6.2 Padding](https://www.w3.org/TR/css-box-4/#paddings), used px values.
    pub padding: EdgeSizes,
    /// [CSS Transforms § 6](https://www.w3.org/TR/css-transforms-1/#transform-property);
    /// `None` = the `none` keyword.
    pub transform: Option<String>,
    /// [CSS Transforms 2 § 13](https://www.w3.org/TR/css-transforms-2/#perspective-property);
    /// `None` = the `none` keyword.
    pub perspective: Option<String>,
    /// [Filter Effects § 5](https://www.w3.org/TR/filter-effects-1/#FilterProperty);
    /// `None` = the `none` keyword.
    pub filter: Option<String>,
    /// [Filter Effects 2 § 3](https://drafts.fxtf.org/filter-effects-2/#BackdropFilterProperty);
    /// `None` = the `none` keyword.
    pub backdrop_filter: Option<String>,
    /// [CSS Will Change § 2](https://www.w3.org/TR/css-will-change-1/#will-change):
    /// the computed list of hinted property names (empty = `auto`).
    pub will_change: Vec<String>,
    /// [CSS Containment § 2](https://www.w3.org/TR/css-contain-2/#contain-property);
    /// `None` = the `none` keyword, otherwise the keyword list.
    pub contain: Option<String>,
    /// [CSS Containment 2 § 4](https://www.w3.org/TR/css-contain-2/#content-visibility);
    /// `None` = the `visible` keyword.
    pub content_visibility: Option<String>,
}

impl ComputedGeometry {
    /// Does `will-change` hint at any of the given property names?
    #[must_use]
    pub fn will_change_any(&self, properties: &[&str]) -> bool {
        self.will_change
            .iter()
            .any(|hinted| properties.iter().any(|name| hinted == name))
    }

    /// [§ 2 'contain'](https://www.w3.org/TR/css-contain-2/#contain-property)
    ///
    /// Does the computed `contain` value force a containing block for
    /// absolutely and fixed positioned descendants? True for any value
    /// including `paint`, `layout`, or the `strict`/`content` shorthands.
    #[must_use]
    pub fn contain_forces_containing_block(&self) -> bool {
        self.contain.as_deref().is_some_and(|keywords| {
            keywords
                .split_ascii_whitespace()
                .any(|word| matches!(word, "paint" | "layout" | "strict" | "content"))
        })
    }

    /// Is the computed `content-visibility` value `auto`?
    #[must_use]
    pub fn content_visibility_auto(&self) -> bool {
        self.content_visibility.as_deref() == Some("auto")
    }

    /// Build a style from a `;`-separated declaration list, e.g.
    /// `"position: absolute; margin: 4px 8px"`.
    ///
    /// Unknown properties and values are reported through the warning system
    /// and otherwise ignored, exactly like a browser dropping an
    /// unrecognized declaration.
    #[must_use]
    pub fn from_declarations(declarations: &str) -> Self {
        let mut style = Self::default();
        for declaration in declarations.split(';') {
            if let Some((name, value)) = declaration.split_once(':') {
                style.apply_declaration(name.trim(), value.trim());
            } else if !declaration.trim().is_empty() {
                warn_once(
                    "Style",
                    &format!("malformed declaration '{}'", declaration.trim()),
                );
            }
        }
        style
    }

    /// Apply one property declaration to this style.
    ///
    /// Mirrors how a cascade applies a winning declaration: recognized
    /// properties update the corresponding computed field, everything else
    /// warns once and is dropped.
    pub fn apply_declaration(&mut self, name: &str, value: &str) {
        match name.to_ascii_lowercase().as_str() {
            "display" => self.apply_keyword(name, value, |style, parsed| style.display = parsed),
            "position" => self.apply_keyword(name, value, |style, parsed| style.position = parsed),
            // [§ 11.1.1 overflow](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
            //
            // "The overflow property is a shorthand property that sets the
            // specified values of overflow-x and overflow-y"; one value
            // applies to both axes.
            "overflow" => {
                let mut axes = value.split_ascii_whitespace();
                let x_keyword = axes.next().unwrap_or_default();
                let y_keyword = axes.next().unwrap_or(x_keyword);
                self.apply_keyword(name, x_keyword, |style, parsed| style.overflow_x = parsed);
                self.apply_keyword(name, y_keyword, |style, parsed| style.overflow_y = parsed);
            }
            "overflow-x" => {
                self.apply_keyword(name, value, |style, parsed| style.overflow_x = parsed);
            }
            "overflow-y" => {
                self.apply_keyword(name, value, |style, parsed| style.overflow_y = parsed);
            }
            // [§ 9.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
            "margin" => {
                if let Some(sides) = expand_sides(value) {
                    self.margin = sides;
                } else {
                    warn_value(name, value);
                }
            }
            "padding" => {
                if let Some(sides) = expand_sides(value) {
                    self.padding = sides;
                } else {
                    warn_value(name, value);
                }
            }
            "border-width" => {
                if let Some(sides) = expand_sides(value) {
                    self.border = sides;
                } else {
                    warn_value(name, value);
                }
            }
            "margin-top" => apply_length(&mut self.margin.top, name, value),
            "margin-right" => apply_length(&mut self.margin.right, name, value),
            "margin-bottom" => apply_length(&mut self.margin.bottom, name, value),
            "margin-left" => apply_length(&mut self.margin.left, name, value),
            "padding-top" => apply_length(&mut self.padding.top, name, value),
            "padding-right" => apply_length(&mut self.padding.right, name, value),
            "padding-bottom" => apply_length(&mut self.padding.bottom, name, value),
            "padding-left" => apply_length(&mut self.padding.left, name, value),
            "border-top-width" => apply_length(&mut self.border.top, name, value),
            "border-right-width" => apply_length(&mut self.border.right, name, value),
            "border-bottom-width" => apply_length(&mut self.border.bottom, name, value),
            "border-left-width" => apply_length(&mut self.border.left, name, value),
            "transform" => self.transform = non_none(value),
            "perspective" => self.perspective = non_none(value),
            "filter" => self.filter = non_none(value),
            "backdrop-filter" => self.backdrop_filter = non_none(value),
            // [§ 2 will-change](https://www.w3.org/TR/css-will-change-1/#will-change)
            // "Value: auto | <animateable-feature>#" - a comma-separated list.
            "will-change" => {
                if value.eq_ignore_ascii_case("auto") {
                    self.will_change.clear();
                } else {
                    self.will_change = value
                        .split(',')
                        .map(|token| token.trim().to_ascii_lowercase())
                        .filter(|token| !token.is_empty())
                        .collect();
                }
            }
            "contain" => self.contain = non_none(value),
            "content-visibility" => {
                self.content_visibility = if value.eq_ignore_ascii_case("visible") {
                    None
                } else {
                    Some(value.to_ascii_lowercase())
                };
            }
            unknown => {
                warn_once("Style", &format!("unknown property '{unknown}'"));
            }
        }
    }

    /// Parse a keyword-valued property and apply it, warning on bad input.
    fn apply_keyword<T: FromStr>(&mut self, name: &str, value: &str, set: impl FnOnce(&mut Self, T)) {
        match value.trim().to_ascii_lowercase().parse::<T>() {
            Ok(parsed) => set(self, parsed),
            Err(_) => warn_value(name, value),
        }
    }
}

/// Warn once about an unsupported property value.
fn warn_value(name: &str, value: &str) {
    warn_once("Style", &format!("unsupported value '{value}' for '{name}'"));
}

/// Store a keyword value as `Some` unless it is the `none` keyword.
fn non_none(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_ascii_lowercase())
    }
}

/// Parse a used length value: a bare number or a `px`-suffixed one.
fn parse_px(value: &str) -> Option<f32> {
    let trimmed = value.trim();
    let number = trimmed
        .strip_suffix("px")
        .map_or(trimmed, str::trim_end);
    number.trim().parse::<f32>().ok()
}

/// Apply a single-side length declaration, warning on bad input.
fn apply_length(side: &mut f32, name: &str, value: &str) {
    if let Some(px) = parse_px(value) {
        *side = px;
    } else {
        warn_value(name, value);
    }
}

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// The 1-4 value shorthand expansion shared by `margin`, `padding`, and
/// `border-width`:
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
fn expand_sides(value: &str) -> Option<EdgeSizes> {
    let lengths: Vec<f32> = value
        .split_ascii_whitespace()
        .map(parse_px)
        .collect::<Option<Vec<f32>>>()?;

    match lengths.as_slice() {
        [all] => Some(EdgeSizes::uniform(*all)),
        [vertical, horizontal] => Some(EdgeSizes {
            top: *vertical,
            right: *horizontal,
            bottom: *vertical,
            left: *horizontal,
        }),
        [top, horizontal, bottom] => Some(EdgeSizes {
            top: *top,
            right: *horizontal,
            bottom: *bottom,
            left: *horizontal,
        }),
        [top, right, bottom, left] => Some(EdgeSizes {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => None,
    }
}
