//! Declaration value normalization.
//!
//! Only pixel lengths carry meaning here. The first `px` magnitude wins,
//! including one inside a function such as `max(44px, 2.75rem)`. Values
//! without any (other units, keywords) normalize to "not specified".
//!
//! # Example
//!
//! ```
//! use tapcheck_style::values::{EdgeValues, parse_length, parse_padding};
//!
//! assert_eq!(parse_length("48px"), Some(48));
//! assert_eq!(parse_length("3rem"), None);
//!
//! let padding = parse_padding("18px 40px");
//! assert_eq!(padding, EdgeValues::symmetric(18, 40));
//! assert_eq!(padding.horizontal(), 80);
//! ```

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// Extract the first pixel length from a raw declaration value.
///
/// Function arguments and parenthesized groups are searched in order, so
/// `calc(10px + 5px)` yields 10. Fractions are truncated and negative
/// lengths clamp to zero. Values in other units, unitless numbers and
/// keywords yield `None`.
pub fn parse_length(raw: &str) -> Option<u32> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    first_px(&mut parser)
}

fn first_px(parser: &mut Parser<'_, '_>) -> Option<u32> {
    while let Ok(token) = parser.next().cloned() {
        match token {
            Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
                return Some(px_to_u32(value));
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                // The nested parser must be exhausted even after a match.
                let found = parser
                    .parse_nested_block(|block| {
                        let found = first_px(block);
                        while block.next().is_ok() {}
                        Ok::<_, CssParseError<'_, ()>>(found)
                    })
                    .unwrap_or(None);
                if found.is_some() {
                    return found;
                }
            }
            _ => {}
        }
    }

    None
}

/// Convert a pixel magnitude to whole, non-negative pixels.
pub(crate) fn px_to_u32(value: f32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.trunc().min(u32::MAX as f32) as u32
    }
}

/// Parse the `padding` shorthand.
///
/// One value applies to all sides, two values are (vertical, horizontal)
/// and four values are (top, right, bottom, left). Any other token count
/// yields zero padding. Tokens that are not pixel lengths still count
/// toward the shorthand form and contribute zero.
pub fn parse_padding(raw: &str) -> EdgeValues {
    let value = raw.split('!').next().unwrap_or_default();
    let sides: Vec<u32> = value
        .split_whitespace()
        .map(|token| parse_length(token).unwrap_or(0))
        .collect();

    match sides.as_slice() {
        [all] => EdgeValues::uniform(*all),
        [vertical, horizontal] => EdgeValues::symmetric(*vertical, *horizontal),
        [top, right, bottom, left] => EdgeValues::new(*top, *right, *bottom, *left),
        _ => EdgeValues::zero(),
    }
}

/// Per-side pixel values for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeValues {
    /// Top edge value.
    pub top: u32,
    /// Right edge value.
    pub right: u32,
    /// Bottom edge value.
    pub bottom: u32,
    /// Left edge value.
    pub left: u32,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Create zero edge values.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Get total horizontal space (left + right).
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Get total vertical space (top + bottom).
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Sides in `[top, right, bottom, left]` order.
    pub fn to_array(&self) -> [u32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl From<[u32; 4]> for EdgeValues {
    fn from([top, right, bottom, left]: [u32; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}
