//! Touch-target box geometry.

use serde::Serialize;
use tapcheck_style::style::EffectiveStyle;

/// Rendered size of a touch target in pixels, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoxSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoxSize {
    /// Create a box size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Compute the touch-target box of an effective style.
///
/// A minimum dimension takes precedence over a plain one, and a missing
/// dimension counts as zero. Padding is then added on both sides.
pub fn compute_box(style: &EffectiveStyle) -> BoxSize {
    let width = style.min_width.or(style.width).unwrap_or(0);
    let height = style.min_height.or(style.height).unwrap_or(0);

    BoxSize {
        width: width.saturating_add(style.padding.horizontal()),
        height: height.saturating_add(style.padding.vertical()),
    }
}
