//! The size-related style of one selector at one viewport.

use crate::values::EdgeValues;

/// Merged size properties for a selector at a viewport width.
///
/// Dimensions that were never declared (or declared with a value that is
/// not a pixel length) are `None`. Padding defaults to zero on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EffectiveStyle {
    /// `min-width` in pixels, if set.
    pub min_width: Option<u32>,
    /// `min-height` in pixels, if set.
    pub min_height: Option<u32>,
    /// `width` in pixels, if set.
    pub width: Option<u32>,
    /// `height` in pixels, if set.
    pub height: Option<u32>,
    /// Padding per side in pixels.
    pub padding: EdgeValues,
}

impl EffectiveStyle {
    /// Create an empty style: no dimensions, zero padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set padding from `[top, right, bottom, left]`.
    pub fn with_padding(mut self, padding: [u32; 4]) -> Self {
        self.padding = EdgeValues::from(padding);
        self
    }

    /// Set `min-width`.
    pub fn with_min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Set `min-height`.
    pub fn with_min_height(mut self, px: u32) -> Self {
        self.min_height = Some(px);
        self
    }

    /// Set `width`.
    pub fn with_width(mut self, px: u32) -> Self {
        self.width = Some(px);
        self
    }

    /// Set `height`.
    pub fn with_height(mut self, px: u32) -> Self {
        self.height = Some(px);
        self
    }
}
