//! Cascade resolution against a partitioned stylesheet.

use crate::resolve::cascade::cascade_declarations;
use crate::rules::StyleSheet;
use crate::style::EffectiveStyle;

/// Resolves the effective style of a selector at a viewport width.
///
/// Base rules apply first. Conditional rule-sets whose threshold is at
/// least the viewport width apply next, widest threshold first, so the
/// narrowest breakpoint has the final say. Rules sharing one threshold were
/// already merged in source order when the sheet was parsed.
///
/// This is an approximation of the cascade: there is no specificity and no
/// source-order tracking between blocks.
#[derive(Debug, Clone, Copy)]
pub struct CascadeResolver<'a> {
    sheet: &'a StyleSheet,
}

impl<'a> CascadeResolver<'a> {
    /// Create a resolver over a stylesheet.
    pub fn new(sheet: &'a StyleSheet) -> Self {
        Self { sheet }
    }

    /// Get the underlying stylesheet.
    pub fn stylesheet(&self) -> &'a StyleSheet {
        self.sheet
    }

    /// Resolve the effective style for `selector` at `viewport_width` pixels.
    pub fn resolve(&self, selector: &str, viewport_width: u32) -> EffectiveStyle {
        let mut style = EffectiveStyle::new();

        if let Some(declarations) = self.sheet.base.get(selector) {
            cascade_declarations(&mut style, declarations);
        }

        for conditional in self.sheet.active_at(viewport_width) {
            if let Some(declarations) = conditional.rules.get(selector) {
                tracing::trace!(
                    selector,
                    max_width = conditional.max_width,
                    viewport_width,
                    "Applying conditional rules"
                );
                cascade_declarations(&mut style, declarations);
            }
        }

        style
    }
}
