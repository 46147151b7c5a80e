//! Stylesheet partitioned into base and width-conditional rule-sets.

use std::collections::BTreeMap;
use std::path::Path;

use crate::rules::RuleSet;
use crate::{Error, Result};

/// Rules that apply only while the viewport is at most `max_width` wide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalRuleSet {
    /// Maximum viewport width in pixels (inclusive).
    pub max_width: u32,
    /// The rules inside the conditional block.
    pub rules: RuleSet,
}

impl ConditionalRuleSet {
    /// Create an empty conditional rule-set.
    pub fn new(max_width: u32) -> Self {
        Self {
            max_width,
            rules: RuleSet::new(),
        }
    }

    /// Check if the block applies at a viewport width.
    pub fn is_active_at(&self, viewport_width: u32) -> bool {
        viewport_width <= self.max_width
    }
}

/// A parsed stylesheet.
///
/// Holds one unconditional base rule-set and at most one conditional
/// rule-set per `max-width` threshold. Blocks repeating a threshold are
/// merged into the same rule-set in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    /// Rules outside any conditional block.
    pub base: RuleSet,
    conditional: BTreeMap<u32, ConditionalRuleSet>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Self {
        crate::parser::parse_stylesheet(css)
    }

    /// Parse the embedded style region of an HTML document.
    ///
    /// A document without a style region yields an empty stylesheet.
    pub fn from_document(document: &str) -> Self {
        match crate::document::style_region(document) {
            Some(css) => Self::from_css(css),
            None => {
                tracing::warn!("No embedded style region found; using an empty stylesheet");
                Self::new()
            }
        }
    }

    /// Load and parse the embedded style region of an HTML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded document");
        Ok(Self::from_document(&content))
    }

    /// Merge rules into the conditional rule-set for `max_width`.
    pub fn add_conditional(&mut self, max_width: u32, rules: RuleSet) {
        self.conditional
            .entry(max_width)
            .or_insert_with(|| ConditionalRuleSet::new(max_width))
            .rules
            .merge(rules);
    }

    /// Get the conditional rule-set for an exact threshold.
    pub fn conditional(&self, max_width: u32) -> Option<&ConditionalRuleSet> {
        self.conditional.get(&max_width)
    }

    /// Iterate over all conditional rule-sets, narrowest threshold first.
    pub fn conditionals(&self) -> impl Iterator<Item = &ConditionalRuleSet> {
        self.conditional.values()
    }

    /// Conditional rule-sets active at a viewport width, in cascade order.
    ///
    /// The widest matching threshold comes first and the narrowest last, so
    /// applying them in order lets narrower breakpoints override broader
    /// ones.
    pub fn active_at(&self, viewport_width: u32) -> impl Iterator<Item = &ConditionalRuleSet> {
        self.conditional.range(viewport_width..).rev().map(|(_, set)| set)
    }

    /// Check if the stylesheet has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.conditional.is_empty()
    }
}
