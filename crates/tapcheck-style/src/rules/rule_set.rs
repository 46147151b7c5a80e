//! Selector to declaration mapping for one rule block scope.

use std::collections::HashMap;

/// Raw declarations for one selector: property name to raw value text.
pub type Declarations = HashMap<String, String>;

/// Rules parsed from one scope of a stylesheet.
///
/// Selectors are opaque keys: the trimmed selector text of a rule block,
/// compared by exact string equality. No selector syntax is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: HashMap<String, Declarations>,
}

impl RuleSet {
    /// Create an empty rule-set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the rule blocks of a CSS fragment.
    pub fn from_css(css: &str) -> Self {
        crate::parser::parse_rule_blocks(css)
    }

    /// Merge declarations into the entry for `selector`.
    ///
    /// Properties already present for the selector are overwritten; others
    /// are kept.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.rules
            .entry(selector.into())
            .or_default()
            .extend(declarations);
    }

    /// Merge every rule of `other` into this set, `other` winning.
    pub fn merge(&mut self, other: RuleSet) {
        for (selector, declarations) in other.rules {
            self.insert(selector, declarations);
        }
    }

    /// Get the declarations for an exact selector.
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    /// Get the number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule-set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over selectors and their declarations.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(selector, decls)| (selector.as_str(), decls))
    }
}
