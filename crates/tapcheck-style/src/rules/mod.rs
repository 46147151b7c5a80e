//! Rule-sets and partitioned stylesheets.

mod rule_set;
mod stylesheet;

pub use rule_set::{Declarations, RuleSet};
pub use stylesheet::{ConditionalRuleSet, StyleSheet};
