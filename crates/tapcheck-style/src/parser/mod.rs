//! CSS parsing module.

mod blocks;
mod partition;

pub use blocks::parse_rule_blocks;
pub use partition::parse_stylesheet;
