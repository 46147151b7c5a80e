//! Stylesheet partitioning and cascade resolution for tapcheck.
//!
//! This crate turns the embedded style region of an HTML document into
//! something that can answer one question: which size-related declarations
//! apply to a selector at a given viewport width?
//!
//! - **Document**: Locate the embedded `<style>` region
//! - **Parsing**: Split the sheet into a base rule-set and `max-width`
//!   conditional rule-sets
//! - **Values**: Normalize pixel lengths and padding shorthand
//! - **Cascading**: Merge base and active conditional declarations into an
//!   [`EffectiveStyle`](style::EffectiveStyle)
//!
//! # Example
//!
//! ```
//! use tapcheck_style::prelude::*;
//!
//! let sheet = StyleSheet::from_css(
//!     "#go { min-height: 40px; padding: 4px; }
//!      @media (max-width: 480px) { #go { min-height: 48px; } }",
//! );
//!
//! let style = CascadeResolver::new(&sheet).resolve("#go", 320);
//! assert_eq!(style.min_height, Some(48));
//! assert_eq!(style.padding, EdgeValues::uniform(4));
//! ```

pub mod document;
pub mod parser;
pub mod resolve;
pub mod rules;
pub mod style;
pub mod values;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::CascadeResolver;
    pub use crate::rules::{ConditionalRuleSet, Declarations, RuleSet, StyleSheet};
    pub use crate::style::EffectiveStyle;
    pub use crate::values::{EdgeValues, parse_length, parse_padding};
}
