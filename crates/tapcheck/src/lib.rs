//! Static touch-target size verification.
//!
//! tapcheck reads the embedded style region of an HTML page, resolves the
//! effective size of each configured interactive element at each
//! configured mobile viewport, and checks the result against minimum
//! touch-target guidelines (WCAG 2.5.5 at 44×44px, the 48×48px platform
//! recommendation for mobile).
//!
//! No browser is involved: sizes come from `min-width`/`width`,
//! `min-height`/`height` and `padding` declarations only.
//!
//! # Example
//!
//! ```
//! use tapcheck::prelude::*;
//!
//! let sheet = StyleSheet::from_document(
//!     "<style>#go { min-width: 48px; min-height: 48px; }</style>",
//! );
//! let config = Config {
//!     viewports: vec![Viewport::new("Phone", 320, 48)],
//!     targets: vec![Target::new("#go", "Go Button")],
//! };
//!
//! let results = Analyzer::new(config).analyze(&sheet);
//! assert_eq!(results.summary.passed, 1);
//! assert!(results.all_passed());
//! ```

pub mod analyzer;
pub mod config;
pub mod evaluate;
pub mod geometry;
pub mod report;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::analyzer::Analyzer;
    pub use crate::config::{Config, RECOMMENDED_MIN_SIZE, Target, Viewport, WCAG_MIN_SIZE};
    pub use crate::evaluate::{Status, Verdict, evaluate};
    pub use crate::geometry::{BoxSize, compute_box};
    pub use crate::report::{Results, Summary, TextReport, ViewportReport};
    pub use tapcheck_style::prelude::*;
}
