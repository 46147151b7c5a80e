//! Compliance evaluation of one target at one viewport.

use serde::Serialize;

use crate::config::{RECOMMENDED_MIN_SIZE, Target, Viewport, WCAG_MIN_SIZE};
use crate::geometry::BoxSize;
use crate::report::Summary;

/// Outcome of a size check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Both dimensions meet the viewport minimum.
    Pass,
    /// At least one dimension is below the viewport minimum.
    Fail,
}

/// The result of checking one target at one viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Selector of the checked target.
    pub selector: String,
    /// Display name of the checked target.
    pub name: String,
    /// Name of the viewport.
    pub viewport: String,
    /// Minimum size required at the viewport.
    pub expected: u32,
    /// Computed box size.
    pub actual: BoxSize,
    /// Pass or fail.
    pub status: Status,
    /// Human-readable problems, failures first.
    pub issues: Vec<String>,
}

impl Verdict {
    /// Check if the verdict passed.
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Evaluate a computed box against a viewport's minimum size.
///
/// Returns the verdict together with the one-test [`Summary`] it
/// contributes. A passing box that meets the WCAG minimum in both
/// dimensions but misses the recommended mobile size in either one also
/// gets an informational issue and counts as a warning; the status stays
/// `Pass`.
pub fn evaluate(target: &Target, viewport: &Viewport, actual: BoxSize) -> (Verdict, Summary) {
    let min = viewport.min_size;
    let meets_width = actual.width >= min;
    let meets_height = actual.height >= min;
    let status = if meets_width && meets_height {
        Status::Pass
    } else {
        Status::Fail
    };

    let mut issues = vec![];
    if !meets_width {
        issues.push(format!(
            "Width {}px is less than minimum {}px",
            actual.width, min
        ));
    }
    if !meets_height {
        issues.push(format!(
            "Height {}px is less than minimum {}px",
            actual.height, min
        ));
    }

    let below_recommended =
        actual.width < RECOMMENDED_MIN_SIZE || actual.height < RECOMMENDED_MIN_SIZE;
    let meets_wcag = actual.width >= WCAG_MIN_SIZE && actual.height >= WCAG_MIN_SIZE;
    let warned = status == Status::Pass && below_recommended && meets_wcag;
    if warned {
        issues.push(format!(
            "Below recommended {RECOMMENDED_MIN_SIZE}x{RECOMMENDED_MIN_SIZE}px for mobile \
             (but meets WCAG {WCAG_MIN_SIZE}x{WCAG_MIN_SIZE}px)"
        ));
    }

    let verdict = Verdict {
        selector: target.selector.clone(),
        name: target.name.clone(),
        viewport: viewport.name.clone(),
        expected: min,
        actual,
        status,
        issues,
    };

    let mut summary = Summary::default();
    summary.record(&verdict, warned);
    (verdict, summary)
}
