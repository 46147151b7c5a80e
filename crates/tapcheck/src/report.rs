//! Run results, totals, and their text and JSON renderings.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::Viewport;
use crate::evaluate::{Status, Verdict};
use crate::{Error, Result};

/// Aggregate counters for a run.
///
/// Every recorded verdict counts once toward `total_tests` and once toward
/// exactly one of `passed` or `failed`. Warnings are counted separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub warnings: u32,
}

impl Summary {
    /// Count one verdict.
    pub fn record(&mut self, verdict: &Verdict, warned: bool) {
        self.total_tests += 1;
        match verdict.status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
        }
        if warned {
            self.warnings += 1;
        }
    }

    /// Percentage of tests that passed, 0 when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        if self.total_tests == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(self.total_tests) * 100.0
        }
    }
}

impl AddAssign for Summary {
    fn add_assign(&mut self, other: Self) {
        self.total_tests += other.total_tests;
        self.passed += other.passed;
        self.failed += other.failed;
        self.warnings += other.warnings;
    }
}

impl Add for Summary {
    type Output = Summary;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Summary>>(iter: I) -> Self {
        iter.fold(Summary::default(), Add::add)
    }
}

/// All verdicts for one viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportReport {
    #[serde(skip)]
    pub name: String,
    pub width: u32,
    pub min_size: u32,
    /// Verdicts in target order.
    pub tests: Vec<Verdict>,
}

impl ViewportReport {
    /// Create an empty report for a viewport.
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            name: viewport.name.clone(),
            width: viewport.width,
            min_size: viewport.min_size,
            tests: vec![],
        }
    }
}

/// The complete result of one analysis run.
///
/// Serializes as `{ timestamp, viewports: { <name>: {...} }, summary }`
/// with viewports in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    /// RFC 3339 UTC time the run started.
    pub timestamp: String,
    /// Per-viewport verdicts.
    #[serde(serialize_with = "serialize_viewports")]
    pub viewports: Vec<ViewportReport>,
    /// Totals across all viewports.
    pub summary: Summary,
}

fn serialize_viewports<S: Serializer>(
    viewports: &[ViewportReport],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(viewports.len()))?;
    for report in viewports {
        map.serialize_entry(&report.name, report)?;
    }
    map.end()
}

impl Results {
    /// Create empty results stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            viewports: vec![],
            summary: Summary::default(),
        }
    }

    /// Look up the report for a viewport by name.
    pub fn viewport(&self, name: &str) -> Option<&ViewportReport> {
        self.viewports.iter().find(|report| report.name == name)
    }

    /// Iterate over every verdict in report order.
    pub fn verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.viewports.iter().flat_map(|report| report.tests.iter())
    }

    /// Check if no test failed.
    pub fn all_passed(&self) -> bool {
        self.summary.failed == 0
    }

    /// Serialize as indented JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the results as indented JSON to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))?;
        tracing::info!(path = %path.display(), "Saved detailed report");
        Ok(())
    }
}

impl Default for Results {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable rendering of [`Results`].
pub struct TextReport<'a>(pub &'a Results);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results = self.0;

        writeln!(f, "Touch Target Verification")?;
        writeln!(f, "=========================")?;

        for report in &results.viewports {
            writeln!(f)?;
            writeln!(f, "{} ({}px)", report.name, report.width)?;
            writeln!(
                f,
                "  Minimum requirement: {}x{}px",
                report.min_size, report.min_size
            )?;

            for verdict in &report.tests {
                let mark = match verdict.status {
                    Status::Pass => "PASS",
                    Status::Fail => "FAIL",
                };
                writeln!(f, "  [{}] {} ({})", mark, verdict.name, verdict.selector)?;
                writeln!(
                    f,
                    "         Size: {}x{}px",
                    verdict.actual.width, verdict.actual.height
                )?;
                for issue in &verdict.issues {
                    writeln!(f, "         - {}", issue)?;
                }
            }
        }

        let summary = &results.summary;
        writeln!(f)?;
        writeln!(f, "Summary")?;
        writeln!(f, "=======")?;
        writeln!(f, "Total Tests: {}", summary.total_tests)?;
        writeln!(f, "Passed:      {}", summary.passed)?;
        writeln!(f, "Failed:      {}", summary.failed)?;
        writeln!(f, "Warnings:    {}", summary.warnings)?;
        writeln!(f, "Pass Rate:   {:.1}%", summary.pass_rate())?;
        writeln!(f)?;

        if results.all_passed() {
            write!(f, "All touch targets meet accessibility requirements.")
        } else {
            write!(f, "Some touch targets need adjustment to meet requirements.")
        }
    }
}
