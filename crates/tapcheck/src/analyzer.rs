//! Running every target against every viewport.

use std::path::Path;

use rayon::prelude::*;
use tapcheck_style::resolve::CascadeResolver;
use tapcheck_style::rules::StyleSheet;

use crate::config::{Config, Target, Viewport};
use crate::evaluate::{Verdict, evaluate};
use crate::geometry::compute_box;
use crate::report::{Results, Summary, ViewportReport};
use crate::Result;

/// Evaluates a configuration against stylesheets.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    /// Create an analyzer for a configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load an HTML document and analyze its embedded styles.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Results> {
        let sheet = StyleSheet::from_file(path)?;
        Ok(self.analyze(&sheet))
    }

    /// Analyze every target at every viewport.
    ///
    /// Pairs are independent, so targets are evaluated in parallel. Report
    /// order follows the configuration.
    pub fn analyze(&self, sheet: &StyleSheet) -> Results {
        let resolver = CascadeResolver::new(sheet);
        let mut results = Results::new();

        for viewport in &self.config.viewports {
            tracing::info!(
                viewport = %viewport.name,
                width = viewport.width,
                min_size = viewport.min_size,
                "Testing viewport"
            );

            let (tests, tallies): (Vec<Verdict>, Vec<Summary>) = self
                .config
                .targets
                .par_iter()
                .map(|target| check_target(&resolver, target, viewport))
                .unzip();

            let mut report = ViewportReport::new(viewport);
            report.tests = tests;
            results.viewports.push(report);
            results.summary += tallies.into_iter().sum::<Summary>();
        }

        tracing::info!(
            total = results.summary.total_tests,
            passed = results.summary.passed,
            failed = results.summary.failed,
            warnings = results.summary.warnings,
            "Analysis complete"
        );
        results
    }
}

/// Resolve, measure and evaluate one target at one viewport.
fn check_target(
    resolver: &CascadeResolver<'_>,
    target: &Target,
    viewport: &Viewport,
) -> (Verdict, Summary) {
    let style = resolver.resolve(&target.selector, viewport.width);
    let size = compute_box(&style);
    let (verdict, summary) = evaluate(target, viewport, size);

    tracing::debug!(
        selector = %target.selector,
        viewport = %viewport.name,
        width = size.width,
        height = size.height,
        status = ?verdict.status,
        "Checked target"
    );
    (verdict, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Status;
    use crate::geometry::BoxSize;

    #[test]
    fn totals_cover_every_pair() {
        let analyzer = Analyzer::default();
        let results = analyzer.analyze(&StyleSheet::new());

        let config = analyzer.config();
        let expected = (config.viewports.len() * config.targets.len()) as u32;
        assert_eq!(results.summary.total_tests, expected);
        assert_eq!(results.summary.passed + results.summary.failed, expected);
        assert_eq!(results.verdicts().count() as u32, expected);
    }

    #[test]
    fn report_order_follows_configuration() {
        let config = Config {
            viewports: vec![Viewport::new("B", 480, 48), Viewport::new("A", 320, 48)],
            targets: vec![Target::new("#z", "Z"), Target::new("#y", "Y"), Target::new("#x", "X")],
        };
        let results = Analyzer::new(config).analyze(&StyleSheet::new());

        let names: Vec<&str> = results.viewports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        let selectors: Vec<&str> = results.viewports[0]
            .tests
            .iter()
            .map(|v| v.selector.as_str())
            .collect();
        assert_eq!(selectors, vec!["#z", "#y", "#x"]);
    }

    #[test]
    fn breakpoints_change_verdicts() {
        let sheet = StyleSheet::from_css(
            r#"
            #go { min-width: 40px; min-height: 40px; }
            @media (max-width: 480px) { #go { min-width: 48px; min-height: 48px; } }
            "#,
        );
        let config = Config {
            viewports: vec![Viewport::new("Phone", 320, 48), Viewport::new("Tablet", 768, 44)],
            targets: vec![Target::new("#go", "Go")],
        };
        let results = Analyzer::new(config).analyze(&sheet);

        let phone = &results.viewport("Phone").unwrap().tests[0];
        assert_eq!(phone.actual, BoxSize::new(48, 48));
        assert_eq!(phone.status, Status::Pass);

        let tablet = &results.viewport("Tablet").unwrap().tests[0];
        assert_eq!(tablet.actual, BoxSize::new(40, 40));
        assert_eq!(tablet.status, Status::Fail);
        assert!(!results.all_passed());
    }
}
