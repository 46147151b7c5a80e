//! End-to-end tests for touch-target analysis.

use tapcheck::prelude::*;
use tapcheck::Error;

const GAME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
    body { margin: 0; }

    #start-button { min-width: 200px; min-height: 56px; padding: 16px 32px; }
    #pause-button { min-width: 40px; min-height: 40px; padding: 12px 20px; }
    #help-close { min-height: 70px; padding: 10px 20px; }
    .difficulty-btn { min-width: 100px; min-height: 40px; padding: 14px 20px; }
    #resume-button { width: 46px; height: 46px; }

    @keyframes pulse {
        0% { transform: scale(1); }
        100% { transform: scale(1.1); }
    }

    @media (max-width: 768px) {
        #pause-button { min-width: 48px; min-height: 48px; }
        #help-close { min-height: 48px; padding: 18px 40px; }
        .difficulty-btn { min-width: 120px; min-height: 48px; }
    }

    @media (max-width: 480px) {
        #resume-button { width: 48px; height: 48px; }
    }
</style>
</head>
<body></body>
</html>
"#;

fn viewports() -> Vec<Viewport> {
    vec![
        Viewport::new("iPhone SE", 320, RECOMMENDED_MIN_SIZE),
        Viewport::new("Tablet Portrait", 768, WCAG_MIN_SIZE),
        Viewport::new("Desktop", 1280, WCAG_MIN_SIZE),
    ]
}

fn verdict<'a>(results: &'a Results, viewport: &str, selector: &str) -> &'a Verdict {
    results
        .viewport(viewport)
        .and_then(|report| report.tests.iter().find(|v| v.selector == selector))
        .expect("verdict should exist")
}

#[test]
fn test_document_without_styles_fails_with_zero_box() {
    let sheet = StyleSheet::from_document("<html><body><button id=\"go\"></button></body></html>");
    let config = Config {
        viewports: vec![Viewport::new("iPhone SE", 320, 48)],
        targets: vec![Target::new("#go", "Go Button")],
    };

    let results = Analyzer::new(config).analyze(&sheet);

    let tests: Vec<&Verdict> = results.verdicts().collect();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].actual, BoxSize::new(0, 0));
    assert_eq!(tests[0].status, Status::Fail);
    assert_eq!(tests[0].issues.len(), 2);
    assert!(tests[0].issues[0].starts_with("Width 0px"));
    assert!(tests[0].issues[1].starts_with("Height 0px"));
}

#[test]
fn test_game_page_sizes() {
    let sheet = StyleSheet::from_document(GAME_PAGE);
    let config = Config {
        viewports: viewports(),
        targets: vec![
            Target::new("#help-close", "Help Close Button"),
            Target::new("#pause-button", "Pause Button"),
            Target::new(".difficulty-btn", "Difficulty Buttons"),
        ],
    };

    let results = Analyzer::new(config).analyze(&sheet);

    // Mobile overrides apply on phones and tablets.
    let help = verdict(&results, "iPhone SE", "#help-close");
    assert_eq!(help.actual, BoxSize::new(80, 84));
    assert!(help.passed());

    let pause = verdict(&results, "Tablet Portrait", "#pause-button");
    assert_eq!(pause.actual, BoxSize::new(88, 72));

    let difficulty = verdict(&results, "iPhone SE", ".difficulty-btn");
    assert_eq!(difficulty.actual, BoxSize::new(160, 76));

    // Base rules alone on wide screens.
    let help = verdict(&results, "Desktop", "#help-close");
    assert_eq!(help.actual, BoxSize::new(40, 90));
    assert_eq!(help.status, Status::Fail);
    assert_eq!(help.issues, vec!["Width 40px is less than minimum 44px".to_string()]);

    let pause = verdict(&results, "Desktop", "#pause-button");
    assert_eq!(pause.actual, BoxSize::new(80, 64));
}

#[test]
fn test_warning_between_wcag_and_recommended() {
    let sheet = StyleSheet::from_document(GAME_PAGE);
    let config = Config {
        viewports: viewports(),
        targets: vec![Target::new("#resume-button", "Resume Button")],
    };

    let results = Analyzer::new(config).analyze(&sheet);

    let phone = verdict(&results, "iPhone SE", "#resume-button");
    assert_eq!(phone.actual, BoxSize::new(48, 48));
    assert!(phone.passed());
    assert!(phone.issues.is_empty());

    let tablet = verdict(&results, "Tablet Portrait", "#resume-button");
    assert_eq!(tablet.actual, BoxSize::new(46, 46));
    assert!(tablet.passed());
    assert_eq!(tablet.issues.len(), 1);

    assert_eq!(results.summary.warnings, 2);
    assert_eq!(results.summary.failed, 0);
}

#[test]
fn test_summary_totals_for_default_config() {
    let analyzer = Analyzer::default();
    let results = analyzer.analyze(&StyleSheet::from_document(GAME_PAGE));

    let n = analyzer.config().targets.len() as u32;
    let m = analyzer.config().viewports.len() as u32;
    assert_eq!(results.summary.total_tests, n * m);
    assert_eq!(results.summary.passed + results.summary.failed, n * m);

    for verdict in results.verdicts() {
        let passes = verdict.actual.width >= verdict.expected
            && verdict.actual.height >= verdict.expected;
        assert_eq!(verdict.passed(), passes, "{} at {}", verdict.selector, verdict.viewport);
    }
}

#[test]
fn test_analyze_file_and_save_report() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("index.html");
    let output = dir.path().join("touch-target-test-results.json");
    std::fs::write(&html, GAME_PAGE).unwrap();

    let results = Analyzer::default().analyze_file(&html).unwrap();
    results.write_json(&output).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["summary"]["totalTests"], 30);
    assert_eq!(value["viewports"]["iPhone SE"]["tests"].as_array().unwrap().len(), 10);
    assert_eq!(value["viewports"]["Tablet Portrait"]["minSize"], 44);
}

#[test]
fn test_config_file_drives_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tapcheck.toml");
    std::fs::write(
        &path,
        r##"
        [[viewports]]
        name = "Phone"
        width = 320
        min_size = 48

        [[targets]]
        selector = "#help-close"
        name = "Help Close"
        "##,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    let results = Analyzer::new(config).analyze(&StyleSheet::from_document(GAME_PAGE));

    assert_eq!(results.summary.total_tests, 1);
    assert!(results.all_passed());
}

#[test]
fn test_missing_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Analyzer::default()
        .analyze_file(dir.path().join("nope.html"))
        .unwrap_err();

    assert!(matches!(err, Error::Style(tapcheck_style::Error::Io { .. })));
    assert!(err.to_string().contains("nope.html"));
}
