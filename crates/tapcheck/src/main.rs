//! `tapcheck` command-line entry point.
//!
//! Exit codes: 0 when every target passes, 1 when any fails, 2 when the
//! analysis itself could not run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tapcheck::prelude::*;
use tracing_subscriber::EnvFilter;

/// Check touch-target sizes declared in an HTML page's embedded styles.
#[derive(Parser, Debug)]
#[command(name = "tapcheck", version, about)]
struct Args {
    /// HTML document to analyze
    #[arg(default_value = "index.html")]
    input: PathBuf,

    /// TOML file with viewports and targets (built-in lists if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to save the detailed JSON report
    #[arg(long, short, default_value = "touch-target-test-results.json")]
    output: PathBuf,

    /// Do not save the JSON report
    #[arg(long)]
    no_save: bool,

    /// Print the JSON report to stdout instead of the text report
    #[arg(long)]
    json: bool,
}

const EXIT_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = run(&args);

    if let Err(e) = &outcome {
        tracing::error!("Analysis failed: {}", e);
        eprintln!("tapcheck: {}", e);
    }

    exit_code(&outcome)
}

fn exit_code(outcome: &tapcheck::Result<Results>) -> ExitCode {
    match outcome {
        Ok(results) if results.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(EXIT_FAILED),
        Err(_) => ExitCode::from(EXIT_ERROR),
    }
}

fn run(args: &Args) -> tapcheck::Result<Results> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let results = Analyzer::new(config).analyze_file(&args.input)?;

    if args.json {
        println!("{}", results.to_json()?);
    } else {
        println!("{}", TextReport(&results));
    }

    if !args.no_save {
        results.write_json(&args.output)?;
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_passing_exits_zero() {
        assert_eq!(exit_code(&Ok(Results::new())), ExitCode::SUCCESS);
    }

    #[test]
    fn any_failure_exits_one() {
        // Nothing is styled, so every target measures 0x0.
        let results = Analyzer::default().analyze(&StyleSheet::new());
        assert!(!results.all_passed());

        assert_eq!(exit_code(&Ok(results)), ExitCode::from(EXIT_FAILED));
    }

    #[test]
    fn analysis_error_exits_two() {
        let err = Analyzer::default().analyze_file("does-not-exist.html");
        assert!(err.is_err());

        assert_eq!(exit_code(&err), ExitCode::from(EXIT_ERROR));
    }
}
