//! Portfolio Tracker Integration Tests
//!
//! Drive a whole run through the line console and the file sink:
//! 1. Purchases typed on "stdin" end up in the portfolio
//! 2. The printed summary matches the saved file
//! 3. Errors in input are reported without leaving the loop
//!
//! All tests use in-memory input and a temporary directory for the report.

use std::io::Cursor;
use std::path::PathBuf;

use portfolio_tracker::adapters::{FileReportSink, LineConsole, DEFAULT_REPORT_FILE};
use portfolio_tracker::application::{
    PortfolioTracker, TrackerError, TrackerSettings, TrackerSummary, INVALID_QUANTITY_MESSAGE,
    UNKNOWN_SYMBOL_MESSAGE,
};
use portfolio_tracker::config::parse_config;
use portfolio_tracker::domain::{PriceTable, Symbol};

// ============================================================================
// Test Fixtures
// ============================================================================

struct Run {
    summary: TrackerSummary,
    stdout: String,
    report_path: PathBuf,
    _dir: tempfile::TempDir,
}

fn run_session(input: &str, settings: TrackerSettings) -> Run {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join(DEFAULT_REPORT_FILE);

    let mut console = LineConsole::new(Cursor::new(input.to_string()), Vec::new());
    let mut sink = FileReportSink::new(&report_path);
    let tracker = PortfolioTracker::new(PriceTable::builtin(), settings);

    let summary = tracker.run(&mut console, &mut sink).unwrap();
    let stdout = String::from_utf8(console.into_output()).unwrap();

    Run {
        summary,
        stdout,
        report_path,
        _dir: dir,
    }
}

fn run_default(input: &str) -> Run {
    run_session(input, TrackerSettings::default())
}

fn sym(s: &str) -> Symbol {
    Symbol::parse(s).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_purchase_total() {
    let run = run_default("AAPL\n10\ndone\nno\n");

    assert_eq!(run.summary.portfolio.quantity_of(&sym("AAPL")), Some(10));
    assert_eq!(run.summary.portfolio.len(), 1);
    assert_eq!(run.summary.report.total(), 1800);
    assert!(!run.report_path.exists());
}

#[test]
fn test_repeated_symbol_accumulates() {
    let run = run_default("AAPL\n10\nAAPL\n5\ndone\nno\n");

    assert_eq!(run.summary.portfolio.quantity_of(&sym("AAPL")), Some(15));
    assert_eq!(run.summary.report.total(), 2700);
}

#[test]
fn test_unknown_symbol_leaves_portfolio_empty() {
    let run = run_default("XYZ\ndone\nno\n");

    assert!(run.summary.portfolio.is_empty());
    assert_eq!(run.summary.report.total(), 0);
    assert_eq!(run.stdout.matches(UNKNOWN_SYMBOL_MESSAGE).count(), 1);
}

#[test]
fn test_invalid_quantity_leaves_portfolio_empty() {
    let run = run_default("TSLA\nabc\ndone\nno\n");

    assert!(run.summary.portfolio.is_empty());
    assert_eq!(run.summary.report.total(), 0);
    assert_eq!(run.stdout.matches(INVALID_QUANTITY_MESSAGE).count(), 1);
}

#[test]
fn test_saved_file_contents() {
    let run = run_default("AAPL\n10\ndone\nyes\n");

    let saved = std::fs::read_to_string(&run.report_path).unwrap();
    assert_eq!(
        saved,
        "Investment Summary:\nAAPL: 10 shares × ₹180 = ₹1800\n\n Total Investment: ₹1800"
    );
    assert_eq!(run.summary.saved_to.as_deref(), Some(run.report_path.as_path()));
    assert!(run
        .stdout
        .contains(&format!("Report saved to {}", run.report_path.display())));
}

#[test]
fn test_full_console_transcript() {
    let run = run_default("aapl\n10\ndone\nno\n");

    let expected = concat!(
        "Welcome to the Stock Portfolio Tracker!\n",
        "Available stocks: AAPL, TSLA, GOOGL, AMZN, MSFT\n",
        "Enter stock symbol (or 'done' to finish): ",
        "Enter quantity of AAPL shares: ",
        "Enter stock symbol (or 'done' to finish): ",
        "\n",
        "Investment Summary:\n",
        "AAPL: 10 shares × ₹180 = ₹1800\n",
        "\n",
        " Total Investment: ₹1800\n",
        "\n",
        "Do you want to save this report to a file? (yes/no): ",
    );
    assert_eq!(run.stdout, expected);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_console_and_file_match_line_for_line() {
    let run = run_default("MSFT\n3\nGOOGL\n7\nAMZN\n2\nMSFT\n1\ndone\nYes\n");

    let saved = std::fs::read_to_string(&run.report_path).unwrap();
    let start = run.stdout.find("Investment Summary:").unwrap();
    let printed = &run.stdout[start..start + saved.len()];

    assert_eq!(printed, saved);
}

#[test]
fn test_total_is_sum_of_displayed_values() {
    let run = run_default("TSLA\n4\nAAPL\n2\nTSLA\n-1\nMSFT\n0\ndone\nno\n");

    let displayed: i128 = run
        .summary
        .report
        .lines()
        .iter()
        .map(|line| {
            let rendered = line.render();
            let value = rendered.rsplit('₹').next().unwrap();
            value.parse::<i128>().unwrap()
        })
        .sum();

    assert_eq!(displayed, run.summary.report.total());
    assert_eq!(run.summary.report.total(), 3 * 250 + 2 * 180);
}

#[test]
fn test_bad_inputs_never_touch_portfolio() {
    let run = run_default("XYZ\nGOOG\nAAPL\nten\nAAPL\n1.5\nAAPL\n\ndone\nno\n");

    assert!(run.summary.portfolio.is_empty());
    assert_eq!(run.summary.stats.unknown_symbols, 2);
    assert_eq!(run.summary.stats.invalid_quantities, 3);
}

#[test]
fn test_eof_without_sentinel_still_reports() {
    let run = run_default("AMZN\n8\n");

    assert_eq!(run.summary.report.total(), 1000);
    assert!(run.summary.saved_to.is_none());
    assert!(run.stdout.contains(" Total Investment: ₹1000"));
}

#[test]
fn test_save_overwrites_existing_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_REPORT_FILE);
    std::fs::write(&path, "old report\nwith several\nlines\nthat should vanish\n").unwrap();

    let tracker = PortfolioTracker::new(PriceTable::builtin(), TrackerSettings::default());
    let mut console = LineConsole::new(Cursor::new("done\nyes\n"), Vec::new());
    tracker
        .run(&mut console, &mut FileReportSink::new(&path))
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Investment Summary:\n\n Total Investment: ₹0"
    );
}

#[test]
fn test_unwritable_report_path_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join(DEFAULT_REPORT_FILE);

    let tracker = PortfolioTracker::new(PriceTable::builtin(), TrackerSettings::default());
    let mut console = LineConsole::new(Cursor::new("AAPL\n1\ndone\nyes\n"), Vec::new());
    let result = tracker.run(&mut console, &mut FileReportSink::new(&path));

    assert!(matches!(result, Err(TrackerError::Save(_))));
    assert!(!path.exists());
}

#[test]
fn test_configured_policy_rejects_negatives() {
    let config = parse_config("[session]\nreject_non_positive = true\nsentinel = \"end\"\n").unwrap();
    let run = run_session("AAPL\n-5\nAAPL\n2\nend\nno\n", config.tracker_settings());

    assert_eq!(run.summary.portfolio.quantity_of(&sym("AAPL")), Some(2));
    assert_eq!(run.summary.stats.rejected_quantities, 1);
    assert!(run.stdout.contains("Enter stock symbol (or 'end' to finish): "));
}
