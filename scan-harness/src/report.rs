//! Rendering of recorded test cases.
//!
//! Reports are built from a finished sequence of [`TestCase`]s and returned
//! as strings, so callers decide where they go.

use crate::assertion::{Summary, TestCase};
use crate::error::HarnessError;
use serde::Serialize;
use std::fmt::Write;

/// Machine-readable form of a suite run.
#[derive(Debug, Serialize)]
pub struct TestReport<'a> {
    pub suite: &'a str,
    pub summary: Summary,
    pub all_passed: bool,
    pub cases: &'a [TestCase],
}

impl<'a> TestReport<'a> {
    pub fn new(suite: &'a str, cases: &'a [TestCase]) -> Self {
        let summary = Summary::from_cases(cases);
        Self {
            suite,
            summary,
            all_passed: summary.all_passed(),
            cases,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One status line per case, with details on failure.
pub fn render_case(case: &TestCase) -> String {
    let status = if case.passed() { "✓ PASS" } else { "✗ FAIL" };
    let mut line = format!("{status} {}: {}", case.name(), case.description());
    if !case.passed() {
        let tolerance = case
            .comparison()
            .tolerance()
            .map_or_else(|| "exact".to_string(), |t| t.to_string());
        let _ = write!(
            line,
            "\n    Expected: {}, Actual: {}, Tolerance: {tolerance}",
            case.expected(),
            case.actual()
        );
    }
    line
}

/// Full text report: per-case lines, summary and a recap of failures.
pub fn render_text(suite: &str, cases: &[TestCase]) -> String {
    let summary = Summary::from_cases(cases);
    let mut out = String::new();

    let _ = writeln!(out, "========== {} ==========", suite.to_uppercase());
    for case in cases {
        let _ = writeln!(out, "{}", render_case(case));
    }

    let _ = writeln!(out, "\nTest Results: {summary} tests passed");
    if summary.all_passed() {
        let _ = writeln!(out, "All tests passed");
    } else {
        let _ = writeln!(out, "{} test(s) failed:", summary.failed());
        for case in cases.iter().filter(|case| !case.passed()) {
            let _ = writeln!(
                out,
                "  ✗ {}: expected {}, got {}",
                case.name(),
                case.expected(),
                case.actual()
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::Observed;

    fn case(name: &str, expected: f64, actual: f64, tolerance: f64) -> TestCase {
        TestCase::evaluate(
            "group",
            name,
            "description",
            Observed::Number(expected),
            Observed::Number(actual),
            tolerance,
        )
    }

    #[test]
    fn test_passing_case_has_no_details() {
        let line = render_case(&case("ok", 1.0, 1.0, 0.1));
        assert_eq!(line, "✓ PASS ok: description");
    }

    #[test]
    fn test_failing_case_shows_details() {
        let line = render_case(&case("bad", 1.0, 2.0, 0.1));
        assert!(line.starts_with("✗ FAIL bad: description"));
        assert!(line.contains("Expected: 1, Actual: 2, Tolerance: 0.1"));
    }

    #[test]
    fn test_exact_failure_reports_exact_tolerance() {
        let failed = TestCase::evaluate(
            "group",
            "size",
            "",
            Observed::Integer(300),
            Observed::Integer(512),
            0.0,
        );
        assert!(render_case(&failed).contains("Tolerance: exact"));
    }

    #[test]
    fn test_report_summary_line() {
        let cases = vec![case("a", 1.0, 1.0, 0.0), case("b", 1.0, 5.0, 0.0)];
        let text = render_text("Demo", &cases);
        assert!(text.contains("========== DEMO =========="));
        assert!(text.contains("Test Results: 1/2 tests passed"));
        assert!(text.contains("1 test(s) failed:"));
        assert!(text.contains("  ✗ b: expected 1, got 5"));
    }

    #[test]
    fn test_empty_report() {
        let text = render_text("Empty", &[]);
        assert!(text.contains("Test Results: 0/0 tests passed"));
        assert!(text.contains("All tests passed"));
    }

    #[test]
    fn test_json_report() {
        let cases = vec![case("a", 1.0, 1.0, 0.0)];
        let json = TestReport::new("Demo", &cases).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["suite"], "Demo");
        assert_eq!(value["summary"]["passed"], 1);
        assert_eq!(value["all_passed"], true);
        assert_eq!(value["cases"][0]["comparison"]["strategy"], "numeric_within_tolerance");
    }
}
