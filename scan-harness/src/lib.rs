//! Validation and benchmark harnesses for the scan visualizer
//!
//! This crate checks the parameter math in `scan_math` the way the
//! visualizer uses it, and times the visualizer's synthetic workloads:
//!
//! - **Assertion** - Tolerance-based test case recording over ordered suites
//! - **Suites** - Slider validation and comprehensive checks
//! - **Report** - Text and JSON rendering of recorded cases
//! - **Benchmark** - Timed classification workloads with summary statistics
//!
//! Nothing runs on load; binaries under `src/bin` are the entry points.

pub mod assertion;
pub mod benchmark;
pub mod classify;
pub mod config;
pub mod error;
pub mod layout;
pub mod report;
pub mod shared_args;
pub mod stats;
pub mod suites;
pub mod sweep_arg;

// Re-export commonly used types
pub use assertion::{
    AssertionHarness, Comparison, HarnessState, Observed, Suite, Summary, TestCase,
};
pub use benchmark::{
    BenchmarkHarness, BenchmarkRecord, BenchmarkReport, BenchmarkSummary, Metric,
};
pub use classify::{pattern_complexity, view_mode_cost, Cost, PatternKind, ViewMode};
pub use config::BenchmarkConfig;
pub use error::HarnessError;
pub use report::TestReport;
pub use sweep_arg::SweepArg;
