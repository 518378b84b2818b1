//! Wall-clock benchmarks of the visualizer's synthetic workloads.
//!
//! Four categories are timed in order: the resolution sweep, pattern
//! complexity classification, view-mode cost classification, and the
//! mobile-vs-desktop layout comparison. The workloads are light stand-ins, so
//! recorded durations are often zero or well under a millisecond; that is a
//! valid measurement, not an error.

use crate::assertion::HarnessState;
use crate::classify::{pattern_complexity, view_mode_cost, Cost};
use crate::config::BenchmarkConfig;
use crate::error::HarnessError;
use crate::stats::{mean, median};
use log::{debug, info};
use serde::Serialize;
use std::fmt::{self, Write};
use std::hint::black_box;
use std::time::Instant;

/// Channel writes per RGBA canvas pixel
const RGBA_CHANNELS: u64 = 4;

/// Fixed advice printed after every benchmark pass
pub const RECOMMENDATIONS: [&str; 4] = [
    "Use 256x256 resolution for optimal performance",
    "Avoid 1024x1024 on mobile devices",
    "Displacement heatmap is most computationally intensive",
    "Zone plate and chirp patterns are most complex",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkCategory {
    Resolution,
    Pattern,
    ViewMode,
    Layout,
}

impl BenchmarkCategory {
    pub const ALL: [BenchmarkCategory; 4] = [
        BenchmarkCategory::Resolution,
        BenchmarkCategory::Pattern,
        BenchmarkCategory::ViewMode,
        BenchmarkCategory::Layout,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BenchmarkCategory::Resolution => "Resolution Performance",
            BenchmarkCategory::Pattern => "Pattern Generation Performance",
            BenchmarkCategory::ViewMode => "View Mode Performance",
            BenchmarkCategory::Layout => "Mobile vs Desktop Performance",
        }
    }
}

/// What a benchmark measured besides its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Metric {
    Operations(u64),
    Complexity(Cost),
    Processing(Cost),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Operations(ops) => write!(f, "{ops} ops"),
            Metric::Complexity(cost) => write!(f, "complexity: {cost}"),
            Metric::Processing(cost) => write!(f, "processing: {cost}"),
        }
    }
}

/// One timed workload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub category: BenchmarkCategory,
    pub test: String,
    pub duration_ms: f64,
    pub metric: Metric,
}

impl BenchmarkRecord {
    /// Throughput for operation-count records with a measurable duration
    pub fn ops_per_ms(&self) -> Option<f64> {
        match self.metric {
            Metric::Operations(ops) if self.duration_ms > 0.0 => {
                Some(ops as f64 / self.duration_ms)
            }
            _ => None,
        }
    }
}

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: BenchmarkCategory,
    pub count: usize,
    pub total_ms: f64,
}

/// Aggregate view over every recorded benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub count: usize,
    pub total_ms: f64,
    pub average_ms: f64,
    pub median_ms: Option<f64>,
    pub categories: Vec<CategorySummary>,
    /// Desktop layout duration over mobile layout duration
    pub desktop_to_mobile_ratio: Option<f64>,
}

impl BenchmarkSummary {
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let durations: Vec<f64> = records.iter().map(|r| r.duration_ms).collect();

        let categories = BenchmarkCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let in_category: Vec<&BenchmarkRecord> =
                    records.iter().filter(|r| r.category == category).collect();
                if in_category.is_empty() {
                    return None;
                }
                Some(CategorySummary {
                    category,
                    count: in_category.len(),
                    total_ms: in_category.iter().map(|r| r.duration_ms).sum(),
                })
            })
            .collect();

        let layout_ms = |name: &str| {
            records
                .iter()
                .find(|r| r.category == BenchmarkCategory::Layout && r.test == name)
                .map(|r| r.duration_ms)
        };
        let desktop_to_mobile_ratio = match (layout_ms(MOBILE_TEST), layout_ms(DESKTOP_TEST)) {
            (Some(mobile), Some(desktop)) if mobile > 0.0 => Some(desktop / mobile),
            _ => None,
        };

        Self {
            count: records.len(),
            total_ms: durations.iter().sum(),
            average_ms: mean(&durations),
            median_ms: median(&durations),
            categories,
            desktop_to_mobile_ratio,
        }
    }
}

/// Machine-readable form of a benchmark pass.
#[derive(Debug, Serialize)]
pub struct BenchmarkReport<'a> {
    pub records: &'a [BenchmarkRecord],
    pub summary: BenchmarkSummary,
    pub recommendations: &'static [&'static str],
}

impl<'a> BenchmarkReport<'a> {
    pub fn new(records: &'a [BenchmarkRecord]) -> Self {
        Self {
            records,
            summary: BenchmarkSummary::from_records(records),
            recommendations: &RECOMMENDATIONS,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

const MOBILE_TEST: &str = "Mobile Layout";
const DESKTOP_TEST: &str = "Desktop Layout";

/// Run a closure and return its result with the elapsed milliseconds
fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

/// RGBA channel writes needed to fill a square canvas
pub fn canvas_operations(resolution: u32) -> u64 {
    let side = u64::from(resolution);
    side * side * RGBA_CHANNELS
}

/// Times the configured workloads once and keeps the records.
#[derive(Debug)]
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
    records: Vec<BenchmarkRecord>,
    state: HarnessState,
}

impl Default for BenchmarkHarness {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default())
    }
}

impl BenchmarkHarness {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            state: HarnessState::Idle,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Time every category once. Later calls return the existing summary.
    pub fn run(&mut self) -> BenchmarkSummary {
        if self.state == HarnessState::Completed {
            return self.summary();
        }

        info!("Running performance benchmarks");
        self.benchmark_resolutions();
        self.benchmark_patterns();
        self.benchmark_view_modes();
        self.benchmark_layouts();
        self.state = HarnessState::Completed;

        let summary = self.summary();
        info!(
            "Benchmarks finished: {} records, {:.3}ms total",
            summary.count, summary.total_ms
        );
        summary
    }

    /// Aggregate statistics; all zero before [`run`](Self::run)
    pub fn summary(&self) -> BenchmarkSummary {
        BenchmarkSummary::from_records(&self.records)
    }

    /// Human-readable report with the fixed recommendations block
    pub fn report(&self) -> String {
        render_text(&self.records, &self.summary())
    }

    fn record(
        &mut self,
        category: BenchmarkCategory,
        test: String,
        duration_ms: f64,
        metric: Metric,
    ) {
        debug!("{test}: {duration_ms:.4}ms ({metric})");
        self.records.push(BenchmarkRecord {
            category,
            test,
            duration_ms,
            metric,
        });
    }

    fn benchmark_resolutions(&mut self) {
        for resolution in self.config.resolutions.clone() {
            let (ops, ms) = timed(|| canvas_operations(black_box(resolution)));
            self.record(
                BenchmarkCategory::Resolution,
                format!("Resolution {resolution}x{resolution}"),
                ms,
                Metric::Operations(ops),
            );
        }
    }

    fn benchmark_patterns(&mut self) {
        for pattern in self.config.patterns.clone() {
            let (complexity, ms) = timed(|| pattern_complexity(black_box(&pattern)));
            self.record(
                BenchmarkCategory::Pattern,
                format!("Pattern: {pattern}"),
                ms,
                Metric::Complexity(complexity),
            );
        }
    }

    fn benchmark_view_modes(&mut self) {
        for mode in self.config.view_modes.clone() {
            let (cost, ms) = timed(|| view_mode_cost(black_box(&mode)));
            self.record(
                BenchmarkCategory::ViewMode,
                format!("View Mode: {mode}"),
                ms,
                Metric::Processing(cost),
            );
        }
    }

    fn benchmark_layouts(&mut self) {
        let (mobile_ops, mobile_ms) = timed(|| black_box(self.config.mobile_ops));
        let (desktop_ops, desktop_ms) = timed(|| black_box(self.config.desktop_ops));
        self.record(
            BenchmarkCategory::Layout,
            MOBILE_TEST.to_string(),
            mobile_ms,
            Metric::Operations(mobile_ops),
        );
        self.record(
            BenchmarkCategory::Layout,
            DESKTOP_TEST.to_string(),
            desktop_ms,
            Metric::Operations(desktop_ops),
        );
    }
}

/// Render benchmark records, summary and recommendations
pub fn render_text(records: &[BenchmarkRecord], summary: &BenchmarkSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "========== PERFORMANCE BENCHMARKS ==========");

    for category in BenchmarkCategory::ALL {
        let mut in_category = records.iter().filter(|r| r.category == category).peekable();
        if in_category.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\n{}:", category.title());
        for record in in_category {
            let _ = write!(
                out,
                "  {}: {:.2}ms ({}",
                record.test, record.duration_ms, record.metric
            );
            if let Some(rate) = record.ops_per_ms() {
                let _ = write!(out, ", {rate:.0} ops/ms");
            }
            let _ = writeln!(out, ")");
        }
        if category == BenchmarkCategory::Layout {
            if let Some(ratio) = summary.desktop_to_mobile_ratio {
                let _ = writeln!(out, "  Mobile efficiency: {ratio:.1}x faster");
            }
        }
    }

    let _ = writeln!(out, "\nPerformance Summary:");
    let _ = writeln!(out, "  Total benchmarks: {}", summary.count);
    let _ = writeln!(out, "  Average duration: {:.2}ms", summary.average_ms);
    if let Some(median_ms) = summary.median_ms {
        let _ = writeln!(out, "  Median duration:  {median_ms:.2}ms");
    }
    let _ = writeln!(out, "  Total duration:   {:.2}ms", summary.total_ms);
    for category in &summary.categories {
        let _ = writeln!(
            out,
            "  {:<32} {:>3} runs, {:.2}ms",
            category.category.title(),
            category.count,
            category.total_ms
        );
    }

    let _ = writeln!(out, "\nPerformance Recommendations:");
    for line in RECOMMENDATIONS {
        let _ = writeln!(out, "  - {line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        category: BenchmarkCategory,
        test: &str,
        duration_ms: f64,
        metric: Metric,
    ) -> BenchmarkRecord {
        BenchmarkRecord {
            category,
            test: test.to_string(),
            duration_ms,
            metric,
        }
    }

    #[test]
    fn test_canvas_operations() {
        assert_eq!(canvas_operations(128), 65_536);
        assert_eq!(canvas_operations(1024), 4_194_304);
    }

    #[test]
    fn test_default_run_records_every_workload() {
        let mut harness = BenchmarkHarness::default();
        let summary = harness.run();

        assert_eq!(harness.state(), HarnessState::Completed);
        assert_eq!(summary.count, 4 + 9 + 3 + 2);
        assert_eq!(harness.records().len(), summary.count);
        assert!(harness.records().iter().all(|r| r.duration_ms >= 0.0));

        let counts: Vec<(BenchmarkCategory, usize)> = summary
            .categories
            .iter()
            .map(|c| (c.category, c.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (BenchmarkCategory::Resolution, 4),
                (BenchmarkCategory::Pattern, 9),
                (BenchmarkCategory::ViewMode, 3),
                (BenchmarkCategory::Layout, 2),
            ]
        );
    }

    #[test]
    fn test_metrics_follow_classification() {
        let mut harness = BenchmarkHarness::default();
        harness.run();
        let metric = |name: &str| {
            harness
                .records()
                .iter()
                .find(|r| r.test == name)
                .map(|r| r.metric)
        };
        assert_eq!(metric("Resolution 256x256"), Some(Metric::Operations(262_144)));
        assert_eq!(metric("Pattern: chirp"), Some(Metric::Complexity(Cost::High)));
        assert_eq!(metric("View Mode: error"), Some(Metric::Processing(Cost::High)));
        assert_eq!(metric("Mobile Layout"), Some(Metric::Operations(1000)));
        assert_eq!(metric("Desktop Layout"), Some(Metric::Operations(2000)));
    }

    #[test]
    fn test_unknown_names_benchmark_as_medium() {
        let config = BenchmarkConfig {
            patterns: vec!["spiral".to_string()],
            view_modes: vec!["overlay".to_string()],
            ..BenchmarkConfig::default()
        };
        let mut harness = BenchmarkHarness::new(config);
        harness.run();
        let metrics: Vec<Metric> = harness
            .records()
            .iter()
            .filter(|r| r.category != BenchmarkCategory::Resolution)
            .filter(|r| r.category != BenchmarkCategory::Layout)
            .map(|r| r.metric)
            .collect();
        assert_eq!(
            metrics,
            vec![Metric::Complexity(Cost::Medium), Metric::Processing(Cost::Medium)]
        );
    }

    #[test]
    fn test_second_run_keeps_records() {
        let mut harness = BenchmarkHarness::default();
        let first = harness.run().count;
        let second = harness.run().count;
        assert_eq!(first, second);
        assert_eq!(harness.records().len(), first);
    }

    #[test]
    fn test_summary_before_run_is_zero() {
        let harness = BenchmarkHarness::default();
        let summary = harness.summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_ms, 0.0);
        assert_eq!(summary.average_ms, 0.0);
        assert_eq!(summary.median_ms, None);
        assert!(summary.categories.is_empty());
        assert!(harness.report().contains("Total benchmarks: 0"));
    }

    #[test]
    fn test_summary_statistics() {
        use BenchmarkCategory::{Layout, Resolution};
        let records = vec![
            record(Resolution, "Resolution 128x128", 1.0, Metric::Operations(65_536)),
            record(Resolution, "Resolution 256x256", 3.0, Metric::Operations(262_144)),
            record(Layout, "Mobile Layout", 0.5, Metric::Operations(1000)),
            record(Layout, "Desktop Layout", 1.5, Metric::Operations(2000)),
        ];
        let summary = BenchmarkSummary::from_records(&records);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total_ms, 6.0);
        assert_eq!(summary.average_ms, 1.5);
        assert_eq!(summary.median_ms, Some(1.25));
        assert_eq!(summary.desktop_to_mobile_ratio, Some(3.0));
        assert_eq!(summary.categories[0].total_ms, 4.0);
    }

    #[test]
    fn test_zero_durations_are_valid() {
        let records = vec![
            record(BenchmarkCategory::Layout, MOBILE_TEST, 0.0, Metric::Operations(1000)),
            record(BenchmarkCategory::Layout, DESKTOP_TEST, 0.0, Metric::Operations(2000)),
        ];
        let summary = BenchmarkSummary::from_records(&records);
        assert_eq!(summary.total_ms, 0.0);
        assert_eq!(summary.desktop_to_mobile_ratio, None);
        assert_eq!(records[0].ops_per_ms(), None);

        let text = render_text(&records, &summary);
        assert!(!text.contains("Mobile efficiency"));
        assert!(!text.contains("ops/ms"));
    }

    #[test]
    fn test_json_report() {
        let mut harness = BenchmarkHarness::default();
        harness.run();
        let json = BenchmarkReport::new(harness.records()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["count"], 18);
        assert_eq!(value["records"][0]["category"], "resolution");
        assert_eq!(value["records"][0]["metric"]["kind"], "operations");
        assert_eq!(value["records"][0]["metric"]["value"], 65_536);
        assert_eq!(value["records"][4]["metric"]["value"], "high");
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_report_layout() {
        let records = vec![record(
            BenchmarkCategory::Resolution,
            "Resolution 128x128",
            2.0,
            Metric::Operations(65_536),
        )];
        let text = render_text(&records, &BenchmarkSummary::from_records(&records));
        assert!(text.contains("Resolution Performance:"));
        assert!(text.contains("  Resolution 128x128: 2.00ms (65536 ops, 32768 ops/ms)"));
        assert!(!text.contains("Pattern Generation Performance:"));
        for line in RECOMMENDATIONS {
            assert!(text.contains(line));
        }
    }
}
