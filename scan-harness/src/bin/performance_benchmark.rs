//! Performance benchmark for the scan visualizer workloads
//!
//! Times the resolution sweep, pattern and view-mode classification, and the
//! mobile-vs-desktop layout comparison, then prints a summary with fixed
//! recommendations.
//!
//! Usage:
//! ```bash
//! cargo run --release --bin performance_benchmark -- [--config FILE] [--json] [--output FILE]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scan_harness::benchmark::{BenchmarkHarness, BenchmarkReport};
use scan_harness::config::BenchmarkConfig;
use scan_harness::shared_args::ReportArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Benchmark scan visualizer workloads", long_about = None)]
struct Args {
    /// JSON file overriding the default workloads
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    report: ReportArgs,
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading benchmark config from {}", path.display());
            BenchmarkConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => BenchmarkConfig::default(),
    };

    let mut harness = BenchmarkHarness::new(config);
    harness.run();

    let report = if args.report.json {
        BenchmarkReport::new(harness.records()).to_json()?
    } else {
        harness.report()
    };
    args.report
        .emit(&report)
        .context("Failed to emit benchmark report")?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
