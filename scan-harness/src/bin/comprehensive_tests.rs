//! Comprehensive visualizer suite
//!
//! Checks view mode and pattern availability, scan line timing, line delay
//! unit conversion, canvas scaling and the mobile layout rules.
//!
//! Usage:
//! ```bash
//! cargo run --bin comprehensive_tests -- [--json] [--output FILE]
//! ```
//!
//! Exits 0 when every case passes, 1 otherwise.

use anyhow::Context;
use clap::Parser;
use scan_harness::shared_args::{exit_code, run_suite, ReportArgs};
use scan_harness::suites::comprehensive;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run comprehensive scan visualizer checks", long_about = None)]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run_suite(comprehensive(), &args.report).context("Failed to emit comprehensive report") {
        Ok(passed) => std::process::exit(exit_code(passed)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
