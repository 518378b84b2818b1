//! Slider validation suite
//!
//! Checks the exponential bandwidth and slew-rate sliders: UI defaults,
//! scaling at quarter points, round trips and the ends of travel.
//!
//! Usage:
//! ```bash
//! cargo run --bin validate_sliders -- [--json] [--output FILE]
//! ```
//!
//! Exits 0 when every case passes, 1 otherwise.

use anyhow::Context;
use clap::Parser;
use scan_harness::shared_args::{exit_code, run_suite, ReportArgs};
use scan_harness::suites::slider_validation;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate exponential slider mapping", long_about = None)]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run_suite(slider_validation(), &args.report).context("Failed to emit slider report") {
        Ok(passed) => std::process::exit(exit_code(passed)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
