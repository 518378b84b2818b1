//! Print slider readouts for bandwidth and slew rate
//!
//! Sweeps slider positions and shows the value each parameter's readout
//! displays at that position. Positions beyond the ends of travel
//! extrapolate and are marked with `*`.
//!
//! Usage:
//! ```bash
//! cargo run --bin slider_table -- --positions 0:100:10 [--json] [--output FILE]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use scan_harness::shared_args::ReportArgs;
use scan_harness::sweep_arg::SweepArg;
use scan_math::{ParameterRange, BANDWIDTH_KHZ, SLEW_RATE_FS_PER_US};
use serde::Serialize;
use std::fmt::Write;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tabulate exponential slider readouts", long_about = None)]
struct Args {
    /// Slider positions as start:stop:step
    #[arg(short, long, default_value = "0:100:10")]
    positions: SweepArg,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Debug, Serialize)]
struct SliderRow {
    position: f64,
    bandwidth_khz: f64,
    slew_rate_fs_per_us: f64,
    /// Both values lie within their ranges
    in_range: bool,
}

#[derive(Debug, Serialize)]
struct SliderTable {
    bandwidth_khz: ParameterRange,
    slew_rate_fs_per_us: ParameterRange,
    rows: Vec<SliderRow>,
}

fn build_table(positions: &SweepArg) -> SliderTable {
    let rows = positions
        .positions()
        .into_iter()
        .map(|position| {
            let bandwidth_khz = BANDWIDTH_KHZ.to_value(position);
            let slew_rate_fs_per_us = SLEW_RATE_FS_PER_US.to_value(position);
            SliderRow {
                position,
                bandwidth_khz,
                slew_rate_fs_per_us,
                in_range: BANDWIDTH_KHZ.contains(bandwidth_khz)
                    && SLEW_RATE_FS_PER_US.contains(slew_rate_fs_per_us),
            }
        })
        .collect();
    SliderTable {
        bandwidth_khz: BANDWIDTH_KHZ,
        slew_rate_fs_per_us: SLEW_RATE_FS_PER_US,
        rows,
    }
}

fn render_text(table: &SliderTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:>12}  {:>12}", "Slider", "BW (kHz)", "Slew (FS/μs)");
    for row in &table.rows {
        let marker = if row.in_range { "" } else { " *" };
        let _ = writeln!(
            out,
            "{:>8.1}  {:>12.3}  {:>12.5}{marker}",
            row.position, row.bandwidth_khz, row.slew_rate_fs_per_us
        );
    }
    out
}

fn run(args: &Args) -> Result<()> {
    let table = build_table(&args.positions);
    let report = if args.report.json {
        serde_json::to_string_pretty(&table).context("Failed to serialize slider table")?
    } else {
        render_text(&table)
    };
    args.report.emit(&report).context("Failed to emit slider table")?;
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
