//! Command-line arguments and output handling shared by the harness binaries.

use crate::assertion::{AssertionHarness, Suite};
use crate::error::HarnessError;
use crate::report::TestReport;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

/// Report options common to every harness binary
#[derive(Parser, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Emit the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    /// Send a rendered report to the configured destination
    pub fn emit(&self, report: &str) -> Result<(), HarnessError> {
        match &self.output {
            Some(path) => write_report(path, report),
            None => {
                println!("{report}");
                Ok(())
            }
        }
    }
}

/// Write a report file, creating parent directories as needed
pub fn write_report(path: &Path, report: &str) -> Result<(), HarnessError> {
    let io_err = |source: std::io::Error| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, report).map_err(io_err)?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Run a suite once, emit its report, and return whether every case passed
pub fn run_suite(suite: Suite, args: &ReportArgs) -> Result<bool, HarnessError> {
    let mut harness = AssertionHarness::new(suite);
    let passed = harness.run();

    let report = if args.json {
        TestReport::new(harness.suite_name(), harness.cases()).to_json()?
    } else {
        harness.report()
    };
    args.emit(&report)?;
    Ok(passed)
}

/// Process exit status for a suite outcome
pub fn exit_code(all_passed: bool) -> i32 {
    if all_passed {
        0
    } else {
        1
    }
}
