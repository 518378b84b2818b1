//! Benchmark configuration.
//!
//! Defaults reproduce the standard benchmark pass. A JSON file can override
//! any subset of fields:
//!
//! ```json
//! { "resolutions": [256, 2048], "patterns": ["zone", "spiral"] }
//! ```

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Workloads timed by the benchmark harness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Square scan resolutions for the resolution sweep
    pub resolutions: Vec<u32>,
    /// Pattern names to classify
    pub patterns: Vec<String>,
    /// View mode names to classify
    pub view_modes: Vec<String>,
    /// Synthetic layout operation count on mobile
    pub mobile_ops: u64,
    /// Synthetic layout operation count on desktop
    pub desktop_ops: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            resolutions: vec![128, 256, 512, 1024],
            patterns: [
                "zone", "checker", "gradx", "grady", "ramp2d", "slant", "chirp", "text", "dots",
            ]
            .map(String::from)
            .to_vec(),
            view_modes: ["normal", "error", "difference"].map(String::from).to_vec(),
            mobile_ops: 1000,
            desktop_ops: 2000,
        }
    }
}

impl BenchmarkConfig {
    /// Load and validate a configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every resolution is non-zero
    pub fn validate(&self) -> Result<(), HarnessError> {
        if let Some(bad) = self.resolutions.iter().find(|&&r| r == 0) {
            return Err(HarnessError::InvalidConfig(format!(
                "resolution must be positive, got {bad}"
            )));
        }
        Ok(())
    }
}
