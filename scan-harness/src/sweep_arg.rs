//! Slider position sweep argument.
//!
//! Parses `start:stop:step` from the command line into the list of slider
//! positions a mapping table should cover.

use std::fmt;
use std::str::FromStr;

/// Largest number of positions a sweep may produce
pub const MAX_SWEEP_POSITIONS: usize = 1_000_000;

/// Parse a `start:stop:step` sweep specification.
///
/// # Validation Rules
/// - All three components must parse as finite numbers
/// - `step` must be positive
/// - `stop` must not be below `start`
/// - The sweep must produce at most [`MAX_SWEEP_POSITIONS`] positions
///
/// # Examples
/// - `"0:100:10"` - every tenth position across full travel
/// - `"40:60:0.5"` - fine sweep around the default bandwidth setting
pub fn parse_sweep(s: &str) -> Result<(f64, f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    let &[start_text, stop_text, step_text] = parts.as_slice() else {
        return Err("Sweep must be in format 'start:stop:step'".to_string());
    };

    let parse = |field: &str, text: &str| {
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid {field} value '{}'", text.trim()))
    };
    let start = parse("start", start_text)?;
    let stop = parse("stop", stop_text)?;
    let step = parse("step", step_text)?;

    if step <= 0.0 {
        return Err(format!("Step must be positive, got {step}"));
    }
    if stop < start {
        return Err(format!("Stop ({stop}) must not be below start ({start})"));
    }
    let span = (stop - start) / step;
    if !span.is_finite() || span >= MAX_SWEEP_POSITIONS as f64 {
        return Err(format!(
            "Sweep {start}:{stop}:{step} exceeds {MAX_SWEEP_POSITIONS} positions"
        ));
    }

    Ok((start, stop, step))
}

/// Validated slider position sweep, usable directly as a clap argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepArg {
    start: f64,
    stop: f64,
    step: f64,
}

impl FromStr for SweepArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, stop, step) = parse_sweep(s)?;
        Ok(Self { start, stop, step })
    }
}

impl fmt::Display for SweepArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

impl SweepArg {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Positions from start to stop inclusive.
    ///
    /// Each position is computed as `start + i * step` so rounding does not
    /// accumulate, and a stop that lands within a millionth of a step of the
    /// last position is included. Never more than [`MAX_SWEEP_POSITIONS`].
    pub fn positions(&self) -> Vec<f64> {
        let span = (self.stop - self.start) / self.step;
        let count = ((span + 1e-6).floor() as usize)
            .checked_add(1)
            .map_or(MAX_SWEEP_POSITIONS, |n| n.min(MAX_SWEEP_POSITIONS));
        (0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_sweep("0:100:10").unwrap(), (0.0, 100.0, 10.0));
        assert_eq!(parse_sweep(" 40 : 60 : 0.5 ").unwrap(), (40.0, 60.0, 0.5));
        assert_eq!(parse_sweep("50:50:1").unwrap(), (50.0, 50.0, 1.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_sweep("0:100").is_err());
        assert!(parse_sweep("0:100:10:1").is_err());
        assert!(parse_sweep("a:100:10").is_err());
        assert!(parse_sweep("0:inf:10").is_err());
        assert!(parse_sweep("0:100:0").is_err());
        assert!(parse_sweep("0:100:-5").is_err());
        assert!(parse_sweep("100:0:10").is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_sweeps() {
        assert!(parse_sweep("-1e308:1e308:1").is_err());
        assert!(parse_sweep("0:100:1e-12").is_err());
        assert!("-1e308:1e308:1".parse::<SweepArg>().is_err());
        assert_eq!(
            parse_sweep("0:1000000:1").unwrap_err(),
            "Sweep 0:1000000:1 exceeds 1000000 positions"
        );
    }

    #[test]
    fn test_largest_allowed_sweep() {
        let sweep: SweepArg = "0:999999:1".parse().unwrap();
        assert_eq!(sweep.positions().len(), MAX_SWEEP_POSITIONS);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            parse_sweep("0:x:1").unwrap_err(),
            "Invalid stop value 'x'"
        );
        assert_eq!(
            parse_sweep("10:5:1").unwrap_err(),
            "Stop (5) must not be below start (10)"
        );
    }

    #[test]
    fn test_positions_inclusive() {
        let sweep: SweepArg = "0:100:25".parse().unwrap();
        assert_eq!(sweep.positions(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_positions_inexact_end() {
        let sweep: SweepArg = "0:10:4".parse().unwrap();
        assert_eq!(sweep.positions(), vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_positions_fractional_step_reaches_stop() {
        let sweep: SweepArg = "0:1:0.1".parse().unwrap();
        let positions = sweep.positions();
        assert_eq!(positions.len(), 11);
        assert!((positions[10] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_position() {
        let sweep: SweepArg = "43:43:1".parse().unwrap();
        assert_eq!(sweep.positions(), vec![43.0]);
    }

    #[test]
    fn test_display() {
        let sweep: SweepArg = "0:100:12.5".parse().unwrap();
        assert_eq!(sweep.to_string(), "0:100:12.5");
        assert_eq!(sweep.start(), 0.0);
        assert_eq!(sweep.stop(), 100.0);
        assert_eq!(sweep.step(), 12.5);
    }
}
