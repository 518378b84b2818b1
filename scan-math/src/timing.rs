//! Scan timing arithmetic.
//!
//! A scan line visits `resolution` samples, dwelling `dwell_ns` on each, and
//! then waits `line_delay_ns` before the next line. By convention a frame is
//! square, so it holds `resolution` lines.
//!
//! Inputs are not checked. Negative or non-finite values give meaningless
//! results; the UI validates user input before it reaches these functions.

/// Nanoseconds per millisecond
const NS_PER_MS: f64 = 1e6;

/// Nanoseconds per microsecond
const NS_PER_US: u64 = 1000;

/// Nanoseconds per microsecond, for fractional timing
const NS_PER_US_F64: f64 = 1e3;

/// Duration of one scan line in milliseconds.
///
/// # Arguments
/// * `resolution` - Samples per line
/// * `dwell_ns` - Per-sample dwell time in nanoseconds
/// * `line_delay_ns` - Fixed delay appended to each line in nanoseconds
pub fn line_time_ms(resolution: u32, dwell_ns: f64, line_delay_ns: f64) -> f64 {
    (resolution as f64 * dwell_ns + line_delay_ns) / NS_PER_MS
}

/// Duration of one scan line in microseconds.
///
/// Same arithmetic as [`line_time_ms`]; short lines read better in µs.
pub fn line_time_us(resolution: u32, dwell_ns: f64, line_delay_ns: f64) -> f64 {
    (resolution as f64 * dwell_ns + line_delay_ns) / NS_PER_US_F64
}

/// Duration of a full square frame in milliseconds
pub fn frame_time_ms(resolution: u32, dwell_ns: f64, line_delay_ns: f64) -> f64 {
    resolution as f64 * line_time_ms(resolution, dwell_ns, line_delay_ns)
}

/// Convert a line-delay control value from microseconds to nanoseconds.
///
/// Integer arithmetic keeps the conversion exact. Saturates at `u64::MAX`.
pub fn microseconds_to_nanoseconds(us: u64) -> u64 {
    us.saturating_mul(NS_PER_US)
}

/// Floating-point variant for fractional microsecond inputs.
///
/// Exact for integral inputs up to 2^53 / 1000.
pub fn microseconds_to_nanoseconds_f64(us: f64) -> f64 {
    us * NS_PER_US_F64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_line_time_no_delay() {
        assert_abs_diff_eq!(line_time_ms(256, 100.0, 0.0), 0.0256, epsilon = 1e-15);
    }

    #[test]
    fn test_line_time_with_delay() {
        assert_abs_diff_eq!(line_time_ms(128, 200.0, 1000.0), 0.0266, epsilon = 1e-15);
    }

    #[test]
    fn test_line_time_us_reference_values() {
        assert_abs_diff_eq!(line_time_us(256, 100.0, 0.0), 25.6, epsilon = 1e-12);
        assert_abs_diff_eq!(line_time_us(128, 200.0, 1000.0), 26.6, epsilon = 1e-12);
    }

    #[test]
    fn test_line_time_units_agree() {
        let ms = line_time_ms(300, 37.5, 420.0);
        let us = line_time_us(300, 37.5, 420.0);
        assert_abs_diff_eq!(us, ms * 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_line_time_zero_dwell() {
        assert_eq!(line_time_ms(512, 0.0, 0.0), 0.0);
        assert_abs_diff_eq!(line_time_ms(512, 0.0, 2_000_000.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_time() {
        let line = line_time_ms(128, 200.0, 1000.0);
        assert_abs_diff_eq!(frame_time_ms(128, 200.0, 1000.0), 128.0 * line, epsilon = 1e-12);
    }

    #[test]
    fn test_microseconds_to_nanoseconds() {
        assert_eq!(microseconds_to_nanoseconds(0), 0);
        assert_eq!(microseconds_to_nanoseconds(1), 1000);
        assert_eq!(microseconds_to_nanoseconds(50), 50_000);
        assert_eq!(microseconds_to_nanoseconds(100), 100_000);
        assert_eq!(microseconds_to_nanoseconds(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_microseconds_to_nanoseconds_f64() {
        assert_eq!(microseconds_to_nanoseconds_f64(50.0), 50_000.0);
        assert_eq!(microseconds_to_nanoseconds_f64(2.5), 2500.0);
    }
}
