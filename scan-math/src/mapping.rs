//! Exponential mapping between slider positions and parameter values.
//!
//! Instrument parameters such as bandwidth span several decades, so a linear
//! 0–100 slider maps onto them exponentially:
//!
//! ```text
//! value(p)    = min * (max / min)^(p / 100)
//! position(v) = 100 * ln(v / min) / ln(max / min)
//! ```
//!
//! Equal slider steps therefore multiply the value by a constant factor, and
//! the midpoint of the slider lands on the geometric mean of the range.
//!
//! The mapping functions do not clamp or validate. Positions outside
//! `[0, 100]` extrapolate along the same curve, and non-positive values passed
//! to [`ParameterRange::to_position`] produce NaN or negative infinity.
//!
//! # Example
//!
//! ```
//! use scan_math::mapping::{ParameterRange, SLEW_RATE_FS_PER_US};
//!
//! let range = ParameterRange::new(10.0, 1000.0).unwrap();
//! assert_eq!(range.to_value(0.0), 10.0);
//! assert_eq!(range.to_value(100.0), 1000.0);
//! assert!((range.to_value(50.0) - 100.0).abs() < 1e-9);
//!
//! let p = SLEW_RATE_FS_PER_US.to_position(0.05);
//! assert!((SLEW_RATE_FS_PER_US.to_value(p) - 0.05).abs() < 1e-12);
//! ```

use serde::Serialize;
use thiserror::Error;

/// Slider position at the low end of travel
pub const POSITION_MIN: f64 = 0.0;

/// Slider position at the high end of travel
pub const POSITION_MAX: f64 = 100.0;

/// Bandwidth range in kHz (1 kHz – 1 MHz)
pub const BANDWIDTH_KHZ: ParameterRange = ParameterRange {
    min: 1.0,
    max: 1000.0,
};

/// Slew rate range in full-scale fractions per microsecond
pub const SLEW_RATE_FS_PER_US: ParameterRange = ParameterRange {
    min: 0.001,
    max: 1.0,
};

/// Error type for parameter range construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    /// A bound is NaN or infinite
    #[error("Range bounds must be finite, got ({min}, {max})")]
    NonFinite { min: f64, max: f64 },

    /// Lower bound is zero or negative, so the logarithm is undefined
    #[error("Range minimum must be strictly positive, got {min}")]
    NonPositiveMin { min: f64 },

    /// Upper bound does not exceed the lower bound
    #[error("Range maximum {max} must exceed minimum {min}")]
    NotIncreasing { min: f64, max: f64 },
}

/// A strictly positive, increasing value range driven by an exponential slider.
///
/// One `ParameterRange` serves every exponential slider; bandwidth and slew
/// rate differ only in their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    min: f64,
    max: f64,
}

impl ParameterRange {
    /// Create a range, checking that `0 < min < max` and both are finite.
    ///
    /// # Returns
    /// * `Ok(ParameterRange)` - Valid range
    /// * `Err(RangeError)` - Bounds that would make the inverse mapping undefined
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if min <= 0.0 {
            return Err(RangeError::NonPositiveMin { min });
        }
        if max <= min {
            return Err(RangeError::NotIncreasing { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound, reached at slider position 0
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound, reached at slider position 100
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Scaling ratio `max / min` covered by full slider travel
    pub fn ratio(&self) -> f64 {
        self.max / self.min
    }

    /// Convert a slider position to a parameter value.
    ///
    /// The two ends of travel return the stored bounds exactly; every other
    /// position goes through the exponential curve, including positions
    /// outside `[0, 100]`.
    pub fn to_value(&self, position: f64) -> f64 {
        if position == POSITION_MIN {
            return self.min;
        }
        if position == POSITION_MAX {
            return self.max;
        }
        self.min * self.ratio().powf(position / POSITION_MAX)
    }

    /// Convert a parameter value back to a slider position.
    ///
    /// Values at or below zero are outside the domain and yield NaN or
    /// negative infinity.
    pub fn to_position(&self, value: f64) -> f64 {
        POSITION_MAX * (value / self.min).ln() / self.ratio().ln()
    }

    /// True if `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Bandwidth in kHz for a slider position
pub fn slider_to_bandwidth(position: f64) -> f64 {
    BANDWIDTH_KHZ.to_value(position)
}

/// Slider position for a bandwidth in kHz
pub fn bandwidth_to_slider(bandwidth_khz: f64) -> f64 {
    BANDWIDTH_KHZ.to_position(bandwidth_khz)
}

/// Slew rate in FS/µs for a slider position
pub fn slider_to_slew_rate(position: f64) -> f64 {
    SLEW_RATE_FS_PER_US.to_value(position)
}

/// Slider position for a slew rate in FS/µs
pub fn slew_rate_to_slider(slew_rate: f64) -> f64 {
    SLEW_RATE_FS_PER_US.to_position(slew_rate)
}
