//! scan-math - Parameter mapping and timing math for the scan visualizer
//!
//! This crate is the single source of truth for the numbers the scan
//! visualizer UI and its validation harnesses share:
//!
//! - **Mapping** - Exponential control-position ↔ parameter-value conversion
//! - **Timing** - Scan line and frame durations from dwell time and line delay
//! - **Canvas** - Display sizing of the square scan canvas
//!
//! # Example
//!
//! ```
//! use scan_math::{line_time_ms, BANDWIDTH_KHZ};
//!
//! // Slider at mid travel sits at the geometric mean of the range
//! let bandwidth = BANDWIDTH_KHZ.to_value(50.0);
//! assert!((bandwidth - 1000.0_f64.sqrt()).abs() < 1e-9);
//!
//! // 256 samples at 100 ns each
//! assert!((line_time_ms(256, 100.0, 0.0) - 0.0256).abs() < 1e-15);
//! ```

pub mod canvas;
pub mod mapping;
pub mod timing;

// Re-export commonly used types
pub use canvas::{display_size, MAX_DISPLAY_PX};
pub use mapping::{
    bandwidth_to_slider, slew_rate_to_slider, slider_to_bandwidth, slider_to_slew_rate,
    ParameterRange, RangeError, BANDWIDTH_KHZ, POSITION_MAX, POSITION_MIN, SLEW_RATE_FS_PER_US,
};
pub use timing::{
    frame_time_ms, line_time_ms, line_time_us, microseconds_to_nanoseconds,
    microseconds_to_nanoseconds_f64,
};
