//! The two validation suites shipped with the visualizer.
//!
//! Every actual value comes from `scan_math` or the classification tables in
//! this crate, so the suites check the same code the UI runs.

use crate::assertion::{AssertionHarness, Suite};
use crate::classify::{PatternKind, ViewMode};
use crate::layout::mobile_style;
use scan_math::{
    bandwidth_to_slider, display_size, line_time_ms, line_time_us, microseconds_to_nanoseconds,
    microseconds_to_nanoseconds_f64, slew_rate_to_slider, slider_to_bandwidth, slider_to_slew_rate, MAX_DISPLAY_PX,
};

/// Slider position with its expected value
struct ScalePoint {
    slider: f64,
    expected: f64,
    tolerance: f64,
    label: &'static str,
}

const fn point(slider: f64, expected: f64, tolerance: f64, label: &'static str) -> ScalePoint {
    ScalePoint {
        slider,
        expected,
        tolerance,
        label,
    }
}

const BANDWIDTH_POINTS: [ScalePoint; 5] = [
    point(0.0, 1.0, 0.1, "Min bandwidth"),
    point(25.0, 5.6, 0.5, "Low bandwidth"),
    point(50.0, 31.6, 1.0, "Mid bandwidth"),
    point(75.0, 177.8, 5.0, "High bandwidth"),
    point(100.0, 1000.0, 1.0, "Max bandwidth"),
];

const SLEW_RATE_POINTS: [ScalePoint; 5] = [
    point(0.0, 0.001, 0.0001, "Min slew rate"),
    point(25.0, 0.0056, 0.0005, "Low slew rate"),
    point(50.0, 0.0316, 0.001, "Mid slew rate"),
    point(75.0, 0.178, 0.01, "High slew rate"),
    point(100.0, 1.0, 0.01, "Max slew rate"),
];

// UI default slider positions
const BANDWIDTH_DEFAULT: ScalePoint = point(43.0, 20.0, 1.0, "Bandwidth Default Value");
const SLEW_RATE_DEFAULT: ScalePoint = point(57.0, 0.05, 0.005, "Slew Rate Default Value");

/// Forward and inverse mapping for one parameter
struct Parameter {
    name: &'static str,
    to_value: fn(f64) -> f64,
    to_slider: fn(f64) -> f64,
    round_trip_tolerance: f64,
}

const BANDWIDTH: Parameter = Parameter {
    name: "Bandwidth",
    to_value: slider_to_bandwidth,
    to_slider: bandwidth_to_slider,
    round_trip_tolerance: 1.0,
};

const SLEW_RATE: Parameter = Parameter {
    name: "Slew Rate",
    to_value: slider_to_slew_rate,
    to_slider: slew_rate_to_slider,
    round_trip_tolerance: 0.01,
};

fn add_default(
    h: &mut AssertionHarness,
    point: &ScalePoint,
    to_value: fn(f64) -> f64,
    unit: &str,
) {
    h.add_test(
        point.label,
        format!("Slider {} should give {} {unit}", point.slider, point.expected),
        point.expected,
        to_value(point.slider),
        point.tolerance,
    );
}

fn add_scaling(
    h: &mut AssertionHarness,
    parameter: &Parameter,
    points: &[ScalePoint],
    unit: &str,
    precision: usize,
) {
    for point in points {
        let actual = (parameter.to_value)(point.slider);
        h.add_test(
            format!("{} Scaling - {}", parameter.name, point.label),
            format!("Slider {} → {actual:.precision$} {unit}", point.slider),
            point.expected,
            actual,
            point.tolerance,
        );
    }
}

fn add_round_trip(h: &mut AssertionHarness, parameter: &Parameter, value: f64) {
    let slider = (parameter.to_slider)(value);
    let back = (parameter.to_value)(slider);
    h.add_test(
        format!("{} Bidirectional Conversion", parameter.name),
        format!("{value} → slider {slider:.1} → {back:.3}"),
        value,
        back,
        parameter.round_trip_tolerance,
    );
}

/// Exponential slider mapping: defaults, scaling, round trips, limits.
pub fn slider_validation() -> Suite {
    Suite::new("Slider Validation")
        .group("bandwidth defaults", |h| {
            add_default(h, &BANDWIDTH_DEFAULT, slider_to_bandwidth, "kHz")
        })
        .group("slew rate defaults", |h| {
            add_default(h, &SLEW_RATE_DEFAULT, slider_to_slew_rate, "FS/μs")
        })
        .group("bandwidth scaling", |h| {
            add_scaling(h, &BANDWIDTH, &BANDWIDTH_POINTS, "kHz", 1)
        })
        .group("slew rate scaling", |h| {
            add_scaling(h, &SLEW_RATE, &SLEW_RATE_POINTS, "FS/μs", 3)
        })
        .group("bidirectional conversion", |h| {
            add_round_trip(h, &BANDWIDTH, 20.0);
            add_round_trip(h, &BANDWIDTH, 100.0);
            add_round_trip(h, &SLEW_RATE, 0.05);
            add_round_trip(h, &SLEW_RATE, 0.1);
        })
        .group("edge cases", |h| {
            h.add_test(
                "Bandwidth Minimum",
                "Slider 0 should give 1 kHz",
                1.0,
                slider_to_bandwidth(0.0),
                0.1,
            );
            h.add_test(
                "Slew Rate Minimum",
                "Slider 0 should give 0.001 FS/μs",
                0.001,
                slider_to_slew_rate(0.0),
                0.0001,
            );
            h.add_test(
                "Bandwidth Maximum",
                "Slider 100 should give 1000 kHz",
                1000.0,
                slider_to_bandwidth(100.0),
                1.0,
            );
            h.add_test(
                "Slew Rate Maximum",
                "Slider 100 should give 1.0 FS/μs",
                1.0,
                slider_to_slew_rate(100.0),
                0.01,
            );
        })
}

/// Scan line timing inputs and the expected line time in µs.
///
/// Line delay is entered in µs, as on the UI control.
struct TimingCase {
    resolution: u32,
    dwell_ns: f64,
    line_delay_us: f64,
    expected_us: f64,
}

const TIMING_CASES: [TimingCase; 2] = [
    TimingCase {
        resolution: 256,
        dwell_ns: 100.0,
        line_delay_us: 0.0,
        expected_us: 25.6,
    },
    TimingCase {
        resolution: 128,
        dwell_ns: 200.0,
        line_delay_us: 1.0,
        expected_us: 26.6,
    },
];

/// Line delay control inputs (µs) and the expected nanosecond values
const UNIT_CASES: [(u64, u64); 4] = [(0, 0), (1, 1000), (50, 50_000), (100, 100_000)];

/// Scan resolutions and their expected on-screen size
const CANVAS_CASES: [(u32, u32); 4] = [(128, 128), (256, 256), (512, 300), (1024, 300)];

/// Components and the mobile declaration each must carry
const LAYOUT_CASES: [(&str, &str); 3] = [
    ("slider-row", "flex-direction: row"),
    ("image-label", "writing-mode: vertical-rl"),
    ("main-controls", "padding: 10px"),
];

const VIEW_MODE_NAMES: [&str; 3] = ["normal", "error", "difference"];

const PATTERN_NAMES: [&str; 9] = [
    "zone", "checker", "gradx", "grady", "ramp2d", "slant", "chirp", "text", "dots",
];

/// View modes, patterns, timing, unit conversion, canvas scaling, layout.
pub fn comprehensive() -> Suite {
    Suite::new("Comprehensive")
        .group("view modes", |h| {
            for name in VIEW_MODE_NAMES {
                h.add_test(
                    format!("View Mode: {name}"),
                    format!("View mode {name} should be available"),
                    true,
                    ViewMode::from_name(name).is_some(),
                    0.0,
                );
            }
        })
        .group("patterns", |h| {
            for name in PATTERN_NAMES {
                h.add_test(
                    format!("Pattern: {name}"),
                    format!("Pattern {name} should be available"),
                    true,
                    PatternKind::from_name(name).is_some(),
                    0.0,
                );
            }
        })
        .group("timing calculations", |h| {
            for case in &TIMING_CASES {
                let delay_ns = microseconds_to_nanoseconds_f64(case.line_delay_us);
                let us = line_time_us(case.resolution, case.dwell_ns, delay_ns);
                let ms = line_time_ms(case.resolution, case.dwell_ns, delay_ns);
                h.add_test(
                    "Timing Calculation",
                    format!(
                        "Dwell {}ns, Delay {delay_ns}ns, Res {} → {us:.1}µs ({ms:.4}ms)",
                        case.dwell_ns, case.resolution
                    ),
                    case.expected_us,
                    us,
                    0.1,
                );
            }
        })
        .group("unit conversions", |h| {
            for (us, expected_ns) in UNIT_CASES {
                let ns = microseconds_to_nanoseconds(us);
                h.add_test(
                    format!("Unit Conversion: {us}μs"),
                    format!("{us}μs → {ns}ns"),
                    expected_ns,
                    ns,
                    0.0,
                );
            }
        })
        .group("canvas scaling", |h| {
            for (resolution, expected) in CANVAS_CASES {
                let size = display_size(resolution, MAX_DISPLAY_PX);
                h.add_test(
                    format!("Canvas Scaling: {resolution}px"),
                    format!("Resolution {resolution} → Display {size}px"),
                    expected,
                    size,
                    0.0,
                );
            }
        })
        .group("mobile layout", |h| {
            for (component, expected) in LAYOUT_CASES {
                h.add_test(
                    format!("Mobile Layout: {component}"),
                    format!("{component} should have mobile styling"),
                    expected,
                    mobile_style(component).unwrap_or_default(),
                    0.0,
                );
            }
        })
}
