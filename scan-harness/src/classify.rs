//! Cost classification for scan patterns and view modes.
//!
//! The visualizer names its test patterns and view modes by string. Each
//! name maps to an enum variant with a fixed processing cost; names the
//! tables do not know classify as [`DEFAULT_COST`].

use serde::Serialize;
use std::fmt;

/// Relative processing cost of a pattern or view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Low,
    Medium,
    High,
}

impl Cost {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cost::Low => "low",
            Cost::Medium => "medium",
            Cost::High => "high",
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost reported for names missing from the classification tables
pub const DEFAULT_COST: Cost = Cost::Medium;

/// Test patterns the scan visualizer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternKind {
    /// Zone plate, radial chirp in both axes
    ZonePlate,
    Checker,
    GradientX,
    GradientY,
    /// Two-dimensional ramp
    Ramp2d,
    /// Slanted edge
    Slant,
    /// Linear frequency sweep
    Chirp,
    Text,
    /// Random dot field
    Dots,
}

impl PatternKind {
    pub const ALL: [PatternKind; 9] = [
        PatternKind::ZonePlate,
        PatternKind::Checker,
        PatternKind::GradientX,
        PatternKind::GradientY,
        PatternKind::Ramp2d,
        PatternKind::Slant,
        PatternKind::Chirp,
        PatternKind::Text,
        PatternKind::Dots,
    ];

    /// Name used by the UI pattern selector
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::ZonePlate => "zone",
            PatternKind::Checker => "checker",
            PatternKind::GradientX => "gradx",
            PatternKind::GradientY => "grady",
            PatternKind::Ramp2d => "ramp2d",
            PatternKind::Slant => "slant",
            PatternKind::Chirp => "chirp",
            PatternKind::Text => "text",
            PatternKind::Dots => "dots",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn complexity(&self) -> Cost {
        match self {
            PatternKind::ZonePlate | PatternKind::Chirp => Cost::High,
            PatternKind::Ramp2d | PatternKind::Dots => Cost::Medium,
            PatternKind::Checker
            | PatternKind::GradientX
            | PatternKind::GradientY
            | PatternKind::Slant
            | PatternKind::Text => Cost::Low,
        }
    }
}

/// Image view modes of the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewMode {
    /// Direct rendering of the scanned image
    Normal,
    /// Displacement error heatmap
    Error,
    /// Pixel difference against the ideal image
    Difference,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Normal, ViewMode::Error, ViewMode::Difference];

    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Normal => "normal",
            ViewMode::Error => "error",
            ViewMode::Difference => "difference",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }

    pub fn processing_cost(&self) -> Cost {
        match self {
            ViewMode::Normal => Cost::Low,
            ViewMode::Error => Cost::High,
            ViewMode::Difference => Cost::Medium,
        }
    }
}

/// Complexity of a pattern by UI name, [`DEFAULT_COST`] if unknown
pub fn pattern_complexity(name: &str) -> Cost {
    PatternKind::from_name(name).map_or(DEFAULT_COST, |kind| kind.complexity())
}

/// Processing cost of a view mode by UI name, [`DEFAULT_COST`] if unknown
pub fn view_mode_cost(name: &str) -> Cost {
    ViewMode::from_name(name).map_or(DEFAULT_COST, |mode| mode.processing_cost())
}
