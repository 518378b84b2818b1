//! Mobile layout rules the visualizer's stylesheet is expected to apply.
//!
//! The stylesheet itself lives with the UI. This table pins the rules the
//! comprehensive suite checks so a layout change shows up as a failing case.

/// A single style declaration applied to a component on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRule {
    pub component: &'static str,
    pub property: &'static str,
    pub value: &'static str,
}

impl LayoutRule {
    /// Declaration text, e.g. `padding: 10px`
    pub fn declaration(&self) -> String {
        format!("{}: {}", self.property, self.value)
    }
}

/// Rules applied under the mobile breakpoint
pub const MOBILE_RULES: [LayoutRule; 3] = [
    LayoutRule {
        component: "slider-row",
        property: "flex-direction",
        value: "row",
    },
    LayoutRule {
        component: "image-label",
        property: "writing-mode",
        value: "vertical-rl",
    },
    LayoutRule {
        component: "main-controls",
        property: "padding",
        value: "10px",
    },
];

/// Mobile declaration for a component, if it has one
pub fn mobile_style(component: &str) -> Option<String> {
    MOBILE_RULES
        .iter()
        .find(|rule| rule.component == component)
        .map(LayoutRule::declaration)
}
