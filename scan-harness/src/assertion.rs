//! Tolerance-based assertion harness.
//!
//! A [`Suite`] is an ordered list of named groups. Each group registers test
//! cases on an [`AssertionHarness`] by computing an actual value and handing
//! it over with the expected value. The harness decides how to compare the
//! pair, records the outcome, and keeps going: a failing case is data, not a
//! panic or an error.
//!
//! Rendering lives in [`crate::report`]; nothing in this module prints.
//!
//! # Example
//!
//! ```
//! use scan_harness::assertion::{AssertionHarness, Suite};
//! use scan_math::slider_to_bandwidth;
//!
//! let suite = Suite::new("Bandwidth").group("midpoint", |h| {
//!     h.add_test("Mid bandwidth", "Slider 50", 31.6, slider_to_bandwidth(50.0), 1.0);
//! });
//!
//! let mut harness = AssertionHarness::new(suite);
//! assert!(harness.run());
//! assert_eq!(harness.summary().to_string(), "1/1");
//! ```

use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Observed {
    /// Floating-point quantity, compared within a tolerance
    Number(f64),
    /// Integral quantity such as a pixel count or nanosecond value
    Integer(i64),
    /// Availability flags and other yes/no checks
    Bool(bool),
    /// Labels and style strings
    Text(String),
}

impl Observed {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Observed::Number(v) => Some(*v),
            Observed::Integer(v) => Some(*v as f64),
            Observed::Bool(_) | Observed::Text(_) => None,
        }
    }
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Number(v) => write!(f, "{v}"),
            Observed::Integer(v) => write!(f, "{v}"),
            Observed::Bool(v) => write!(f, "{v}"),
            Observed::Text(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<f64> for Observed {
    fn from(value: f64) -> Self {
        Observed::Number(value)
    }
}

impl From<i64> for Observed {
    fn from(value: i64) -> Self {
        Observed::Integer(value)
    }
}

impl From<u32> for Observed {
    fn from(value: u32) -> Self {
        Observed::Integer(i64::from(value))
    }
}

impl From<u64> for Observed {
    fn from(value: u64) -> Self {
        Observed::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<bool> for Observed {
    fn from(value: bool) -> Self {
        Observed::Bool(value)
    }
}

impl From<&str> for Observed {
    fn from(value: &str) -> Self {
        Observed::Text(value.to_string())
    }
}

impl From<String> for Observed {
    fn from(value: String) -> Self {
        Observed::Text(value)
    }
}

/// How an expected/actual pair is judged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Comparison {
    /// Pass when `|actual - expected| <= tolerance`. NaN never passes.
    NumericWithinTolerance { tolerance: f64 },
    /// Pass when both sides are the same kind and equal.
    ExactEquals,
}

impl Comparison {
    /// Pick the strategy for a pair of values.
    ///
    /// Floating-point pairs (at least one [`Observed::Number`], the other
    /// numeric) are compared within `tolerance`. Integer pairs, booleans and
    /// text are compared exactly and `tolerance` is ignored. Pairs of
    /// different kinds fall back to exact comparison, which fails.
    pub fn select(expected: &Observed, actual: &Observed, tolerance: f64) -> Self {
        match (expected, actual) {
            (Observed::Integer(_), Observed::Integer(_)) => Comparison::ExactEquals,
            (e, a) if e.as_f64().is_some() && a.as_f64().is_some() => {
                Comparison::NumericWithinTolerance { tolerance }
            }
            _ => Comparison::ExactEquals,
        }
    }

    /// Judge a pair of values under this strategy
    pub fn evaluate(&self, expected: &Observed, actual: &Observed) -> bool {
        match self {
            Comparison::NumericWithinTolerance { tolerance } => {
                match (expected.as_f64(), actual.as_f64()) {
                    (Some(e), Some(a)) => (a - e).abs() <= *tolerance,
                    _ => false,
                }
            }
            Comparison::ExactEquals => expected == actual,
        }
    }

    /// Tolerance in effect, if any
    pub fn tolerance(&self) -> Option<f64> {
        match self {
            Comparison::NumericWithinTolerance { tolerance } => Some(*tolerance),
            Comparison::ExactEquals => None,
        }
    }
}

/// A recorded comparison and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    group: String,
    name: String,
    description: String,
    expected: Observed,
    actual: Observed,
    comparison: Comparison,
    passed: bool,
}

impl TestCase {
    /// Evaluate a comparison and freeze the result
    pub fn evaluate(
        group: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        expected: Observed,
        actual: Observed,
        tolerance: f64,
    ) -> Self {
        let comparison = Comparison::select(&expected, &actual, tolerance);
        let passed = comparison.evaluate(&expected, &actual);
        Self {
            group: group.into(),
            name: name.into(),
            description: description.into(),
            expected,
            actual,
            comparison,
            passed,
        }
    }

    /// Group the case was registered under
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Case name as shown in reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description, usually carrying the computed value
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Value the case expected
    pub fn expected(&self) -> &Observed {
        &self.expected
    }

    /// Value the code under test produced
    pub fn actual(&self) -> &Observed {
        &self.actual
    }

    /// Strategy used to judge the pair
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Outcome fixed when the case was recorded
    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Pass count over total count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

impl Summary {
    /// Tally a sequence of cases
    pub fn from_cases(cases: &[TestCase]) -> Self {
        Self {
            passed: cases.iter().filter(|case| case.passed()).count(),
            total: cases.len(),
        }
    }

    /// Number of cases that did not pass
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// True when nothing failed, including the empty `0/0` summary
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.passed, self.total)
    }
}

/// Lifecycle of a single harness instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    Idle,
    Completed,
}

type GroupBody = Box<dyn Fn(&mut AssertionHarness)>;

/// A named group of cases, registered together.
pub struct TestGroup {
    name: String,
    body: GroupBody,
}

impl TestGroup {
    /// Group name, recorded on every case it registers
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestGroup")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of test groups.
#[derive(Debug)]
pub struct Suite {
    name: String,
    groups: Vec<TestGroup>,
}

impl Suite {
    /// Create an empty suite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Append a group; groups run in the order they are added
    pub fn group<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut AssertionHarness) + 'static,
    {
        self.groups.push(TestGroup {
            name: name.into(),
            body: Box::new(body),
        });
        self
    }

    /// Suite name, used as the report title
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Groups in run order
    pub fn groups(&self) -> &[TestGroup] {
        &self.groups
    }
}

/// Runs a [`Suite`] once and keeps every recorded [`TestCase`].
#[derive(Debug)]
pub struct AssertionHarness {
    suite: Suite,
    cases: Vec<TestCase>,
    current_group: String,
    state: HarnessState,
}

impl AssertionHarness {
    /// Create an idle harness over a suite.
    ///
    /// # Arguments
    /// * `suite` - Groups to run on the first call to [`run`](Self::run)
    pub fn new(suite: Suite) -> Self {
        Self {
            suite,
            cases: Vec::new(),
            current_group: String::new(),
            state: HarnessState::Idle,
        }
    }

    /// Name of the suite being run
    pub fn suite_name(&self) -> &str {
        self.suite.name()
    }

    /// Idle until [`run`](Self::run) completes
    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Record one comparison.
    ///
    /// See [`Comparison::select`] for how the strategy is chosen.
    ///
    /// # Arguments
    /// * `name` - Case name shown in reports
    /// * `description` - What was computed, usually with the actual value
    /// * `expected` - Reference value
    /// * `actual` - Value produced by the code under test
    /// * `tolerance` - Allowed absolute difference for floating-point pairs
    pub fn add_test(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        expected: impl Into<Observed>,
        actual: impl Into<Observed>,
        tolerance: f64,
    ) {
        let case = TestCase::evaluate(
            self.current_group.clone(),
            name,
            description,
            expected.into(),
            actual.into(),
            tolerance,
        );

        if case.passed() {
            debug!("PASS {}: {}", case.name(), case.description());
        } else {
            warn!(
                "FAIL {}: expected {}, actual {}, comparison {:?}",
                case.name(),
                case.expected(),
                case.actual(),
                case.comparison()
            );
        }
        self.cases.push(case);
    }

    /// Run every group in order and report whether all cases passed.
    ///
    /// A harness runs once. Later calls return the recorded outcome without
    /// re-evaluating anything.
    ///
    /// # Returns
    /// * `true` - Every recorded case passed
    /// * `false` - At least one case failed
    pub fn run(&mut self) -> bool {
        if self.state == HarnessState::Completed {
            return self.all_passed();
        }

        info!(
            "Running suite '{}' ({} groups)",
            self.suite.name(),
            self.suite.groups().len()
        );

        let groups = std::mem::take(&mut self.suite.groups);
        for group in &groups {
            debug!("Group '{}'", group.name);
            self.current_group = group.name.clone();
            (group.body)(self);
        }
        self.suite.groups = groups;
        self.current_group.clear();
        self.state = HarnessState::Completed;

        let summary = self.summary();
        info!("Suite '{}' finished: {} passed", self.suite.name(), summary);
        summary.all_passed()
    }

    /// Every case recorded so far, in registration order
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Cases that did not pass
    pub fn failures(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter().filter(|case| !case.passed())
    }

    /// Pass tally; `0/0` before anything is recorded
    pub fn summary(&self) -> Summary {
        Summary::from_cases(&self.cases)
    }

    /// True when no recorded case failed.
    ///
    /// # Returns
    /// * `true` - Every case passed, or nothing has been recorded yet
    /// * `false` - At least one case failed
    ///
    /// # Example
    ///
    /// ```
    /// use scan_harness::assertion::{AssertionHarness, Suite};
    ///
    /// let mut harness = AssertionHarness::new(Suite::new("empty"));
    /// assert!(harness.all_passed());
    /// assert!(harness.run());
    /// assert_eq!(harness.summary().to_string(), "0/0");
    /// ```
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(TestCase::passed)
    }

    /// Human-readable report of the recorded cases
    pub fn report(&self) -> String {
        crate::report::render_text(self.suite.name(), &self.cases)
    }
}
