use std::fmt;
use std::sync::Arc;

/// Renders an extracted count into a full segment
pub type LabelFn = dyn Fn(u64) -> String + Send + Sync;

/// How a unit's count is turned into a segment
#[derive(Clone)]
pub enum Label {
    /// Suffix appended to the decimal count (e.g. "min" -> "40min")
    Fixed(String),
    /// Function receiving the count and returning the whole segment
    Computed(Arc<LabelFn>),
}

impl Label {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(u64) -> String + Send + Sync + 'static,
    {
        Label::Computed(Arc::new(f))
    }

    /// Render a count with this label
    pub fn render(&self, count: u64) -> String {
        match self {
            Label::Fixed(suffix) => format!("{}{}", count, suffix),
            Label::Computed(f) => f(count),
        }
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Label::Fixed(a), Label::Fixed(b)) => a == b,
            (Label::Computed(a), Label::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Fixed(suffix) => f.debug_tuple("Fixed").field(suffix).finish(),
            Label::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&str> for Label {
    fn from(suffix: &str) -> Self {
        Label::Fixed(suffix.to_string())
    }
}

impl From<String> for Label {
    fn from(suffix: String) -> Self {
        Label::Fixed(suffix)
    }
}

/// A divisor paired with the label used for its count.
///
/// In a relative sequence `base` is the ratio to the next-finer unit; in an
/// absolute sequence it is the ratio to the ground unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub base: u64,
    pub label: Label,
}

impl Unit {
    pub fn new(base: u64, label: impl Into<Label>) -> Self {
        Self {
            base,
            label: label.into(),
        }
    }
}

/// Build a unit from a base and a label, without validation
pub fn make_unit(base: u64, label: impl Into<Label>) -> Unit {
    Unit::new(base, label)
}

/// Convert a float holding a whole, non-negative number that fits in `u64`.
/// 2^64 and above are rejected since `u64::MAX as f64` rounds up to 2^64.
pub fn exact_u64(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}

/// Options accepted by `UnitFormatter::format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Omit every unit whose extracted count is exactly 0
    pub no_zero: bool,
}

impl FormatOptions {
    pub fn no_zero() -> Self {
        Self { no_zero: true }
    }
}

/// Per-unit counts of a value, before labels are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    /// One count per unit, coarsest first
    pub counts: Vec<u64>,
    /// Part of the value below the finest unit
    pub remainder: u64,
}
