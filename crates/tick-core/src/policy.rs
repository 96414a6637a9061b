// File: crates/tick-core/src/policy.rs
// Summary: Tunable policy constants for validation, sequence generation, and layout hints.

/// Default ceiling on the number of ticks a track may render.
pub const MAX_TICKS: usize = 20;
/// Padding added to `max` so an exact-multiple endpoint survives rounding.
pub const INCLUSIVE_EPSILON: f64 = 1e-9;
/// Relative tolerance when checking that a value sits on the step grid.
pub const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPolicy {
    pub max_ticks: usize,
    pub inclusive_epsilon: f64,
    /// Scaled by `max(1, |ratio|)` where ratio is `(value - min) / step`.
    pub step_tolerance: f64,
    /// Labels longer than this many characters get an edge margin.
    pub margin_label_threshold: usize,
    pub chars_per_em: f64,
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self {
            max_ticks: MAX_TICKS,
            inclusive_epsilon: INCLUSIVE_EPSILON,
            step_tolerance: STEP_TOLERANCE,
            margin_label_threshold: 2,
            chars_per_em: 5.0,
        }
    }
}

impl TickPolicy {
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }
    pub fn with_inclusive_epsilon(mut self, epsilon: f64) -> Self {
        self.inclusive_epsilon = epsilon.abs();
        self
    }
    pub fn with_step_tolerance(mut self, tolerance: f64) -> Self {
        self.step_tolerance = tolerance.abs();
        self
    }
    pub fn with_margin_label_threshold(mut self, threshold: usize) -> Self {
        self.margin_label_threshold = threshold;
        self
    }
    pub fn with_chars_per_em(mut self, chars_per_em: f64) -> Self {
        self.chars_per_em = chars_per_em;
        self
    }
}
