// File: crates/tick-core/src/grid.rs
// Summary: Inclusive tick sequence generation from min to max at a fixed interval.

use crate::error::TickError;
use crate::policy::INCLUSIVE_EPSILON;

/// Lazy, restartable sequence `min, min + interval, ...` up to and including `max`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    min: f64,
    max: f64,
    interval: f64,
    epsilon: f64,
    index: usize,
    len: usize,
}

impl Iterator for Sequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }
        let mut v = self.min + self.interval * self.index as f64;
        // snap an exact-multiple endpoint that drifted around max
        if (v - self.max).abs() <= self.epsilon || v > self.max {
            v = self.max;
        }
        self.index += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Sequence {}

/// Generate the sequence with the default inclusive epsilon.
pub fn generate_sequence(min: f64, max: f64, interval: f64) -> Result<Sequence, TickError> {
    generate_sequence_with(min, max, interval, INCLUSIVE_EPSILON)
}

/// Count is `ceil((max + epsilon - min) / interval)`, so `max` is only included
/// when it is (within epsilon) an exact multiple of `interval` away from `min`.
pub fn generate_sequence_with(min: f64, max: f64, interval: f64, epsilon: f64) -> Result<Sequence, TickError> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(TickError::InvalidInterval { interval });
    }
    let count = ((max + epsilon - min) / interval).ceil();
    // NaN and negative counts saturate to zero
    let len = if count > 0.0 { count as usize } else { 0 };
    log::trace!("sequence {min}..={max} by {interval}: {len} values");
    Ok(Sequence { min, max, interval, epsilon, index: 0, len })
}
