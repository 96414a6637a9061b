// File: crates/tick-core/src/types.rs
// Summary: Shared value types (domain, step, tick) and their construction rules.

use crate::error::TickError;

/// Inclusive numeric range a track operates over.
/// Contract: both bounds are finite and `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Result<Self, TickError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(TickError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }
    pub const fn min(&self) -> f64 { self.min }
    pub const fn max(&self) -> f64 { self.max }
}

/// Alignment grid for values, measured from `Domain::min`.
/// Contract: finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step(f64);

impl Step {
    pub fn new(step: f64) -> Result<Self, TickError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TickError::InvalidStep { step });
        }
        Ok(Self(step))
    }
    pub const fn get(&self) -> f64 { self.0 }
}

impl Default for Step {
    fn default() -> Self {
        Self(1.0)
    }
}

/// A tick position, either supplied by the host or generated from an interval.
#[derive(Clone, Debug, PartialEq)]
pub struct TickValue {
    pub value: f64,
    pub label: Option<String>,
}

impl TickValue {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: Some(label.into()) }
    }
}

impl From<f64> for TickValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
