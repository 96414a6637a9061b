// File: crates/tick-core/src/validate.rs
// Summary: Value/step validator: bounds check plus step-grid alignment within a relative tolerance.

use crate::error::ValidationError;
use crate::policy::TickPolicy;
use crate::types::{Domain, Step};

/// Validate `value` against `domain` and `step` using the default policy.
/// Returns the value unchanged on success.
pub fn validate(value: f64, domain: &Domain, step: Step) -> Result<f64, ValidationError> {
    validate_with(&TickPolicy::default(), value, domain, step)
}

pub fn validate_with(
    policy: &TickPolicy,
    value: f64,
    domain: &Domain,
    step: Step,
) -> Result<f64, ValidationError> {
    if value < domain.min() {
        return Err(ValidationError::BelowMinimum { value, min: domain.min() });
    }
    if value > domain.max() {
        return Err(ValidationError::AboveMaximum { value, max: domain.max() });
    }
    if !is_on_step_grid(value - domain.min(), step.get(), policy.step_tolerance) {
        return Err(ValidationError::NotOnStepGrid { value, min: domain.min(), step: step.get() });
    }
    Ok(value)
}

/// True when `offset / step` is within `tolerance * max(1, |ratio|)` of an integer.
/// NaN offsets are never on the grid.
pub fn is_on_step_grid(offset: f64, step: f64, tolerance: f64) -> bool {
    let ratio = offset / step;
    if !ratio.is_finite() {
        return false;
    }
    (ratio - ratio.round()).abs() <= tolerance * ratio.abs().max(1.0)
}
