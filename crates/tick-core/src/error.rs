// File: crates/tick-core/src/error.rs
// Summary: Error taxonomy for value validation and tick calculation.

use thiserror::Error;

/// Why a single value was rejected by the step validator.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("the value of {value} is lower than the min value of {min}")]
    BelowMinimum { value: f64, min: f64 },
    #[error("the value of {value} is higher than the max value of {max}")]
    AboveMaximum { value: f64, max: f64 },
    #[error("the value of {value} is not included in the possible sequence provided by the step of {step} from {min}")]
    NotOnStepGrid { value: f64, min: f64, step: f64 },
}

impl ValidationError {
    /// The value that failed validation.
    pub fn value(&self) -> f64 {
        match *self {
            Self::BelowMinimum { value, .. }
            | Self::AboveMaximum { value, .. }
            | Self::NotOnStepGrid { value, .. } => value,
        }
    }
}

/// Configuration or tick-sequence failure reported to the host.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TickError {
    #[error("invalid domain: min {min} must be finite and not greater than max {max}")]
    InvalidDomain { min: f64, max: f64 },
    #[error("invalid step {step}: must be finite and greater than zero")]
    InvalidStep { step: f64 },
    #[error("invalid tick interval {interval}: must be finite and greater than zero")]
    InvalidInterval { interval: f64 },
    #[error("tick {index} is invalid: {source}")]
    InvalidTick {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("max is not reachable from min: {source}")]
    MaxOffGrid {
        #[source]
        source: ValidationError,
    },
    #[error("the number of ticks to render is too high ({count} > {limit}) at interval {interval}, reduce the interval")]
    TooManyTicks { count: usize, interval: f64, limit: usize },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
