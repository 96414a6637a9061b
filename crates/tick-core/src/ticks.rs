// File: crates/tick-core/src/ticks.rs
// Summary: Tick orchestration: generated or custom ticks, validated against the step grid and capped.

use crate::error::TickError;
use crate::grid::generate_sequence_with;
use crate::policy::TickPolicy;
use crate::types::{Domain, Step, TickValue};
use crate::validate::validate_with;

/// Calculate ticks with the default policy.
pub fn calculate_ticks(
    domain: &Domain,
    step: Step,
    tick_interval: Option<f64>,
    custom_ticks: Option<&[TickValue]>,
) -> Result<Vec<TickValue>, TickError> {
    calculate_ticks_with(&TickPolicy::default(), domain, step, tick_interval, custom_ticks)
}

/// Custom ticks are returned in input order and `tick_interval` is ignored;
/// otherwise ticks are generated from `domain.min` at `tick_interval` (or `step`
/// when absent). Every tick must sit on the `step` grid, checked before the
/// `policy.max_ticks` ceiling.
pub fn calculate_ticks_with(
    policy: &TickPolicy,
    domain: &Domain,
    step: Step,
    tick_interval: Option<f64>,
    custom_ticks: Option<&[TickValue]>,
) -> Result<Vec<TickValue>, TickError> {
    if let Some(custom) = custom_ticks {
        let ticks = custom
            .iter()
            .enumerate()
            .map(|(index, tick)| {
                validate_with(policy, tick.value, domain, step)
                    .map(|_| tick.clone())
                    .map_err(|source| TickError::InvalidTick { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        check_count(policy, ticks.len(), tick_interval.unwrap_or(step.get()))?;
        return Ok(ticks);
    }

    let interval = effective_interval(step, tick_interval)?;
    let sequence = generate_sequence_with(domain.min(), domain.max(), interval, policy.inclusive_epsilon)?;
    let count = sequence.len();
    // every candidate is validated, at most max_ticks are kept
    let mut ticks = Vec::with_capacity(count.min(policy.max_ticks));
    for (index, value) in sequence.enumerate() {
        let value = validate_with(policy, value, domain, step).map_err(|source| TickError::InvalidTick { index, source })?;
        if ticks.len() < policy.max_ticks {
            ticks.push(TickValue::new(value));
        }
    }
    check_count(policy, count, interval)?;
    Ok(ticks)
}

/// `tick_interval` when given, else the step. An explicit interval must be positive.
pub fn effective_interval(step: Step, tick_interval: Option<f64>) -> Result<f64, TickError> {
    match tick_interval {
        None => Ok(step.get()),
        Some(interval) if interval.is_finite() && interval > 0.0 => Ok(interval),
        Some(interval) => Err(TickError::InvalidInterval { interval }),
    }
}

fn check_count(policy: &TickPolicy, count: usize, interval: f64) -> Result<(), TickError> {
    if count > policy.max_ticks {
        log::debug!("rejecting {count} ticks at interval {interval} (limit {})", policy.max_ticks);
        return Err(TickError::TooManyTicks { count, interval, limit: policy.max_ticks });
    }
    Ok(())
}
