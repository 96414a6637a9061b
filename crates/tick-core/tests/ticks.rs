// File: crates/tick-core/tests/ticks.rs
// Purpose: Tick orchestration over generated and custom sequences.

use tick_core::{calculate_ticks, calculate_ticks_with, validate, Domain, Step, TickError, TickPolicy, TickValue, ValidationError};

fn values(ticks: &[TickValue]) -> Vec<f64> {
    ticks.iter().map(|t| t.value).collect()
}

#[test]
fn generated_ticks_span_domain_at_step() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let ticks = calculate_ticks(&d, Step::new(10.0).unwrap(), None, None).unwrap();
    assert_eq!(ticks.len(), 11);
    assert_eq!(values(&ticks), (0..=10).map(|i| i as f64 * 10.0).collect::<Vec<_>>());
    assert!(ticks.iter().all(|t| t.label.is_none()));
}

#[test]
fn tick_interval_overrides_step_for_spacing() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let ticks = calculate_ticks(&d, Step::new(5.0).unwrap(), Some(25.0), None).unwrap();
    assert_eq!(values(&ticks), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn too_many_ticks_reports_count() {
    let d = Domain::new(0.0, 1.0).unwrap();
    let err = calculate_ticks(&d, Step::new(0.05).unwrap(), None, None).unwrap_err();
    assert_eq!(err, TickError::TooManyTicks { count: 21, interval: 0.05, limit: 20 });
}

#[test]
fn ceiling_is_configurable() {
    let d = Domain::new(0.0, 1.0).unwrap();
    let policy = TickPolicy::default().with_max_ticks(21);
    let ticks = calculate_ticks_with(&policy, &d, Step::new(0.05).unwrap(), None, None).unwrap();
    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks.last().unwrap().value, 1.0);
}

#[test]
fn interval_off_step_grid_is_caught() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let err = calculate_ticks(&d, Step::new(10.0).unwrap(), Some(15.0), None).unwrap_err();
    assert_eq!(
        err,
        TickError::InvalidTick {
            index: 1,
            source: ValidationError::NotOnStepGrid { value: 15.0, min: 0.0, step: 10.0 },
        }
    );
}

#[test]
fn explicit_zero_interval_is_rejected() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let err = calculate_ticks(&d, Step::default(), Some(0.0), None).unwrap_err();
    assert_eq!(err, TickError::InvalidInterval { interval: 0.0 });
}

#[test]
fn custom_ticks_keep_input_order() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let custom = vec![TickValue::new(6.0), TickValue::labeled(2.0, "low")];
    let ticks = calculate_ticks(&d, Step::new(2.0).unwrap(), None, Some(custom.as_slice())).unwrap();
    assert_eq!(ticks, custom);
}

#[test]
fn custom_ticks_off_grid_fail_fast_with_index() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let custom: Vec<TickValue> = vec![4.0.into(), 5.0.into(), 7.0.into()];
    let err = calculate_ticks(&d, Step::new(2.0).unwrap(), None, Some(custom.as_slice())).unwrap_err();
    match err {
        TickError::InvalidTick { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source.value(), 5.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn custom_ticks_outside_domain_fail() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let custom = vec![TickValue::new(12.0)];
    let err = calculate_ticks(&d, Step::default(), None, Some(custom.as_slice())).unwrap_err();
    assert!(matches!(
        err,
        TickError::InvalidTick { index: 0, source: ValidationError::AboveMaximum { .. } }
    ));
}

#[test]
fn too_many_custom_ticks() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let custom: Vec<TickValue> = (0..=25).map(|i| TickValue::new(i as f64)).collect();
    let err = calculate_ticks(&d, Step::default(), None, Some(custom.as_slice())).unwrap_err();
    assert!(matches!(err, TickError::TooManyTicks { count: 26, .. }));
}

#[test]
fn empty_custom_ticks_are_allowed() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let ticks = calculate_ticks(&d, Step::default(), None, Some(&[][..])).unwrap();
    assert!(ticks.is_empty());
}

#[test]
fn identical_inputs_give_identical_output() {
    let d = Domain::new(-3.0, 3.0).unwrap();
    let a = calculate_ticks(&d, Step::new(0.5).unwrap(), Some(1.5), None).unwrap();
    let b = calculate_ticks(&d, Step::new(0.5).unwrap(), Some(1.5), None).unwrap();
    assert_eq!(a, b);
    assert_eq!(values(&a), vec![-3.0, -1.5, 0.0, 1.5, 3.0]);
}

#[test]
fn interval_leaving_max_short() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let ticks = calculate_ticks(&d, Step::default(), Some(3.0), None).unwrap();
    assert_eq!(values(&ticks), vec![0.0, 3.0, 6.0, 9.0]);
}

#[test]
fn custom_ticks_ignore_tick_interval() {
    let d = Domain::new(0.0, 10.0).unwrap();
    let custom = vec![TickValue::new(2.0), TickValue::new(4.0)];
    let ticks = calculate_ticks(&d, Step::new(2.0).unwrap(), Some(0.0), Some(custom.as_slice())).unwrap();
    assert_eq!(values(&ticks), vec![2.0, 4.0]);
}

#[test]
fn off_grid_custom_tick_reported_before_ceiling() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let mut custom: Vec<TickValue> = (0..25).map(|i| TickValue::new(i as f64 * 2.0)).collect();
    custom[0] = TickValue::new(3.0);
    let err = calculate_ticks(&d, Step::new(2.0).unwrap(), None, Some(custom.as_slice())).unwrap_err();
    assert_eq!(
        err,
        TickError::InvalidTick {
            index: 0,
            source: ValidationError::NotOnStepGrid { value: 3.0, min: 0.0, step: 2.0 },
        }
    );
}

#[test]
fn off_grid_generated_tick_reported_before_ceiling() {
    // 34 candidates at interval 3; the second (3.0) is off the step-2 grid
    let d = Domain::new(0.0, 100.0).unwrap();
    let err = calculate_ticks(&d, Step::new(2.0).unwrap(), Some(3.0), None).unwrap_err();
    assert!(matches!(
        err,
        TickError::InvalidTick { index: 1, source: ValidationError::NotOnStepGrid { value, .. } } if value == 3.0
    ));
}

#[test]
fn custom_ceiling_carries_configured_interval() {
    let d = Domain::new(0.0, 100.0).unwrap();
    let custom: Vec<TickValue> = (0..=25).map(|i| TickValue::new(i as f64 * 2.0)).collect();
    let err = calculate_ticks(&d, Step::new(2.0).unwrap(), Some(10.0), Some(custom.as_slice())).unwrap_err();
    assert_eq!(err, TickError::TooManyTicks { count: 26, interval: 10.0, limit: 20 });
}

fn checked_value(value: f64, d: &Domain) -> Result<f64, TickError> {
    let v = validate(value, d, Step::new(5.0)?)?;
    Ok(v)
}

#[test]
fn standalone_validation_converts_into_tick_error() {
    let d = Domain::new(0.0, 20.0).unwrap();
    assert_eq!(checked_value(15.0, &d), Ok(15.0));
    assert_eq!(
        checked_value(25.0, &d),
        Err(TickError::Validation(ValidationError::AboveMaximum { value: 25.0, max: 20.0 }))
    );
    assert_eq!(
        checked_value(25.0, &d).unwrap_err().to_string(),
        "the value of 25 is higher than the max value of 20"
    );
}
