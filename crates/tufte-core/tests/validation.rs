// File: crates/tufte-core/tests/validation.rs
// Purpose: Input validation at the public chart entry points.

use tufte_core::{histogram, line, scatter, validate_data, Column, DataError, HistogramOptions, LineOptions, ScatterOptions};

#[test]
fn empty_input_is_rejected() {
    let empty: Vec<f64> = Vec::new();
    let err = histogram(&empty, &HistogramOptions::default()).unwrap_err();
    assert_eq!(err, DataError::Empty { name: "data".into() });
}

#[test]
fn all_nan_is_rejected() {
    let err = validate_data(&[f64::NAN, f64::NAN], "data").unwrap_err();
    assert!(matches!(err, DataError::AllMissing { .. }));
    assert_eq!(err.to_string(), "data contains only NaN values");
}

#[test]
fn unconvertible_strings_are_rejected() {
    let err = validate_data(&["1.5", "abc"], "x").unwrap_err();
    match err {
        DataError::Conversion { name, reason } => {
            assert_eq!(name, "x");
            assert!(reason.contains("element 1"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn numeric_strings_and_missing_tokens_convert() {
    let values = validate_data(&["1", " 2.5 ", "NaN", ""], "x").unwrap();
    assert_eq!(values[..2], [1.0, 2.5]);
    assert!(values[2].is_nan() && values[3].is_nan());
}

#[test]
fn integer_and_optional_inputs_convert() {
    assert_eq!(validate_data(&[1i32, 2, 3], "x").unwrap(), vec![1.0, 2.0, 3.0]);
    let col = Column::new("height", vec![Some(1.0), None, Some(3.0)]);
    let values = validate_data(&col, "height").unwrap();
    assert!(values[1].is_nan());
}

#[test]
fn mixed_nan_and_infinities_pass_through() {
    let values = validate_data(&[1.0, f64::NAN, f64::INFINITY], "data").unwrap();
    assert_eq!(values.len(), 3);
    assert!(histogram(&values, &HistogramOptions::default()).is_ok());
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = scatter(&[1.0, 2.0], &[1.0], &ScatterOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "x and y must have the same length (2 != 1)");

    let y = vec![1.0, 2.0, 3.0];
    let err = line(&[1.0, 2.0], &[&y], &LineOptions::default()).unwrap_err();
    assert!(matches!(err, DataError::LengthMismatch { .. }));
}

#[test]
fn multiple_series_are_named_by_index() {
    let a = vec![1.0, 2.0];
    let b: Vec<f64> = Vec::new();
    let err = line(&[1.0, 2.0], &[&a, &b], &LineOptions::default()).unwrap_err();
    assert_eq!(err, DataError::Empty { name: "y[1]".into() });
}

#[test]
fn line_without_series_is_rejected() {
    let err = line(&[1.0, 2.0], &[], &LineOptions::default()).unwrap_err();
    assert_eq!(err, DataError::Empty { name: "y".into() });
}
