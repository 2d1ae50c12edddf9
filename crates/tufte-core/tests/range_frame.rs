// File: crates/tufte-core/tests/range_frame.rs
// Purpose: Range frame bounds applied through the figure model.

use tufte_core::geometry::RectF;
use tufte_core::{range_frame, Axes, AxesRole, RangeFrame, RANGE_FRAME_PADDING};

#[test]
fn constant_data_pads_by_half_unit() {
    let data = [5.0; 100];
    let rf = RangeFrame::from_data(&data, RANGE_FRAME_PADDING).unwrap();
    assert_eq!(rf.frame, (5.0, 5.0));
    assert_eq!(rf.display, (4.5, 5.5));
}

#[test]
fn frame_ignores_non_finite_values() {
    let rf = RangeFrame::from_data(&[f64::NEG_INFINITY, 2.0, f64::NAN, 8.0], 0.1).unwrap();
    assert_eq!(rf.frame, (2.0, 8.0));
    assert!((rf.display.0 - 1.4).abs() < 1e-12);
    assert!((rf.display.1 - 8.6).abs() < 1e-12);
}

#[test]
fn range_frame_sets_limits_and_spines_per_axis() {
    let mut axes = Axes::new(AxesRole::Main, RectF::UNIT);
    let x = [0.0, 50.0, 100.0];
    range_frame(&mut axes, Some(&x), None, RANGE_FRAME_PADDING, RANGE_FRAME_PADDING);
    assert_eq!(axes.x.spine_bounds, Some((0.0, 100.0)));
    assert!((axes.x.limits.0 + 2.0).abs() < 1e-12);
    assert!((axes.x.limits.1 - 102.0).abs() < 1e-12);
    // Untouched axis keeps its defaults.
    assert_eq!(axes.y.spine_bounds, None);
    assert_eq!(axes.y.limits, (0.0, 1.0));
}

#[test]
fn all_nonfinite_axis_is_left_alone() {
    let mut axes = Axes::new(AxesRole::Main, RectF::UNIT);
    range_frame(&mut axes, Some(&[f64::INFINITY]), Some(&[1.0, 3.0]), 0.0, 0.0);
    assert_eq!(axes.x.spine_bounds, None);
    assert_eq!(axes.y.spine_bounds, Some((1.0, 3.0)));
    assert_eq!(axes.y.limits, (1.0, 3.0));
}
