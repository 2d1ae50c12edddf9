// File: crates/tufte-core/src/frame.rs
// Summary: Range frame; padded display limits plus spine bounds at the exact data extent.

use crate::figure::Axes;
use crate::sample::finite_min_max;

/// Default fractional padding of the display limits.
pub const RANGE_FRAME_PADDING: f64 = 0.02;

/// Absolute padding used when the data range collapses to a point.
pub const DEGENERATE_PAD: f64 = 0.5;

/// Display and frame bounds for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeFrame {
    /// Visible axis limits.
    pub display: (f64, f64),
    /// Extent of the drawn spine; always the raw data min/max.
    pub frame: (f64, f64),
}

impl RangeFrame {
    pub fn compute(min: f64, max: f64, pad: f64) -> Self {
        let range = max - min;
        let display = if range > 0.0 {
            // Distribute the pad so a range beyond f64::MAX stays finite.
            let margin = if range.is_finite() { pad * range } else { pad * max - pad * min };
            ((min - margin).max(f64::MIN), (max + margin).min(f64::MAX))
        } else {
            (min - DEGENERATE_PAD, max + DEGENERATE_PAD)
        };
        Self { display, frame: (min, max) }
    }

    /// Bounds over the finite values of `data`; `None` when there are none.
    pub fn from_data(data: &[f64], pad: f64) -> Option<Self> {
        finite_min_max(data).map(|(min, max)| Self::compute(min, max, pad))
    }
}

/// Apply a range frame to either axis of `axes`. `None` leaves that axis alone.
pub fn range_frame(
    axes: &mut Axes,
    x_data: Option<&[f64]>,
    y_data: Option<&[f64]>,
    x_padding: f64,
    y_padding: f64,
) {
    if let Some(x) = x_data {
        match RangeFrame::from_data(x, x_padding) {
            Some(rf) => {
                axes.x.limits = rf.display;
                axes.x.spine_bounds = Some(rf.frame);
            }
            None => tracing::debug!(role = axes.role.name(), "x data has no finite values; range frame skipped"),
        }
    }
    if let Some(y) = y_data {
        match RangeFrame::from_data(y, y_padding) {
            Some(rf) => {
                axes.y.limits = rf.display;
                axes.y.spine_bounds = Some(rf.frame);
            }
            None => tracing::debug!(role = axes.role.name(), "y data has no finite values; range frame skipped"),
        }
    }
}
