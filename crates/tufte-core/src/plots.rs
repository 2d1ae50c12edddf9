// File: crates/tufte-core/src/plots.rs
// Summary: Public chart entry points: percentage histogram, line plot, scatter with optional marginals.

use crate::error::DataError;
use crate::figure::{set_tufte_style, Artist, Axes, AxesRole, Figure, Marker, Orientation, Spines};
use crate::frame::{range_frame, RANGE_FRAME_PADDING};
use crate::hist::{normalize_to_percentage, Bins, Histogram};
use crate::layout::GridSpec;
use crate::sample::{ensure_same_length, validate_data, ToSample};
use crate::style::{FigSize, Style};
use crate::theme::Color;
use crate::ticks::Locator;

/// Opacity of marginal histogram bars.
pub const MARGINAL_ALPHA: f32 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramOptions {
    pub bins: Bins,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: String,
    pub figsize: FigSize,
    pub color: Color,
    pub style: Style,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        let style = Style::default();
        Self {
            bins: Bins::default(),
            title: None,
            xlabel: None,
            ylabel: "Percentage".to_string(),
            figsize: style.figure_sizes.default,
            color: style.colors.primary,
            style,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
    /// Legend labels by series; missing or empty entries stay unlabeled.
    pub labels: Vec<String>,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub figsize: FigSize,
    pub markers: bool,
    /// Series colors; a short list is completed from the style palette.
    pub colors: Option<Vec<Color>>,
    pub style: Style,
}

impl Default for LineOptions {
    fn default() -> Self {
        let style = Style::default();
        Self {
            labels: Vec::new(),
            title: None,
            xlabel: None,
            ylabel: None,
            figsize: style.figure_sizes.default,
            markers: false,
            colors: None,
            style,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterOptions {
    pub marginals: bool,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// Defaults to the square size with marginals, the default size without.
    pub figsize: Option<FigSize>,
    pub color: Color,
    pub alpha: f32,
    /// Marker area in points squared.
    pub size: f32,
    pub style: Style,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        let style = Style::default();
        Self {
            marginals: false,
            title: None,
            xlabel: None,
            ylabel: None,
            figsize: None,
            color: style.colors.primary,
            alpha: style.markers.alpha,
            size: style.markers.size,
            style,
        }
    }
}

fn single_axes_figure(size: FigSize, style: &Style) -> Figure {
    Figure::with_single_axes(size, style.clone())
}

fn bars(hist: &Histogram, orientation: Orientation, color: Color) -> Artist {
    Artist::Bars {
        positions: hist.lefts().to_vec(),
        heights: hist.percentages.clone(),
        widths: hist.widths(),
        orientation,
        color,
    }
}

/// Histogram whose bar heights are percentages summing to 100.
///
/// The x axis gets a range frame over the sample; the y axis starts at zero.
pub fn histogram<S: ToSample + ?Sized>(data: &S, opts: &HistogramOptions) -> Result<Figure, DataError> {
    let values = validate_data(data, "data")?;
    let hist = normalize_to_percentage(&values, &opts.bins)?;
    tracing::debug!(n = values.len(), bins = hist.num_bins(), "histogram");

    let mut fig = single_axes_figure(opts.figsize, &opts.style);
    let ax = &mut fig.axes[0];
    ax.add_artist(bars(&hist, Orientation::Vertical, opts.color));

    set_tufte_style(ax, &opts.style);
    ax.set_title(opts.title.as_deref());
    ax.set_xlabel(opts.xlabel.as_deref());
    ax.set_ylabel(Some(&opts.ylabel));

    range_frame(ax, Some(&values), None, RANGE_FRAME_PADDING, RANGE_FRAME_PADDING);
    ax.y.set_lower_limit(0.0, hist.max_percentage());

    Ok(fig)
}

/// Line plot of one or more `y` series against a shared `x`.
pub fn line<X: ToSample + ?Sized>(
    x: &X,
    ys: &[&dyn ToSample],
    opts: &LineOptions,
) -> Result<Figure, DataError> {
    let x_values = validate_data(x, "x")?;
    if ys.is_empty() {
        return Err(DataError::Empty { name: "y".to_string() });
    }

    let multiple = ys.len() > 1;
    let y_arrays = ys
        .iter()
        .enumerate()
        .map(|(i, y)| {
            let name = if multiple { format!("y[{i}]") } else { "y".to_string() };
            let values = validate_data(*y, &name)?;
            ensure_same_length(&x_values, &values, "x", &name)?;
            Ok(values)
        })
        .collect::<Result<Vec<_>, DataError>>()?;
    tracing::debug!(n = x_values.len(), series = y_arrays.len(), "line");

    let style = &opts.style;
    let mut fig = single_axes_figure(opts.figsize, style);
    let ax = &mut fig.axes[0];

    for (i, y) in y_arrays.iter().enumerate() {
        let color = opts
            .colors
            .as_ref()
            .and_then(|c| c.get(i).copied())
            .unwrap_or_else(|| style.series_color(i));
        let label = opts.labels.get(i).filter(|l| !l.is_empty()).cloned();
        let marker = opts.markers.then_some(Marker::HollowCircle {
            size: style.markers.line_marker_size,
            edge_width: style.markers.edge_width,
        });
        ax.add_artist(Artist::Line {
            xs: x_values.clone(),
            ys: y.clone(),
            color,
            width: style.lines.data_width,
            marker,
            label,
        });
    }

    set_tufte_style(ax, style);
    ax.set_title(opts.title.as_deref());
    ax.set_xlabel(opts.xlabel.as_deref());
    ax.set_ylabel(opts.ylabel.as_deref());

    let all_y: Vec<f64> = y_arrays.concat();
    range_frame(ax, Some(&x_values), Some(&all_y), RANGE_FRAME_PADDING, RANGE_FRAME_PADDING);
    ax.legend_from_artists();

    Ok(fig)
}

/// Scatter plot, optionally with percentage histograms along the top and right edges.
///
/// With marginals the figure holds `Main`, `Top` and `Right` axes.
pub fn scatter<X: ToSample + ?Sized, Y: ToSample + ?Sized>(
    x: &X,
    y: &Y,
    opts: &ScatterOptions,
) -> Result<Figure, DataError> {
    let x_values = validate_data(x, "x")?;
    let y_values = validate_data(y, "y")?;
    ensure_same_length(&x_values, &y_values, "x", "y")?;
    tracing::debug!(n = x_values.len(), marginals = opts.marginals, "scatter");

    let figsize = opts.figsize.unwrap_or(if opts.marginals {
        opts.style.figure_sizes.square
    } else {
        opts.style.figure_sizes.default
    });

    if opts.marginals {
        scatter_with_marginals(x_values, y_values, figsize, opts)
    } else {
        Ok(scatter_basic(x_values, y_values, figsize, opts))
    }
}

fn scatter_artist(xs: Vec<f64>, ys: Vec<f64>, opts: &ScatterOptions) -> Artist {
    Artist::Scatter { xs, ys, color: opts.color.with_alpha(opts.alpha), size: opts.size }
}

fn scatter_basic(x: Vec<f64>, y: Vec<f64>, figsize: FigSize, opts: &ScatterOptions) -> Figure {
    let mut fig = single_axes_figure(figsize, &opts.style);
    let ax = &mut fig.axes[0];
    ax.add_artist(scatter_artist(x.clone(), y.clone(), opts));

    set_tufte_style(ax, &opts.style);
    ax.set_title(opts.title.as_deref());
    ax.set_xlabel(opts.xlabel.as_deref());
    ax.set_ylabel(opts.ylabel.as_deref());
    range_frame(ax, Some(&x), Some(&y), RANGE_FRAME_PADDING, RANGE_FRAME_PADDING);
    fig
}

fn scatter_with_marginals(
    x: Vec<f64>,
    y: Vec<f64>,
    figsize: FigSize,
    opts: &ScatterOptions,
) -> Result<Figure, DataError> {
    let style = &opts.style;
    let grid = GridSpec::new(vec![1.0, 4.0, 0.1], vec![4.0, 1.0, 0.1]).with_spacing(0.05, 0.05);
    let cell = |row, col| grid.cell(row, col).unwrap_or_else(|| grid.params.rect());

    let hist_x = normalize_to_percentage(&x, &Bins::default())?;
    let hist_y = normalize_to_percentage(&y, &Bins::default())?;
    let bar_color = opts.color.with_alpha(MARGINAL_ALPHA);

    let mut main = Axes::new(AxesRole::Main, cell(1, 0));
    main.add_artist(scatter_artist(x.clone(), y.clone(), opts));
    set_tufte_style(&mut main, style);
    range_frame(&mut main, Some(&x), Some(&y), RANGE_FRAME_PADDING, RANGE_FRAME_PADDING);
    main.set_xlabel(opts.xlabel.as_deref());
    main.set_ylabel(opts.ylabel.as_deref());

    // Top marginal shares the x axis with main.
    let mut top = Axes::new(AxesRole::Top, cell(0, 0));
    top.add_artist(bars(&hist_x, Orientation::Vertical, bar_color));
    top.spines = Spines::NONE;
    top.x = main.x.clone();
    top.x.show_tick_labels = false;
    top.x.label = None;
    top.y.locator = Locator::Fixed(Vec::new());
    top.y.set_lower_limit(0.0, hist_x.max_percentage());
    top.set_title(opts.title.as_deref());

    // Right marginal shares the y axis with main.
    let mut right = Axes::new(AxesRole::Right, cell(1, 1));
    right.add_artist(bars(&hist_y, Orientation::Horizontal, bar_color));
    right.spines = Spines::NONE;
    right.y = main.y.clone();
    right.y.show_tick_labels = false;
    right.y.label = None;
    right.x.locator = Locator::Fixed(Vec::new());
    right.x.set_lower_limit(0.0, hist_y.max_percentage());

    let mut fig = Figure::new(figsize, style.clone());
    fig.add_axes(main);
    fig.add_axes(top);
    fig.add_axes(right);
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_sets_frame_and_zero_floor() {
        let fig = histogram(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0], &HistogramOptions::default()).unwrap();
        let ax = fig.axes_by_role(AxesRole::Main).unwrap();
        assert_eq!(ax.x.spine_bounds, Some((1.0, 3.0)));
        assert_eq!(ax.y.spine_bounds, None);
        assert_eq!(ax.y.limits.0, 0.0);
        assert_eq!(ax.y.label.as_deref(), Some("Percentage"));
    }

    #[test]
    fn line_colors_fall_back_to_palette() {
        let x = [0.0, 1.0];
        let a = vec![1.0, 2.0];
        let b = vec![2.0, 3.0];
        let opts = LineOptions { colors: Some(vec![Color::rgb(255, 0, 0)]), ..Default::default() };
        let fig = line(&x, &[&a, &b], &opts).unwrap();
        let colors: Vec<Color> = fig.axes[0].artists.iter().map(|a| a.color()).collect();
        assert_eq!(colors, vec![Color::rgb(255, 0, 0), Color::rgb(0x66, 0x66, 0x66)]);
    }

    #[test]
    fn marginal_axes_share_limits() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [10.0, 20.0, 15.0, 30.0];
        let opts = ScatterOptions { marginals: true, ..Default::default() };
        let fig = scatter(&x, &y, &opts).unwrap();
        let main = fig.axes_by_role(AxesRole::Main).unwrap();
        let top = fig.axes_by_role(AxesRole::Top).unwrap();
        let right = fig.axes_by_role(AxesRole::Right).unwrap();
        assert_eq!(top.x.limits, main.x.limits);
        assert_eq!(right.y.limits, main.y.limits);
        assert_eq!(top.y.limits.0, 0.0);
        assert_eq!(right.x.limits.0, 0.0);
        assert!(top.y.ticks().is_empty());
        assert!(!top.x.show_tick_labels);
        assert_eq!(fig.size, (8.0, 8.0));
    }
}
