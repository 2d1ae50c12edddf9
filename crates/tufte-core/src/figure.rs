// File: crates/tufte-core/src/figure.rs
// Summary: Backend-independent figure model (axes, spines, ticks, artists) and the despine/tick helpers.

use crate::geometry::RectF;
use crate::layout::SubplotParams;
use crate::style::{FigSize, Style};
use crate::theme::Color;
use crate::ticks::{Locator, Prune};

/// Fraction added above the tallest bar when a limit is autoscaled from zero.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Named sub-regions of a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxesRole {
    Main,
    /// Marginal histogram above the main axes (shares x).
    Top,
    /// Marginal histogram right of the main axes (shares y).
    Right,
}

impl AxesRole {
    pub fn name(&self) -> &'static str {
        match self {
            AxesRole::Main => "main",
            AxesRole::Top => "top",
            AxesRole::Right => "right",
        }
    }
}

/// State of one axis: limits, drawn spine extent, and tick configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisState {
    /// Visible data interval.
    pub limits: (f64, f64),
    /// Extent of the spine along this axis; `None` spans the full limits.
    pub spine_bounds: Option<(f64, f64)>,
    pub locator: Locator,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
    /// Major tick length and width in points.
    pub tick_length: f32,
    pub tick_width: f32,
    /// Minor ticks are never drawn when this is zero.
    pub minor_tick_length: f32,
    pub label: Option<String>,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            limits: (0.0, 1.0),
            spine_bounds: None,
            locator: Locator::default(),
            show_ticks: true,
            show_tick_labels: true,
            tick_length: 3.5,
            tick_width: 0.8,
            minor_tick_length: 2.0,
            label: None,
        }
    }
}

impl AxisState {
    /// Tick positions inside the current limits.
    pub fn ticks(&self) -> Vec<f64> {
        if !self.show_ticks {
            return Vec::new();
        }
        self.locator.ticks(self.limits.0, self.limits.1)
    }

    /// Pin the lower limit and autoscale the upper one to `data_max` plus a margin.
    pub fn set_lower_limit(&mut self, lower: f64, data_max: f64) {
        let span = data_max - lower;
        let upper = if span > 0.0 { data_max + span * AUTOSCALE_MARGIN } else { lower + 1.0 };
        self.limits = (lower, upper);
    }
}

/// Spine visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spines {
    pub top: bool,
    pub right: bool,
    pub left: bool,
    pub bottom: bool,
}

impl Default for Spines {
    fn default() -> Self {
        Self { top: true, right: true, left: true, bottom: true }
    }
}

impl Spines {
    pub const NONE: Spines = Spines { top: false, right: false, left: false, bottom: false };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Bars rise from y = 0; positions are on x.
    Vertical,
    /// Bars extend from x = 0; positions are on y.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    /// Unfilled circle; diameter and edge width in points.
    HollowCircle { size: f32, edge_width: f32 },
}

/// Something drawn inside an axes.
#[derive(Clone, Debug, PartialEq)]
pub enum Artist {
    /// Edge-aligned bars: bar `i` spans `[positions[i], positions[i] + widths[i]]`.
    Bars {
        positions: Vec<f64>,
        heights: Vec<f64>,
        widths: Vec<f64>,
        orientation: Orientation,
        color: Color,
    },
    Line {
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Color,
        /// Stroke width in points.
        width: f32,
        marker: Option<Marker>,
        label: Option<String>,
    },
    /// Filled, edgeless circles; `size` is the marker area in points squared.
    Scatter {
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Color,
        size: f32,
    },
}

impl Artist {
    pub fn label(&self) -> Option<&str> {
        match self {
            Artist::Line { label, .. } => label.as_deref(),
            _ => None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Artist::Bars { color, .. } | Artist::Line { color, .. } | Artist::Scatter { color, .. } => *color,
        }
    }
}

/// Frameless legend entry list.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<(String, Color)>,
}

/// One plotting region of a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub role: AxesRole,
    /// Position within the figure, in figure fractions.
    pub rect: RectF,
    pub x: AxisState,
    pub y: AxisState,
    pub spines: Spines,
    pub spine_color: Color,
    /// Spine width in points.
    pub spine_width: f32,
    pub title: Option<String>,
    pub artists: Vec<Artist>,
    pub legend: Option<Legend>,
}

impl Axes {
    pub fn new(role: AxesRole, rect: RectF) -> Self {
        Self {
            role,
            rect,
            x: AxisState::default(),
            y: AxisState::default(),
            spines: Spines::default(),
            spine_color: Color::BLACK,
            spine_width: 0.8,
            title: None,
            artists: Vec::new(),
            legend: None,
        }
    }

    pub fn add_artist(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    pub fn set_xlabel(&mut self, label: Option<&str>) {
        self.x.label = label.map(str::to_string);
    }

    pub fn set_ylabel(&mut self, label: Option<&str>) {
        self.y.label = label.map(str::to_string);
    }

    /// Build a legend from labeled artists; `None` when nothing is labeled.
    pub fn legend_from_artists(&mut self) {
        let entries: Vec<(String, Color)> = self
            .artists
            .iter()
            .filter_map(|a| a.label().map(|l| (l.to_string(), a.color())))
            .collect();
        self.legend = if entries.is_empty() { None } else { Some(Legend { entries }) };
    }
}

/// A complete chart: size, style, and its axes. Owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Width and height in inches.
    pub size: FigSize,
    pub background: Color,
    pub axes: Vec<Axes>,
    pub style: Style,
}

impl Figure {
    pub fn new(size: FigSize, style: Style) -> Self {
        Self { size, background: style.colors.background, axes: Vec::new(), style }
    }

    /// A figure with one `Main` axes in the default subplot position.
    pub fn with_single_axes(size: FigSize, style: Style) -> Self {
        let mut fig = Self::new(size, style);
        fig.add_axes(Axes::new(AxesRole::Main, SubplotParams::default().rect()));
        fig
    }

    pub fn add_axes(&mut self, axes: Axes) -> &mut Axes {
        self.axes.push(axes);
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    pub fn axes_by_role(&self, role: AxesRole) -> Option<&Axes> {
        self.axes.iter().find(|a| a.role == role)
    }

    pub fn axes_by_role_mut(&mut self, role: AxesRole) -> Option<&mut Axes> {
        self.axes.iter_mut().find(|a| a.role == role)
    }

    pub fn roles(&self) -> Vec<AxesRole> {
        self.axes.iter().map(|a| a.role).collect()
    }

    /// Canvas size in pixels at `dpi` (at least 1x1).
    pub fn pixel_size(&self, dpi: f32) -> (u32, u32) {
        let w = (self.size.0 as f32 * dpi).round().max(1.0) as u32;
        let h = (self.size.1 as f32 * dpi).round().max(1.0) as u32;
        (w, h)
    }
}

/// Hide the selected spines.
pub fn despine(axes: &mut Axes, top: bool, right: bool, left: bool, bottom: bool) {
    if top {
        axes.spines.top = false;
    }
    if right {
        axes.spines.right = false;
    }
    if left {
        axes.spines.left = false;
    }
    if bottom {
        axes.spines.bottom = false;
    }
}

/// Limit both axes to at most `max_ticks` intervals, dropping the outermost candidates.
pub fn minimal_ticks(axes: &mut Axes, max_ticks: usize) {
    let locator = Locator::MaxN { nbins: max_ticks, prune: Prune::Both };
    axes.x.locator = locator.clone();
    axes.y.locator = locator;
}

/// Core Tufte styling: no top/right spines, few ticks, thin gray axes, no minor ticks.
pub fn set_tufte_style(axes: &mut Axes, style: &Style) {
    despine(axes, true, true, false, false);
    minimal_ticks(axes, style.ticks.max_ticks);
    for axis in [&mut axes.x, &mut axes.y] {
        axis.tick_length = style.ticks.length;
        axis.tick_width = style.ticks.width;
        axis.minor_tick_length = 0.0;
    }
    axes.spine_color = style.colors.spine;
    axes.spine_width = style.lines.spine_width;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tufte_style_despines_and_thins_ticks() {
        let style = Style::default();
        let mut axes = Axes::new(AxesRole::Main, RectF::UNIT);
        set_tufte_style(&mut axes, &style);
        assert_eq!(axes.spines, Spines { top: false, right: false, left: true, bottom: true });
        assert_eq!(axes.x.locator, Locator::MaxN { nbins: 7, prune: Prune::Both });
        assert_eq!(axes.y.minor_tick_length, 0.0);
        assert_eq!(axes.x.tick_length, 4.0);
        assert_eq!(axes.spine_color, style.colors.spine);
    }

    #[test]
    fn despine_only_touches_selected() {
        let mut axes = Axes::new(AxesRole::Main, RectF::UNIT);
        despine(&mut axes, false, false, true, false);
        assert!(axes.spines.top && axes.spines.right && axes.spines.bottom);
        assert!(!axes.spines.left);
    }

    #[test]
    fn lower_limit_autoscale() {
        let mut axis = AxisState::default();
        axis.set_lower_limit(0.0, 40.0);
        assert_eq!(axis.limits, (0.0, 42.0));
        axis.set_lower_limit(0.0, 0.0);
        assert_eq!(axis.limits, (0.0, 1.0));
    }

    #[test]
    fn legend_only_when_labeled() {
        let mut axes = Axes::new(AxesRole::Main, RectF::UNIT);
        axes.add_artist(Artist::Scatter { xs: vec![], ys: vec![], color: Color::BLACK, size: 1.0 });
        axes.legend_from_artists();
        assert!(axes.legend.is_none());

        axes.add_artist(Artist::Line {
            xs: vec![0.0],
            ys: vec![0.0],
            color: Color::WHITE,
            width: 1.0,
            marker: None,
            label: Some("a".into()),
        });
        axes.legend_from_artists();
        assert_eq!(axes.legend.unwrap().entries, vec![("a".to_string(), Color::WHITE)]);
    }

    #[test]
    fn axes_looked_up_by_role() {
        let mut fig = Figure::with_single_axes((8.0, 8.0), Style::default());
        fig.add_axes(Axes::new(AxesRole::Top, RectF::UNIT));
        assert!(fig.axes_by_role_mut(AxesRole::Right).is_none());

        let top = fig.axes_by_role_mut(AxesRole::Top).unwrap();
        top.set_title(Some("marginal"));
        assert_eq!(fig.axes[1].title.as_deref(), Some("marginal"));
        assert_eq!(fig.axes[0].title, None);

        let names: Vec<&str> = fig.roles().iter().map(AxesRole::name).collect();
        assert_eq!(names, vec!["main", "top"]);
    }

    #[test]
    fn pixel_size_from_inches() {
        let fig = Figure::new((8.0, 5.0), Style::default());
        assert_eq!(fig.pixel_size(100.0), (800, 500));
    }
}
