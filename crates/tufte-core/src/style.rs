// File: crates/tufte-core/src/style.rs
// Summary: Immutable style configuration (fonts, line widths, ticks, spacing); loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::theme::{grayscale_palette, Color, Colors};

/// Width and height in inches.
pub type FigSize = (f64, f64);

/// Everything that controls the look of a chart. Passed explicitly at call time.
///
/// Every field has a Tufte default, so a style file only needs the keys it changes:
///
/// ```toml
/// palette = ["#000000", "#E74C3C"]
///
/// [fonts]
/// title_size = 16.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Series colors for multi-line plots, cycled when exhausted.
    pub palette: Vec<Color>,
    /// Resolution used when saving images.
    pub save_dpi: f32,
    pub colors: Colors,
    pub fonts: Fonts,
    pub lines: LineStyles,
    pub markers: MarkerStyles,
    pub ticks: TickStyles,
    pub spacing: Spacing,
    pub figure_sizes: FigureSizes,
    pub grid: GridConfig,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            palette: grayscale_palette(),
            save_dpi: 300.0,
            colors: Colors::default(),
            fonts: Fonts::default(),
            lines: LineStyles::default(),
            markers: MarkerStyles::default(),
            ticks: TickStyles::default(),
            spacing: Spacing::default(),
            figure_sizes: FigureSizes::default(),
            grid: GridConfig::default(),
        }
    }
}

impl Style {
    pub fn tufte() -> Self {
        Self::default()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let style = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded style");
        Ok(style)
    }

    /// Color for series `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> Color {
        if self.palette.is_empty() {
            return self.colors.primary;
        }
        self.palette[i % self.palette.len()]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    /// Preferred families, first match wins.
    pub families: Vec<String>,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            families: ["Palatino", "Georgia", "Computer Modern", "Times New Roman", "DejaVu Serif", "serif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            title_size: 14.0,
            label_size: 11.0,
            tick_size: 9.0,
            legend_size: 9.0,
        }
    }
}

/// Widths in points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyles {
    pub data_width: f32,
    pub spine_width: f32,
    pub grid_width: f32,
}

impl Default for LineStyles {
    fn default() -> Self {
        Self { data_width: 1.5, spine_width: 0.75, grid_width: 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyles {
    /// Scatter marker area in points squared.
    pub size: f32,
    pub edge_width: f32,
    pub alpha: f32,
    /// Diameter of line-plot markers in points.
    pub line_marker_size: f32,
}

impl Default for MarkerStyles {
    fn default() -> Self {
        Self { size: 30.0, edge_width: 1.0, alpha: 0.6, line_marker_size: 4.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickStyles {
    /// Major tick length in points.
    pub length: f32,
    pub width: f32,
    pub max_ticks: usize,
}

impl Default for TickStyles {
    fn default() -> Self {
        Self { length: 4.0, width: 0.75, max_ticks: 7 }
    }
}

/// Paddings in points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub title_pad: f32,
    pub label_pad: f32,
    pub tick_pad: f32,
    pub legend_pad: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { title_pad: 12.0, label_pad: 8.0, tick_pad: 4.0, legend_pad: 8.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSizes {
    pub default: FigSize,
    pub square: FigSize,
    pub wide: FigSize,
    pub tall: FigSize,
}

impl Default for FigureSizes {
    fn default() -> Self {
        Self { default: (8.0, 5.0), square: (8.0, 8.0), wide: (10.0, 5.0), tall: (6.0, 8.0) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridAxis {
    X,
    Y,
    Both,
}

/// Gridlines are off by default; when on, only horizontal lines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub enabled: bool,
    pub axis: GridAxis,
    pub alpha: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { enabled: false, axis: GridAxis::Y, alpha: 0.5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let style = Style::from_toml_str(
            r##"
            palette = ["#000000", "#E74C3C"]
            save_dpi = 150.0

            [fonts]
            title_size = 16.0

            [grid]
            enabled = true
            axis = "both"
            "##,
        )
        .unwrap();
        assert_eq!(style.palette.len(), 2);
        assert_eq!(style.fonts.title_size, 16.0);
        assert_eq!(style.fonts.tick_size, 9.0);
        assert_eq!(style.grid.axis, GridAxis::Both);
        assert_eq!(style.ticks.max_ticks, 7);
        assert_eq!(style.save_dpi, 150.0);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Style::from_toml_str("[colors]\nprimary = \"nope\"\n").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn serialized_default_reloads() {
        let text = toml::to_string(&Style::default()).unwrap();
        assert_eq!(Style::from_toml_str(&text).unwrap(), Style::default());
    }

    #[test]
    fn series_colors_cycle() {
        let style = Style::default();
        assert_eq!(style.series_color(0), Color::BLACK);
        assert_eq!(style.series_color(4), Color::BLACK);
    }
}
