// File: crates/tufte-core/src/lib.rs
// Summary: Library root; exposes the chart entry points, the figure model, and the renderer.

pub mod error;
pub mod figure;
pub mod frame;
pub mod geometry;
pub mod hist;
pub mod layout;
pub mod plots;
pub mod render;
pub mod sample;
pub mod scale;
pub mod style;
pub mod text;
pub mod theme;
pub mod ticks;

pub use error::{ColorError, DataError, StyleError};
pub use figure::{despine, minimal_ticks, set_tufte_style, Artist, Axes, AxesRole, AxisState, Figure, Spines};
pub use frame::{range_frame, RangeFrame, RANGE_FRAME_PADDING};
pub use hist::{normalize_to_percentage, BinStrategy, Bins, Histogram};
pub use plots::{histogram, line, scatter, HistogramOptions, LineOptions, ScatterOptions};
pub use render::RenderOptions;
pub use text::TextShaper;
pub use sample::{validate_data, Column, SampleValue, ToSample};
pub use style::{FigSize, Style};
pub use theme::{grayscale_palette, Color};
