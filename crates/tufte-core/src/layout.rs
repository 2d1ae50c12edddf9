// File: crates/tufte-core/src/layout.rs
// Summary: Subplot margins and ratio-based grid layout for multi-axes figures.

use crate::geometry::RectF;

/// Margins of the plotting area, as figure fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self { left: 0.125, right: 0.9, bottom: 0.11, top: 0.88 }
    }
}

impl SubplotParams {
    /// The single-axes rectangle.
    pub fn rect(&self) -> RectF {
        RectF::from_extents(self.left, self.bottom, self.right, self.top)
    }
}

/// A grid of cells with relative row heights and column widths.
///
/// Rows are numbered from the top. `hspace`/`wspace` are gaps expressed as a
/// fraction of the average cell height/width.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub params: SubplotParams,
    pub height_ratios: Vec<f64>,
    pub width_ratios: Vec<f64>,
    pub hspace: f64,
    pub wspace: f64,
}

impl GridSpec {
    pub fn new(height_ratios: Vec<f64>, width_ratios: Vec<f64>) -> Self {
        Self {
            params: SubplotParams::default(),
            height_ratios,
            width_ratios,
            hspace: 0.2,
            wspace: 0.2,
        }
    }

    pub fn with_spacing(mut self, hspace: f64, wspace: f64) -> Self {
        self.hspace = hspace;
        self.wspace = wspace;
        self
    }

    pub fn nrows(&self) -> usize { self.height_ratios.len() }
    pub fn ncols(&self) -> usize { self.width_ratios.len() }

    /// Figure-fraction rectangle of cell (`row`, `col`), or `None` if out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<RectF> {
        if row >= self.nrows() || col >= self.ncols() {
            return None;
        }
        let p = &self.params;
        let (tops, bottoms) = spans(&self.height_ratios, p.top - p.bottom, self.hspace);
        let (lefts, rights) = spans(&self.width_ratios, p.right - p.left, self.wspace);
        Some(RectF::from_extents(
            p.left + lefts[col],
            p.top - bottoms[row],
            p.left + rights[col],
            p.top - tops[row],
        ))
    }
}

/// Start/end offsets of each cell along one direction of length `total`.
fn spans(ratios: &[f64], total: f64, space: f64) -> (Vec<f64>, Vec<f64>) {
    let n = ratios.len() as f64;
    let cell = total / (n + space * (n - 1.0));
    let sep = space * cell;
    let sum: f64 = ratios.iter().sum();
    let norm = if sum > 0.0 { cell * n / sum } else { 0.0 };

    let mut starts = Vec::with_capacity(ratios.len());
    let mut ends = Vec::with_capacity(ratios.len());
    let mut pos = 0.0;
    for (i, r) in ratios.iter().enumerate() {
        if i > 0 {
            pos += sep;
        }
        starts.push(pos);
        pos += r * norm;
        ends.push(pos);
    }
    (starts, ends)
}
