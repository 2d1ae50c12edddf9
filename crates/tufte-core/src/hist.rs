// File: crates/tufte-core/src/hist.rs
// Summary: Histogram binning and normalization of counts to percentages.

use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Named bin-width estimators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BinStrategy {
    /// Smaller of `Fd` and `Sturges`; falls back to `Sturges` when the IQR is zero.
    #[default]
    Auto,
    /// Freedman-Diaconis: `2 * IQR * n^(-1/3)`.
    Fd,
    Sturges,
    Sqrt,
    Rice,
    Scott,
    Doane,
}

impl BinStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            BinStrategy::Auto => "auto",
            BinStrategy::Fd => "fd",
            BinStrategy::Sturges => "sturges",
            BinStrategy::Sqrt => "sqrt",
            BinStrategy::Rice => "rice",
            BinStrategy::Scott => "scott",
            BinStrategy::Doane => "doane",
        }
    }

    /// Estimated bin width for finite, sorted values. Zero means "use one bin".
    fn width(&self, sorted: &[f64]) -> f64 {
        let n = sorted.len() as f64;
        if sorted.is_empty() {
            return 0.0;
        }
        let ptp = sorted[sorted.len() - 1] - sorted[0];
        match self {
            BinStrategy::Sqrt => ptp / n.sqrt(),
            BinStrategy::Sturges => ptp / (n.log2() + 1.0),
            BinStrategy::Rice => ptp / (2.0 * n.cbrt()),
            BinStrategy::Scott => (24.0 * std::f64::consts::PI.sqrt() / n).cbrt() * std_dev(sorted),
            BinStrategy::Fd => {
                let iqr = percentile(sorted, 75.0) - percentile(sorted, 25.0);
                2.0 * iqr * n.powf(-1.0 / 3.0)
            }
            BinStrategy::Doane => {
                if sorted.len() <= 2 {
                    return 0.0;
                }
                let sg1 = (6.0 * (n - 2.0) / ((n + 1.0) * (n + 3.0))).sqrt();
                let sigma = std_dev(sorted);
                if sigma <= 0.0 {
                    return 0.0;
                }
                let mean = sorted.iter().sum::<f64>() / n;
                let g1 = sorted.iter().map(|x| ((x - mean) / sigma).powi(3)).sum::<f64>() / n;
                ptp / (1.0 + n.log2() + (1.0 + g1.abs() / sg1).log2())
            }
            BinStrategy::Auto => {
                let fd = BinStrategy::Fd.width(sorted);
                let sturges = BinStrategy::Sturges.width(sorted);
                if fd > 0.0 {
                    fd.min(sturges)
                } else {
                    sturges
                }
            }
        }
    }
}

impl FromStr for BinStrategy {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BinStrategy::Auto),
            "fd" => Ok(BinStrategy::Fd),
            "sturges" => Ok(BinStrategy::Sturges),
            "sqrt" => Ok(BinStrategy::Sqrt),
            "rice" => Ok(BinStrategy::Rice),
            "scott" => Ok(BinStrategy::Scott),
            "doane" => Ok(BinStrategy::Doane),
            other => Err(DataError::InvalidBins(format!("unknown binning strategy {other:?}"))),
        }
    }
}

/// How to partition a sample into bins.
#[derive(Clone, Debug, PartialEq)]
pub enum Bins {
    Count(usize),
    Strategy(BinStrategy),
    Edges(Vec<f64>),
}

impl Default for Bins {
    fn default() -> Self {
        Bins::Strategy(BinStrategy::Auto)
    }
}

impl From<usize> for Bins {
    fn from(n: usize) -> Self {
        Bins::Count(n)
    }
}

impl From<BinStrategy> for Bins {
    fn from(s: BinStrategy) -> Self {
        Bins::Strategy(s)
    }
}

impl From<Vec<f64>> for Bins {
    fn from(edges: Vec<f64>) -> Self {
        Bins::Edges(edges)
    }
}

impl fmt::Display for Bins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bins::Count(n) => write!(f, "{n}"),
            Bins::Strategy(s) => f.write_str(s.name()),
            Bins::Edges(e) => {
                let parts: Vec<String> = e.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

/// Parses `"auto"`, `"20"` or a comma-separated edge list such as `"0,0.5,1"`.
impl FromStr for Bins {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            let edges = s
                .split(',')
                .map(|p| {
                    p.trim()
                        .parse::<f64>()
                        .map_err(|_| DataError::InvalidBins(format!("bad edge {:?}", p.trim())))
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Bins::Edges(edges));
        }
        if let Ok(n) = s.parse::<usize>() {
            return Ok(Bins::Count(n));
        }
        s.parse::<BinStrategy>().map(Bins::Strategy)
    }
}

/// Upper bound on the bin count a width estimator may ask for. A tiny IQR
/// next to a far outlier would otherwise request astronomically many bins.
pub const MAX_STRATEGY_BINS: usize = 10_000;

/// Bar heights in percent together with the bin edges they belong to.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub percentages: Vec<f64>,
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn num_bins(&self) -> usize {
        self.percentages.len()
    }

    /// Width of the first bin.
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Width of every bin, `edges[i + 1] - edges[i]`.
    pub fn widths(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn lefts(&self) -> &[f64] {
        &self.edges[..self.edges.len() - 1]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_percentage(&self) -> f64 {
        self.percentages.iter().copied().fold(0.0, f64::max)
    }
}

/// Bin a sample and rescale the counts so they sum to 100.
///
/// NaN and infinite values are not counted. When nothing is counted every
/// percentage is zero.
pub fn normalize_to_percentage(data: &[f64], bins: &Bins) -> Result<Histogram, DataError> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let edges = bin_edges(&sorted, bins)?;
    let counts = count_sorted(&sorted, &edges);
    let total: u64 = counts.iter().sum();

    let percentages = if total > 0 {
        counts.iter().map(|&c| c as f64 / total as f64 * 100.0).collect()
    } else {
        vec![0.0; counts.len()]
    };

    Ok(Histogram { percentages, edges, counts })
}

/// Compute bin edges for finite, ascending values.
pub fn bin_edges(sorted: &[f64], bins: &Bins) -> Result<Vec<f64>, DataError> {
    let (first, last) = outer_edges(sorted);
    match bins {
        Bins::Count(0) => Err(DataError::InvalidBins("bin count must be positive".into())),
        Bins::Count(n) => Ok(linspace(first, last, *n)),
        Bins::Strategy(strategy) => {
            let width = strategy.width(sorted);
            let n = if width > 0.0 && width.is_finite() {
                let wanted = ((last - first) / width).ceil();
                if wanted > MAX_STRATEGY_BINS as f64 {
                    tracing::debug!(strategy = strategy.name(), wanted, max = MAX_STRATEGY_BINS, "bin count capped");
                    MAX_STRATEGY_BINS
                } else {
                    wanted.max(1.0) as usize
                }
            } else {
                1
            };
            Ok(linspace(first, last, n))
        }
        Bins::Edges(edges) => {
            if edges.len() < 2 {
                return Err(DataError::InvalidBins("need at least two bin edges".into()));
            }
            if edges.iter().any(|e| !e.is_finite()) {
                return Err(DataError::InvalidBins("bin edges must be finite".into()));
            }
            if edges.windows(2).any(|w| w[1] < w[0]) {
                return Err(DataError::InvalidBins(
                    "bin edges must increase monotonically".into(),
                ));
            }
            Ok(edges.clone())
        }
    }
}

fn outer_edges(sorted: &[f64]) -> (f64, f64) {
    match (sorted.first(), sorted.last()) {
        (Some(&lo), Some(&hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 1.0),
    }
}

/// `bins + 1` evenly spaced edges from `start` to `stop`, ending exactly on `stop`.
fn linspace(start: f64, stop: f64, bins: usize) -> Vec<f64> {
    let n = bins as f64;
    let step = (stop - start) / n;
    let mut edges: Vec<f64> = if step.is_finite() {
        (0..=bins).map(|i| start + step * i as f64).collect()
    } else {
        // The span overflows f64; interpolate between the endpoints instead.
        (0..=bins)
            .map(|i| {
                let t = i as f64 / n;
                start * (1.0 - t) + stop * t
            })
            .collect()
    };
    edges[bins] = stop;
    edges
}

/// Bins are `[a, b)` except the last one, which also holds its right edge.
fn count_sorted(sorted: &[f64], edges: &[f64]) -> Vec<u64> {
    let last = edges.len() - 1;
    let cumulative: Vec<usize> = edges
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            if i == last {
                sorted.partition_point(|&v| v <= e)
            } else {
                sorted.partition_point(|&v| v < e)
            }
        })
        .collect();
    cumulative.windows(2).map(|w| w[1].saturating_sub(w[0]) as u64).collect()
}

/// Linear-interpolated percentile of ascending values.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;
    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}

/// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt()
}
