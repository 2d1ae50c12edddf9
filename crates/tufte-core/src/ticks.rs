// File: crates/tufte-core/src/ticks.rs
// Summary: Max-N tick locator (nice steps, optional pruning) and tick label formatting.

/// Which end ticks to drop after locating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Prune {
    #[default]
    None,
    Lower,
    Upper,
    Both,
}

/// How tick positions for an axis are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum Locator {
    /// At most `nbins` intervals on nice steps.
    MaxN { nbins: usize, prune: Prune },
    /// Exactly these positions (filtered to the view).
    Fixed(Vec<f64>),
}

impl Default for Locator {
    fn default() -> Self {
        Locator::MaxN { nbins: 9, prune: Prune::None }
    }
}

impl Locator {
    pub fn ticks(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        match self {
            Locator::MaxN { nbins, prune } => max_n_ticks(vmin, vmax, *nbins, *prune),
            Locator::Fixed(v) => {
                let (lo, hi) = ordered(vmin, vmax);
                v.iter().copied().filter(|t| *t >= lo && *t <= hi).collect()
            }
        }
    }
}

const STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Smallest nice step (1, 2, 2.5, 5 times a power of ten) splitting the
/// interval into at most `nbins` pieces.
pub fn nice_step(vmin: f64, vmax: f64, nbins: usize) -> f64 {
    let span = (vmax - vmin).abs();
    let nbins = nbins.max(1) as f64;
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / nbins;
    let scale = 10f64.powf(raw.log10().floor());
    for s in STEPS {
        let step = s * scale;
        let lo = (vmin.min(vmax) / step).floor();
        let hi = (vmin.max(vmax) / step).ceil();
        if hi - lo <= nbins + 1e-9 {
            return step;
        }
    }
    10.0 * scale
}

/// Tick locations inside `[vmin, vmax]`.
///
/// Candidates are multiples of [`nice_step`] covering the interval; pruning
/// drops the outermost candidates before clipping to the view.
pub fn max_n_ticks(vmin: f64, vmax: f64, nbins: usize, prune: Prune) -> Vec<f64> {
    let (lo, hi) = ordered(vmin, vmax);
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let step = nice_step(lo, hi, nbins);
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    let mut ticks: Vec<f64> = (first..=last).map(|k| k as f64 * step).collect();

    if matches!(prune, Prune::Lower | Prune::Both) && !ticks.is_empty() {
        ticks.remove(0);
    }
    if matches!(prune, Prune::Upper | Prune::Both) {
        ticks.pop();
    }

    // Allow for rounding when a tick sits on a limit.
    let eps = step * 1e-9;
    ticks.retain(|t| *t >= lo - eps && *t <= hi + eps);
    ticks
}

/// Format a tick value with just enough decimals for the step between ticks.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    // 2.5-steps need one more digit than their magnitude suggests.
    let scaled = step * 10f64.powi(decimals as i32);
    let decimals = if step > 0.0 && (scaled - scaled.round()).abs() > 1e-6 {
        decimals + 1
    } else {
        decimals
    };
    let s = format!("{:.*}", decimals, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Spacing between consecutive ticks, or 0 with fewer than two.
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}
