// File: crates/tufte-examples/src/bin/gallery.rs
// Summary: Renders the example gallery (histograms, lines, scatters, marginals) to target/out/gallery.

use std::f64::consts::PI;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;
use tufte_core::{
    histogram, line, scatter, Figure, HistogramOptions, LineOptions, RenderOptions, ScatterOptions, Style,
};

const OUT_DIR: &str = "target/out/gallery";
const DPI: f32 = 150.0;

fn normal(rng: &mut StdRng, mean: f64, sd: f64, n: usize) -> Result<Vec<f64>> {
    let dist = Normal::new(mean, sd).context("normal distribution")?;
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `slope * x` plus standard normal noise.
fn correlated(rng: &mut StdRng, x: &[f64], slope: f64) -> Result<Vec<f64>> {
    let noise = normal(rng, 0.0, 1.0, x.len())?;
    Ok(x.iter().zip(noise).map(|(x, e)| slope * x + e).collect())
}

fn save(fig: &Figure, name: &str) -> Result<()> {
    let path = PathBuf::from(OUT_DIR).join(name);
    fig.render_to_png(&RenderOptions { dpi: DPI, draw_labels: true }, &path)
        .with_context(|| format!("render {name}"))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn title(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let style = Style::tufte();
    let mut rng = StdRng::seed_from_u64(42);

    // 1) Normal histogram
    let data = normal(&mut rng, 0.0, 1.0, 1000)?;
    let opts = HistogramOptions {
        title: title("Normal Distribution"),
        xlabel: title("Value"),
        style: style.clone(),
        ..Default::default()
    };
    save(&histogram(&data, &opts)?, "01_histogram_normal.png")?;

    // 2) Bimodal histogram
    let mut data = normal(&mut rng, -2.0, 0.5, 500)?;
    data.extend(normal(&mut rng, 2.0, 0.5, 500)?);
    let opts = HistogramOptions { title: title("Bimodal Distribution"), ..opts };
    save(&histogram(&data, &opts)?, "02_histogram_bimodal.png")?;

    // 3) Sine wave
    let x = linspace(0.0, 2.0 * PI, 100);
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let opts = LineOptions {
        title: title("Sine Wave"),
        xlabel: title("x"),
        ylabel: title("sin(x)"),
        style: style.clone(),
        ..Default::default()
    };
    save(&line(&x, &[&y], &opts)?, "03_line_sine.png")?;

    // 4) Two functions with a legend
    let x = linspace(0.0, 10.0, 100);
    let sin: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|v| v.cos()).collect();
    let opts = LineOptions {
        labels: vec!["sin(x)".into(), "cos(x)".into()],
        title: title("Trigonometric Functions"),
        ylabel: title("f(x)"),
        ..opts
    };
    save(&line(&x, &[&sin, &cos], &opts)?, "04_line_multiple.png")?;

    // 5) Noisy samples with markers
    let x = linspace(0.0, 10.0, 20);
    let noise = normal(&mut rng, 0.0, 0.1, x.len())?;
    let y: Vec<f64> = x.iter().zip(noise).map(|(v, e)| v.sin() + e).collect();
    let opts = LineOptions {
        labels: Vec::new(),
        markers: true,
        title: title("Noisy Data with Markers"),
        ylabel: title("y"),
        ..opts
    };
    save(&line(&x, &[&y], &opts)?, "05_line_markers.png")?;

    // 6) Linear correlation
    let mut rng = StdRng::seed_from_u64(42);
    let x = normal(&mut rng, 0.0, 1.0, 200)?;
    let y = correlated(&mut rng, &x, 2.0)?;
    let opts = ScatterOptions {
        title: title("Linear Correlation"),
        xlabel: title("Independent Variable"),
        ylabel: title("Dependent Variable"),
        style: style.clone(),
        ..Default::default()
    };
    save(&scatter(&x, &y, &opts)?, "06_scatter_correlation.png")?;

    // 7) Two clusters
    let mut x = normal(&mut rng, -2.0, 0.5, 100)?;
    let mut y = normal(&mut rng, -2.0, 0.5, 100)?;
    x.extend(normal(&mut rng, 2.0, 0.5, 100)?);
    y.extend(normal(&mut rng, 2.0, 0.5, 100)?);
    let opts = ScatterOptions {
        title: title("Two Clusters"),
        xlabel: None,
        ylabel: None,
        alpha: 0.5,
        ..opts
    };
    save(&scatter(&x, &y, &opts)?, "07_scatter_clusters.png")?;

    // 8) Marginals on correlated data
    let mut rng = StdRng::seed_from_u64(42);
    let x = normal(&mut rng, 0.0, 1.0, 300)?;
    let y = correlated(&mut rng, &x, 2.0)?;
    let opts = ScatterOptions {
        marginals: true,
        title: title("Scatter with Marginal Distributions"),
        xlabel: title("X Variable"),
        ylabel: title("Y Variable"),
        alpha: style.markers.alpha,
        ..opts
    };
    save(&scatter(&x, &y, &opts)?, "08_scatter_marginals_correlation.png")?;

    // 9) Marginals on independent data
    let x = normal(&mut rng, 0.0, 1.0, 300)?;
    let y = normal(&mut rng, 0.0, 1.0, 300)?;
    let opts = ScatterOptions {
        title: title("Independent Variables"),
        xlabel: title("X"),
        ylabel: title("Y"),
        ..opts
    };
    save(&scatter(&x, &y, &opts)?, "09_scatter_marginals_independent.png")?;

    // 10) Many small, faint points
    let x = normal(&mut rng, 0.0, 1.0, 2000)?;
    let y = correlated(&mut rng, &x, 0.5)?;
    let opts = ScatterOptions {
        marginals: false,
        title: title("Large Dataset (n=2000)"),
        xlabel: None,
        ylabel: None,
        alpha: 0.3,
        size: 10.0,
        ..opts
    };
    save(&scatter(&x, &y, &opts)?, "10_scatter_large.png")?;

    tracing::info!(dir = OUT_DIR, "gallery complete");
    Ok(())
}
