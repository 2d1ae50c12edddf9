// File: crates/tufte-cli/src/main.rs
// Summary: `tufte` CLI; loads CSV columns and writes a histogram, line, or scatter chart as PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tufte_core::{
    histogram, line, scatter, Bins, Column, Figure, HistogramOptions, LineOptions, RenderOptions, SampleValue,
    ScatterOptions, Style, ToSample,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimal-ink charts from CSV data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Percentage histogram of one column
    Histogram {
        #[command(flatten)]
        common: Common,
        /// Column to bin
        #[arg(long)]
        x: String,
        /// Bin count, strategy (auto, fd, sturges, sqrt, rice, scott, doane) or comma-separated edges
        #[arg(long, default_value = "auto")]
        bins: Bins,
    },
    /// One or more y columns against an x column
    Line {
        #[command(flatten)]
        common: Common,
        #[arg(long)]
        x: String,
        /// Y column; repeat for several series
        #[arg(long, required = true)]
        y: Vec<String>,
        /// Legend label per y column, in order
        #[arg(long)]
        label: Vec<String>,
        /// Draw hollow circles at each point
        #[arg(long)]
        markers: bool,
    },
    /// Scatter of two columns
    Scatter {
        #[command(flatten)]
        common: Common,
        #[arg(long)]
        x: String,
        #[arg(long)]
        y: String,
        /// Add percentage histograms along the top and right edges
        #[arg(long)]
        marginals: bool,
    },
}

#[derive(Args, Debug)]
struct Common {
    /// Input CSV file with a header row
    csv: PathBuf,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    xlabel: Option<String>,
    #[arg(long)]
    ylabel: Option<String>,
    /// TOML style overrides
    #[arg(long)]
    style: Option<PathBuf>,
    /// Output resolution; defaults to the style's save dpi
    #[arg(long)]
    dpi: Option<f32>,
    /// Output PNG path
    #[arg(short, long)]
    output: PathBuf,
}

impl Common {
    fn load_style(&self) -> Result<Style> {
        match &self.style {
            Some(path) => Style::load(path).with_context(|| format!("loading style {}", path.display())),
            None => Ok(Style::tufte()),
        }
    }

    fn save(&self, fig: &Figure, style: &Style) -> Result<()> {
        let mut opts = RenderOptions::for_saving(style);
        if let Some(dpi) = self.dpi {
            opts.dpi = dpi;
        }
        fig.render_to_png(&opts, &self.output)?;
        println!("Wrote {}", self.output.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match Cli::parse().command {
        Command::Histogram { common, x, bins } => {
            let style = common.load_style()?;
            let [col] = load_columns(&common.csv, &[x.as_str()])?;
            let mut opts = HistogramOptions {
                bins,
                title: common.title.clone(),
                xlabel: common.xlabel.clone().or_else(|| Some(col.name.clone())),
                figsize: style.figure_sizes.default,
                color: style.colors.primary,
                style: style.clone(),
                ..Default::default()
            };
            if let Some(ylabel) = &common.ylabel {
                opts.ylabel = ylabel.clone();
            }
            let fig = histogram(&col, &opts)?;
            common.save(&fig, &style)
        }
        Command::Line { common, x, y, label, markers } => {
            let style = common.load_style()?;
            let mut names = vec![x.as_str()];
            names.extend(y.iter().map(String::as_str));
            let mut cols = load_columns_dyn(&common.csv, &names)?;
            let x_col = cols.remove(0);
            let ys: Vec<&dyn ToSample> = cols.iter().map(|c| c as &dyn ToSample).collect();
            let labels = if label.is_empty() && cols.len() > 1 {
                cols.iter().map(|c| c.name.clone()).collect()
            } else {
                label
            };
            let opts = LineOptions {
                labels,
                title: common.title.clone(),
                xlabel: common.xlabel.clone().or_else(|| Some(x_col.name.clone())),
                ylabel: common.ylabel.clone(),
                figsize: style.figure_sizes.default,
                markers,
                colors: None,
                style: style.clone(),
            };
            let fig = line(&x_col, &ys, &opts)?;
            common.save(&fig, &style)
        }
        Command::Scatter { common, x, y, marginals } => {
            let style = common.load_style()?;
            let [x_col, y_col] = load_columns(&common.csv, &[x.as_str(), y.as_str()])?;
            let opts = ScatterOptions {
                marginals,
                title: common.title.clone(),
                xlabel: common.xlabel.clone().or_else(|| Some(x_col.name.clone())),
                ylabel: common.ylabel.clone().or_else(|| Some(y_col.name.clone())),
                color: style.colors.primary,
                alpha: style.markers.alpha,
                size: style.markers.size,
                style: style.clone(),
                ..Default::default()
            };
            let fig = scatter(&x_col, &y_col, &opts)?;
            common.save(&fig, &style)
        }
    }
}

fn load_columns<const N: usize>(path: &Path, names: &[&str; N]) -> Result<[Column; N]> {
    let cols = load_columns_dyn(path, names)?;
    cols.try_into()
        .map_err(|_| anyhow::anyhow!("expected {N} columns from {}", path.display()))
}

/// Read the named columns; header matching falls back to case-insensitive.
fn load_columns_dyn(path: &Path, names: &[&str]) -> Result<Vec<Column>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let indices = names
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == name)
                .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
                .with_context(|| format!("column {name:?} not found; available: {}", headers.join(", ")))
        })
        .collect::<Result<Vec<usize>>>()?;

    let mut cols: Vec<Column> = indices
        .iter()
        .map(|&i| Column::new(headers[i].clone(), Vec::new()))
        .collect();

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 2))?;
        for (col, &i) in cols.iter_mut().zip(&indices) {
            let cell = rec.get(i).unwrap_or("");
            let v = cell
                .to_value()
                .map_err(|e| anyhow::anyhow!("row {}, column {:?}: {e}", row + 2, col.name))?;
            col.values.push(if v.is_nan() { None } else { Some(v) });
        }
    }
    tracing::debug!(path = %path.display(), columns = cols.len(), rows = cols.first().map_or(0, Column::len), "loaded csv");
    Ok(cols)
}
