// File: crates/tufte-core/tests/normalize.rs
// Purpose: Percentage normalization against hand-computed histograms.

use tufte_core::hist::MAX_STRATEGY_BINS;
use tufte_core::{histogram, normalize_to_percentage, BinStrategy, Bins, HistogramOptions};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn explicit_edges_give_expected_percentages() {
    let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];
    let hist = normalize_to_percentage(&data, &Bins::Edges(vec![0.5, 1.5, 2.5, 3.5])).unwrap();
    let want = [16.67, 33.33, 50.0];
    assert_eq!(hist.percentages.len(), 3);
    for (got, want) in hist.percentages.iter().zip(want) {
        assert!(close(*got, want), "{got} != {want}");
    }
    assert_eq!(hist.bin_width(), 1.0);
    assert_eq!(hist.lefts(), &[0.5, 1.5, 2.5]);
}

#[test]
fn bin_count_spans_data_range() {
    let hist = normalize_to_percentage(&[0.0, 10.0], &Bins::Count(5)).unwrap();
    assert_eq!(hist.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    // The last bin is closed on the right.
    assert_eq!(hist.counts, vec![1, 0, 0, 0, 1]);
}

#[test]
fn constant_sample_widens_to_unit_range() {
    let hist = normalize_to_percentage(&[5.0; 100], &Bins::Count(10)).unwrap();
    assert_eq!(hist.edges.first().copied(), Some(4.5));
    assert_eq!(hist.edges.last().copied(), Some(5.5));
    assert!(close(hist.percentages.iter().sum::<f64>(), 100.0));
}

#[test]
fn nan_and_infinities_are_not_counted() {
    let data = [1.0, f64::NAN, 2.0, f64::INFINITY, 3.0];
    let hist = normalize_to_percentage(&data, &Bins::Count(3)).unwrap();
    assert_eq!(hist.total(), 3);
    assert!(close(hist.percentages.iter().sum::<f64>(), 100.0));
}

#[test]
fn values_outside_explicit_edges_give_zero_percentages() {
    let hist = normalize_to_percentage(&[10.0, 11.0], &Bins::Edges(vec![0.0, 1.0, 2.0])).unwrap();
    assert_eq!(hist.percentages, vec![0.0, 0.0]);
    assert_eq!(hist.max_percentage(), 0.0);
}

#[test]
fn every_strategy_produces_a_full_histogram() {
    let data: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 * 0.5).collect();
    for strategy in [
        BinStrategy::Auto,
        BinStrategy::Fd,
        BinStrategy::Sturges,
        BinStrategy::Sqrt,
        BinStrategy::Rice,
        BinStrategy::Scott,
        BinStrategy::Doane,
    ] {
        let hist = normalize_to_percentage(&data, &Bins::Strategy(strategy)).unwrap();
        assert!(hist.num_bins() >= 1, "{}", strategy.name());
        assert!(close(hist.percentages.iter().sum::<f64>(), 100.0), "{}", strategy.name());
    }
}

#[test]
fn invalid_bins_are_rejected() {
    assert!(normalize_to_percentage(&[1.0, 2.0], &Bins::Count(0)).is_err());
    assert!(normalize_to_percentage(&[1.0, 2.0], &Bins::Edges(vec![1.0])).is_err());
    assert!(normalize_to_percentage(&[1.0, 2.0], &Bins::Edges(vec![2.0, 1.0])).is_err());
}

#[test]
fn bins_parse_from_text() {
    assert_eq!("12".parse::<Bins>().unwrap(), Bins::Count(12));
    assert_eq!("fd".parse::<Bins>().unwrap(), Bins::Strategy(BinStrategy::Fd));
    assert_eq!("0,1,2.5".parse::<Bins>().unwrap(), Bins::Edges(vec![0.0, 1.0, 2.5]));
    assert!("bogus".parse::<Bins>().is_err());
}

/// Skewed sample whose estimator ratios `range / width` all sit well away from integers.
const SKEWED: [f64; 20] = [
    1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 7.0, 8.0, 10.0, 15.0, 20.0, 30.0, 31.0, 33.0, 40.0, 55.0, 60.0,
];

fn strategy_bins(strategy: BinStrategy) -> usize {
    normalize_to_percentage(&SKEWED, &Bins::Strategy(strategy)).unwrap().num_bins()
}

// n = 20, range = 59, population std = 17.974, IQR = 30.25 - 3.0 = 27.25, skewness g1 = 1.138.

#[test]
fn sqrt_bins() {
    // 59 / sqrt(20) = 13.19 wide -> 4.47 bins
    assert_eq!(strategy_bins(BinStrategy::Sqrt), 5);
}

#[test]
fn sturges_bins() {
    // 59 / (log2(20) + 1) = 11.09 wide -> 5.32 bins
    assert_eq!(strategy_bins(BinStrategy::Sturges), 6);
}

#[test]
fn rice_bins() {
    // 59 / (2 * 20^(1/3)) = 10.87 wide -> 5.43 bins
    assert_eq!(strategy_bins(BinStrategy::Rice), 6);
}

#[test]
fn scott_bins() {
    // (24 sqrt(pi) / 20)^(1/3) * 17.974 = 23.11 wide -> 2.55 bins
    assert_eq!(strategy_bins(BinStrategy::Scott), 3);
}

#[test]
fn fd_bins() {
    // 2 * 27.25 * 20^(-1/3) = 20.08 wide -> 2.94 bins
    assert_eq!(strategy_bins(BinStrategy::Fd), 3);
}

#[test]
fn doane_bins() {
    // sigma_g1 = sqrt(6 * 18 / (21 * 23)) = 0.473; 59 / (1 + log2(20) + log2(1 + 1.138 / 0.473)) = 8.32 wide -> 7.09 bins
    assert_eq!(strategy_bins(BinStrategy::Doane), 8);
}

#[test]
fn auto_takes_narrower_of_fd_and_sturges() {
    // min(20.08, 11.09) is the Sturges width.
    assert_eq!(strategy_bins(BinStrategy::Auto), strategy_bins(BinStrategy::Sturges));
}

#[test]
fn tiny_iqr_with_outliers_caps_bin_count() {
    let mut data: Vec<f64> = (0..998).map(|i| i as f64 * 1e-9).collect();
    data.extend([1e9, 1e9]);
    let hist = normalize_to_percentage(&data, &Bins::default()).unwrap();
    assert_eq!(hist.num_bins(), MAX_STRATEGY_BINS);
    assert_eq!(hist.total(), 1000);
    assert!(close(hist.percentages.iter().sum::<f64>(), 100.0));

    // The public chart entry point goes through the same path.
    assert!(histogram(&data, &HistogramOptions::default()).is_ok());
}

#[test]
fn range_beyond_f64_max_keeps_edges_finite() {
    let hist = normalize_to_percentage(&[-1e308, 1e308], &Bins::Count(2)).unwrap();
    assert_eq!(hist.edges, vec![-1e308, 0.0, 1e308]);
    assert_eq!(hist.counts, vec![1, 1]);

    let hist = normalize_to_percentage(&[-1e308, 0.5, 1e308], &Bins::Count(7)).unwrap();
    assert!(hist.edges.iter().all(|e| e.is_finite()));
    assert!(hist.edges.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(hist.total(), 3);
}

#[test]
fn uneven_edges_report_each_width() {
    let hist = normalize_to_percentage(&[0.5, 1.5, 4.0], &Bins::Edges(vec![0.0, 1.0, 3.0, 6.0])).unwrap();
    assert_eq!(hist.widths(), vec![1.0, 2.0, 3.0]);
}
