use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tufte_core::{normalize_to_percentage, BinStrategy, Bins};

fn sample(n: usize) -> Vec<f64> {
    // Deterministic, roughly bell-shaped data without pulling in an RNG.
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_75;
            (t.fract() + (t * 1.3).fract() + (t * 1.7).fract()) * 10.0
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_to_percentage");
    for &n in &[10_000usize, 100_000usize] {
        let data = sample(n);
        for strategy in [BinStrategy::Auto, BinStrategy::Sturges, BinStrategy::Doane] {
            let bins = Bins::Strategy(strategy);
            group.bench_function(format!("{}_{n}", strategy.name()), |b| {
                b.iter(|| black_box(normalize_to_percentage(black_box(&data), &bins)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
