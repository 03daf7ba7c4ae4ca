use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use onezone_math::series::{evaluate_series, SeriesConfig, SeriesTerm};
use std::hint::black_box;

/// Worst case: x = 0 runs to the iteration cap.
fn bench_series_capped(c: &mut Criterion) {
    let config = SeriesConfig::default();
    c.bench_function("photon_series_x0_capped", |b| {
        b.iter(|| evaluate_series(black_box(0.0), SeriesTerm::PhotonNumber, &config))
    });
}

/// Typical stellar regime: x between 0.1 and 20.
fn bench_series_by_x(c: &mut Criterion) {
    let config = SeriesConfig::default();
    let mut group = c.benchmark_group("series_by_x");
    for x in [0.1, 1.0, 5.0, 20.0] {
        for term in SeriesTerm::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("{term:?}"), x),
                &x,
                |b, &x| b.iter(|| evaluate_series(black_box(x), term, &config)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_series_capped, bench_series_by_x);
criterion_main!(benches);
