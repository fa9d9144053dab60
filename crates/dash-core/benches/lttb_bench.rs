// File: crates/dash-core/benches/lttb_bench.rs
// Summary: LTTB reduction and trailing moving average over long price-like series.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dash_core::downsample::lttb;
use dash_core::indicator::trailing_mean;

fn gen_xy(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 86_400_000.0;
            // waveform with drift
            let y = 100.0 + (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001;
            (x, y)
        })
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_xy(n);
        for &target in &[500usize, 2_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_t{target}")), &target, |b, &t| {
                b.iter_batched(|| data.clone(), |d| black_box(lttb(&d, t)), BatchSize::SmallInput);
            });
        }
    }
    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    let data = gen_xy(100_000);
    let mut group = c.benchmark_group("trailing_mean");
    for &window in &[7usize, 30usize] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &w| {
            b.iter(|| black_box(trailing_mean(&data, w)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lttb, bench_moving_average);
criterion_main!(benches);
