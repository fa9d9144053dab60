// File: crates/dash-core/benches/render_bench.rs
// Summary: Chart build, SVG and full HTML rendering over a year of daily prices.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dash_core::builders::ChartSpec;
use dash_core::chart::ChartKind;
use dash_core::dataset::{Column, Dataset};
use dash_core::{render_svg, Theme};

fn prices(days: usize) -> Dataset {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = (0..days).map(|i| start + Duration::days(i as i64)).collect();
    let price: Vec<f64> = (0..days).map(|i| 100.0 + (i as f64 * 0.05).sin() * 8.0).collect();
    Dataset::new("time_series")
        .with_column("date", Column::Date(dates))
        .and_then(|d| d.with_column("high", Column::Number(price.iter().map(|p| p + 2.0).collect())))
        .and_then(|d| d.with_column("low", Column::Number(price.iter().map(|p| p - 2.0).collect())))
        .and_then(|d| d.with_column("volume", Column::Number(vec![500_000.0; days])))
        .and_then(|d| d.with_column("price", Column::Number(price)))
        .unwrap()
}

fn bench_render(c: &mut Criterion) {
    let theme = Theme::midnight();
    let mut group = c.benchmark_group("time_series");
    for &days in &[90usize, 365usize, 3_650usize] {
        let data = prices(days);
        let spec = ChartSpec::default_for(ChartKind::TimeSeries);
        group.bench_function(format!("build_{days}"), |b| {
            b.iter(|| black_box(spec.build(&data, &theme)));
        });
        if let Ok(chart) = spec.build(&data, &theme) {
            group.bench_function(format!("svg_{days}"), |b| {
                b.iter(|| black_box(render_svg(&chart)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
