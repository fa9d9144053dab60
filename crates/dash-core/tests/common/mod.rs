// File: crates/dash-core/tests/common/mod.rs
// Purpose: Small hand-built datasets shared by the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use dash_core::builders::ChartSpec;
use dash_core::chart::{Chart, ChartKind};
use dash_core::dataset::{Column, Dataset};
use dash_core::Theme;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn text(values: &[&str]) -> Column {
    Column::Text(values.iter().map(|s| s.to_string()).collect())
}

pub fn sales() -> Dataset {
    Dataset::new("sales")
        .with_column("date", Column::Date(vec![day(2024, 1, 31), day(2024, 2, 29), day(2024, 3, 31), day(2024, 1, 31), day(2024, 2, 29), day(2024, 3, 31)]))
        .unwrap()
        .with_column("product", text(&["Electronics", "Electronics", "Electronics", "Sports", "Sports", "Sports"]))
        .unwrap()
        .with_column("sales", Column::Number(vec![12_000.0, 15_000.0, 13_500.0, 4_000.0, 5_000.0, 6_500.0]))
        .unwrap()
        .with_column("units", Column::Number(vec![120.0, 150.0, 135.0, 80.0, 100.0, 130.0]))
        .unwrap()
}

pub fn regional() -> Dataset {
    Dataset::new("regional")
        .with_column("region", text(&["North America", "Europe", "Asia Pacific"]))
        .unwrap()
        .with_column("revenue", Column::Number(vec![300_000.0, 450_000.0, 120_000.0]))
        .unwrap()
        .with_column("growth", Column::Number(vec![10.0, 5.0, 15.0]))
        .unwrap()
        .with_column("customers", Column::Number(vec![4_000.0, 2_500.0, 1_500.0]))
        .unwrap()
        .with_column("satisfaction", Column::Number(vec![4.6, 4.2, 4.4]))
        .unwrap()
}

pub fn performance() -> Dataset {
    Dataset::new("performance")
        .with_column("team", text(&["Engineering", "Sales", "Support"]))
        .unwrap()
        .with_column("productivity", Column::Number(vec![90.0, 80.0, 70.0]))
        .unwrap()
        .with_column("quality", Column::Number(vec![95.0, 85.0, 75.0]))
        .unwrap()
        .with_column("efficiency", Column::Number(vec![85.0, 75.0, 65.0]))
        .unwrap()
}

pub fn prices(days: usize) -> Dataset {
    let dates: Vec<NaiveDate> = (0..days).map(|i| day(2024, 1, 1) + chrono::Duration::days(i as i64)).collect();
    let price: Vec<f64> = (0..days).map(|i| 100.0 + i as f64).collect();
    Dataset::new("time_series")
        .with_column("date", Column::Date(dates))
        .unwrap()
        .with_column("high", Column::Number(price.iter().map(|p| p + 2.0).collect()))
        .unwrap()
        .with_column("low", Column::Number(price.iter().map(|p| p - 2.0).collect()))
        .unwrap()
        .with_column("volume", Column::Number(vec![500_000.0; days]))
        .unwrap()
        .with_column("price", Column::Number(price))
        .unwrap()
}

pub fn scatter() -> Dataset {
    Dataset::new("scatter")
        .with_column("x", Column::Number(vec![30.0, 32.0, 60.0, 61.0]))
        .unwrap()
        .with_column("y", Column::Number(vec![40.0, 42.0, 70.0, 69.0]))
        .unwrap()
        .with_column("size", Column::Number(vec![8.0, 10.0, 12.0, 14.0]))
        .unwrap()
        .with_column("category", text(&["Category A", "Category A", "Category B", "Category B"]))
        .unwrap()
        .with_column("value", Column::Number(vec![12.0, 13.4, 42.0, 42.1]))
        .unwrap()
}

pub fn shares(values: &[f64]) -> Dataset {
    let names: Vec<String> = (0..values.len()).map(|i| format!("Slice {i}")).collect();
    Dataset::new("device_share")
        .with_column("category", Column::Text(names))
        .unwrap()
        .with_column("value", Column::Number(values.to_vec()))
        .unwrap()
}

/// The dataset each chart kind is fed in the dashboard.
pub fn dataset_for(kind: ChartKind) -> Dataset {
    match kind {
        ChartKind::Line | ChartKind::Area => sales(),
        ChartKind::Bar => regional(),
        ChartKind::GroupedBar => performance(),
        ChartKind::Scatter => scatter(),
        ChartKind::Donut => shares(&[45.0, 35.0, 12.0, 5.0, 3.0]),
        ChartKind::TimeSeries => prices(30),
    }
}

pub fn build(kind: ChartKind, theme: &Theme) -> Chart {
    ChartSpec::default_for(kind).build(&dataset_for(kind), theme).unwrap()
}

pub fn all_charts(theme: &Theme) -> Vec<Chart> {
    ChartKind::ALL.iter().map(|k| build(*k, theme)).collect()
}
