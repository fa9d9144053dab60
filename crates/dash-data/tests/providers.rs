// File: crates/dash-data/tests/providers.rs
// Purpose: Provider shapes, reproducibility, value bounds and CSV dumps.

use chrono::{Datelike, NaiveDate};
use dash_data::generator::month_ends;
use dash_data::{write_all, write_csv, DataConfig, Generator};

fn generator(seed: u64) -> Generator {
    let anchor = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    Generator::new(DataConfig::new(seed, anchor))
}

#[test]
fn sales_has_one_row_per_product_month() {
    let sales = generator(42).sales(12).unwrap();
    assert_eq!(sales.len(), 5 * 12);
    assert!(sales.numbers("sales").unwrap().iter().all(|v| *v >= 1_000.0 && v.fract() == 0.0));
    let dates = sales.dates("date").unwrap();
    // Month-end dates: the following day starts a new month.
    assert!(dates.iter().all(|d| d.succ_opt().unwrap().day() == 1));
    assert!(dates.iter().all(|d| *d <= NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
}

#[test]
fn same_seed_same_data() {
    let a = generator(7).bundle(12, 90, 99).unwrap();
    let b = generator(7).bundle(12, 90, 99).unwrap();
    assert_eq!(a, b);
    let c = generator(8).bundle(12, 90, 99).unwrap();
    assert_ne!(a.sales, c.sales);
}

#[test]
fn providers_do_not_depend_on_call_order() {
    let g = generator(42);
    let first = g.regional().unwrap();
    let _ = g.sales(12).unwrap();
    assert_eq!(first, g.regional().unwrap());
}

#[test]
fn regional_and_performance_stay_in_bounds() {
    let g = generator(42);
    let regional = g.regional().unwrap();
    assert_eq!(regional.len(), 5);
    assert!(regional.numbers("growth").unwrap().iter().all(|v| (-5.0..25.0).contains(v)));
    assert!(regional.numbers("satisfaction").unwrap().iter().all(|v| (3.5..5.0).contains(v)));
    let revenue = regional.numbers("revenue").unwrap();
    assert!(revenue.windows(2).all(|w| w[0] >= w[1]), "regions are listed by revenue");

    let perf = g.performance().unwrap();
    assert_eq!(perf.texts("team").unwrap().len(), 6);
    assert!(perf.numbers("quality").unwrap().iter().all(|v| (80.0..99.0).contains(v)));
}

#[test]
fn price_walk_respects_floor_and_band() {
    let ts = generator(3).time_series(365).unwrap();
    let price = ts.numbers("price").unwrap();
    let high = ts.numbers("high").unwrap();
    let low = ts.numbers("low").unwrap();
    assert_eq!(price[0], 100.0);
    assert!(price.iter().all(|p| *p >= 10.0));
    for i in 0..price.len() {
        assert!(low[i] <= price[i] && price[i] <= high[i]);
    }
    let dates = ts.dates("date").unwrap();
    assert!(dates.windows(2).all(|w| (w[1] - w[0]).num_days() == 1));
}

#[test]
fn scatter_splits_points_across_three_clusters() {
    let scatter = generator(42).scatter(100).unwrap();
    assert_eq!(scatter.len(), 99);
    let cats = scatter.texts("category").unwrap();
    assert_eq!(cats.iter().filter(|c| *c == "Category B").count(), 33);
}

#[test]
fn device_share_is_fixed() {
    let share = generator(1).device_share().unwrap();
    assert_eq!(share.numbers("value").unwrap(), &[45.0, 35.0, 12.0, 5.0, 3.0]);
    assert_eq!(share.texts("category").unwrap()[3], "Smart TV");
}

#[test]
fn month_ends_start_on_or_after_the_given_day() {
    let from = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let ends = month_ends(from, 3);
    assert_eq!(
        ends,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        ]
    );
}

#[test]
fn csv_dump_writes_header_and_iso_dates() {
    let dir = tempfile::tempdir().unwrap();
    let sales = generator(42).sales(2).unwrap();
    let path = dir.path().join("sales.csv");
    write_csv(&sales, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("date,product,sales,units"));
    let first = lines.next().unwrap();
    assert!(first.starts_with("2024-"));
    assert_eq!(text.lines().count(), 1 + 10);
}

#[test]
fn write_all_creates_one_file_per_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested");
    let bundle = generator(42).bundle(12, 30, 30).unwrap();
    let written = write_all(bundle.datasets(), &out).unwrap();
    assert_eq!(written.len(), 6);
    assert!(written.iter().all(|p| p.exists()));
    assert!(out.join("device_share.csv").exists());
}
