// File: crates/dash-render-skia/tests/snapshot.rs
// Purpose: PNG snapshots decode, have the chart's size and paint the theme's background.

use chrono::NaiveDate;
use dash_core::builders::ChartSpec;
use dash_core::chart::ChartKind;
use dash_core::dataset::{Column, Dataset};
use dash_core::layout::{compose, Header};
use dash_core::Theme;
use dash_render_skia::{snapshot_dashboard, SkiaRenderer};

fn sales() -> Dataset {
    let d = |m| NaiveDate::from_ymd_opt(2024, m, 28).unwrap();
    Dataset::new("sales")
        .with_column("date", Column::Date(vec![d(1), d(2), d(3), d(1), d(2), d(3)]))
        .unwrap()
        .with_column("product", Column::Text(["A", "A", "A", "B", "B", "B"].map(String::from).to_vec()))
        .unwrap()
        .with_column("sales", Column::Number(vec![10.0, 20.0, 15.0, 5.0, 8.0, 12.0]))
        .unwrap()
        .with_column("units", Column::Number(vec![1.0, 2.0, 1.0, 1.0, 1.0, 2.0]))
        .unwrap()
}

#[test]
fn line_chart_png_matches_size_and_background() {
    let theme = Theme::midnight();
    let chart = ChartSpec::default_for(ChartKind::Line).build(&sales(), &theme).unwrap();
    let renderer = SkiaRenderer::new(&theme.font_family);
    let bytes = renderer.render_png_bytes(&chart).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), chart.width);
    assert_eq!(img.height(), chart.height);
    let corner = img.get_pixel(1, 1);
    let bg = theme.background;
    assert_eq!([corner[0], corner[1], corner[2]], [bg.r, bg.g, bg.b]);
}

#[test]
fn placeholder_chart_still_renders() {
    let theme = Theme::daylight();
    let chart = ChartSpec::default_for(ChartKind::Donut).build(&Dataset::new("empty"), &theme).unwrap();
    assert!(chart.is_placeholder());
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("donut.png");
    SkiaRenderer::new(&theme.font_family).render_png(&chart, &path).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn dashboard_snapshot_writes_one_png_per_chart() {
    let theme = Theme::midnight();
    let empty = Dataset::new("empty");
    let charts = ChartKind::ALL
        .iter()
        .map(|kind| ChartSpec::default_for(*kind).build(&empty, &theme).unwrap())
        .collect();
    let dashboard = compose(&theme, Header::default(), Vec::new(), charts).unwrap();

    let out = tempfile::tempdir().unwrap();
    let written = snapshot_dashboard(&dashboard, out.path().join("png")).unwrap();
    assert_eq!(written.len(), 7);
    for path in &written {
        let img = image::open(path).expect("decode png");
        assert!(img.width() > 0);
    }
}
