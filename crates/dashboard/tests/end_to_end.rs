// File: crates/dashboard/tests/end_to_end.rs
// Purpose: Full pipeline runs: one artifact, one layout, 6 KPI cards, 7 charts, deterministic output.

use chrono::NaiveDate;
use dashboard::{build_dashboard, load_theme, run, Settings};

fn settings(dir: &std::path::Path) -> Settings {
    Settings::new(dir.join("dashboard.html"), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

#[test]
fn pipeline_writes_one_self_contained_document() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&settings(dir.path())).expect("pipeline should succeed");
    assert_eq!(report.charts, 7);
    assert_eq!(report.kpis, 6);
    assert_eq!(report.theme, "midnight");

    let html = std::fs::read_to_string(&report.output).unwrap();
    assert_eq!(html.matches(r#"<div class="dashboard">"#).count(), 1);
    assert_eq!(html.matches(r#"<div class="kpi" "#).count(), 6);
    assert_eq!(html.matches(r#"<figure class="chart""#).count(), 7);
    assert!(html.contains(r#"id="dashboard-spec""#));
    assert!(!html.contains("src=\"http"), "no external assets");

    // Only the artifact is left in the directory.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn same_seed_and_anchor_give_identical_files() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let first = run(&settings(a.path())).unwrap();
    let second = run(&settings(b.path())).unwrap();
    assert_eq!(std::fs::read(first.output).unwrap(), std::fs::read(second.output).unwrap());
}

#[test]
fn theme_file_overrides_reach_every_chart() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("theme.toml");
    std::fs::write(&theme_path, "[colors]\nbackground = \"#123456\"\n").unwrap();

    let mut s = settings(dir.path());
    s.theme_file = Some(theme_path);
    let dashboard = build_dashboard(&s).unwrap();
    assert_eq!(dashboard.theme.background.to_hex(), "#123456");
    assert!(dashboard.charts().all(|c| c.style.border_fill.to_hex() == "#123456"));
}

#[test]
fn unknown_theme_role_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("theme.toml");
    std::fs::write(&theme_path, "[colors]\nnot_a_role = \"#000000\"\n").unwrap();
    assert!(load_theme("midnight", Some(&theme_path)).is_err());
    assert!(load_theme("no-such-preset", None).is_err());
}

#[test]
fn moving_average_window_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = settings(dir.path());
    s.ma_window = 14;
    let dashboard = build_dashboard(&s).unwrap();
    let ts = dashboard
        .charts()
        .find(|c| c.kind == dash_core::ChartKind::TimeSeries)
        .unwrap();
    assert!(ts.series.iter().any(|s| s.name.as_deref() == Some("14-Day MA")));
}

#[test]
fn data_dir_receives_csv_dumps() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = settings(dir.path());
    s.data_dir = Some(dir.path().join("data"));
    run(&s).unwrap();
    assert_eq!(std::fs::read_dir(dir.path().join("data")).unwrap().count(), 6);
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = settings(dir.path());
    s.output = dir.path().join("missing").join("dashboard.html");
    let err = run(&s).unwrap_err();
    assert!(format!("{err:#}").contains("dashboard.html"));
}

#[test]
fn scatter_shows_one_hundred_fifty_points() {
    let dir = tempfile::tempdir().unwrap();
    let dashboard = build_dashboard(&settings(dir.path())).unwrap();
    let scatter = dashboard
        .charts()
        .find(|c| c.kind == dash_core::ChartKind::Scatter)
        .unwrap();
    let markers: usize = scatter
        .series
        .iter()
        .filter(|s| matches!(s.glyph, dash_core::Glyph::Markers { .. }))
        .map(|s| s.glyph.item_count())
        .sum();
    assert_eq!(markers, 150);
}
