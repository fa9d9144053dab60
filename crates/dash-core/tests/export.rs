// File: crates/dash-core/tests/export.rs
// Purpose: HTML export: atomic write, deterministic output and golden snapshot with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes tests/__snapshots__/dashboard.html.
// - Else, if the snapshot exists, compares text for exact match.
// - Else, checks that an independent render and export match byte for byte, then logs a note.

mod common;

use dash_core::kpi::{summarize, KpiInputs};
use dash_core::layout::{compose, Dashboard, Header};
use dash_core::{export, render_html, DashError, Theme};

fn dashboard(theme: &Theme) -> Dashboard {
    let (sales, regional, performance, prices) = (common::sales(), common::regional(), common::performance(), common::prices(30));
    let kpis = summarize(&KpiInputs { sales: &sales, regional: &regional, performance: &performance, prices: &prices }).unwrap();
    compose(theme, Header::default(), kpis, common::all_charts(theme)).unwrap()
}

#[test]
fn export_writes_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.html");
    let written = export(&dashboard(&Theme::midnight()), &path).unwrap();
    assert_eq!(written, path);

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert_eq!(html.matches(r#"<figure class="chart""#).count(), 7);
    assert!(html.contains("Sales &amp; Revenue Analytics"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1, "temp file must be renamed away");
}

#[test]
fn failed_export_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.html");
    let err = export(&dashboard(&Theme::midnight()), &path).unwrap_err();
    match err {
        DashError::Export { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected export error, got {other}"),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn rendering_is_deterministic_and_theme_driven() {
    let a = render_html(&dashboard(&Theme::midnight())).unwrap();
    let b = render_html(&dashboard(&Theme::midnight())).unwrap();
    assert_eq!(a, b);

    let daylight = render_html(&dashboard(&Theme::daylight())).unwrap();
    assert_ne!(a, daylight);
    assert!(daylight.contains(&Theme::daylight().background.to_hex()));
}

#[test]
fn embedded_spec_cannot_close_its_script() {
    let html = render_html(&dashboard(&Theme::midnight())).unwrap();
    let start = html.find(r#"id="dashboard-spec">"#).unwrap() + r#"id="dashboard-spec">"#.len();
    let end = start + html[start..].find("</script>").unwrap();
    let json = &html[start..end];
    assert!(!json.contains("</"));
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["charts"].as_array().unwrap().len(), 7);
}

#[test]
fn golden_dashboard_html() {
    let html = render_html(&dashboard(&Theme::midnight())).unwrap();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("dashboard.html");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &html).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), html.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert!(want == html, "rendered dashboard differs from golden snapshot: {}", snap_path.display());
    } else {
        let dir = tempfile::tempdir().unwrap();
        let path = export(&dashboard(&Theme::midnight()), dir.path().join("dashboard.html")).unwrap();
        let exported = std::fs::read(path).unwrap();
        assert!(exported == html.as_bytes(), "exported file differs from an independent render");
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
