// File: crates/dash-core/tests/layout.rs
// Purpose: Layout composer places every chart kind exactly once.

mod common;

use dash_core::chart::ChartKind;
use dash_core::layout::{compose, Header, PLAN};
use dash_core::{DashError, Theme};

#[test]
fn plan_places_seven_charts_in_three_sections() {
    let theme = Theme::midnight();
    let dashboard = compose(&theme, Header::default(), Vec::new(), common::all_charts(&theme)).unwrap();
    assert_eq!(dashboard.sections.len(), 3);
    assert_eq!(dashboard.chart_count(), 7);
    let titles: Vec<_> = dashboard.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, PLAN.map(|(t, _)| t));
    let second: Vec<_> = dashboard.sections[1].rows.iter().map(|r| r.charts.len()).collect();
    assert_eq!(second, [2, 1]);
    assert_eq!(dashboard.sections[1].rows[1].charts[0].kind, ChartKind::TimeSeries);
    assert_eq!(dashboard.theme, theme);
    assert_eq!(dashboard.header.badges.len(), 3);
}

#[test]
fn supplied_order_does_not_matter() {
    let theme = Theme::midnight();
    let mut charts = common::all_charts(&theme);
    charts.reverse();
    let dashboard = compose(&theme, Header::default(), Vec::new(), charts).unwrap();
    assert_eq!(dashboard.sections[0].rows[0].charts[0].kind, ChartKind::Line);
}

#[test]
fn missing_or_duplicate_kinds_are_rejected() {
    let theme = Theme::midnight();
    let mut charts = common::all_charts(&theme);
    charts.pop();
    assert!(matches!(compose(&theme, Header::default(), Vec::new(), charts), Err(DashError::Layout(_))));

    let mut charts = common::all_charts(&theme);
    charts.push(common::build(ChartKind::Bar, &theme));
    let err = compose(&theme, Header::default(), Vec::new(), charts).unwrap_err();
    assert!(err.to_string().contains("bar"));
}
