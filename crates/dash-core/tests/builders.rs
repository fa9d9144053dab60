// File: crates/dash-core/tests/builders.rs
// Purpose: Chart builders honour the theme, degrade to placeholders and keep their glyph contracts.

mod common;

use common::{build, dataset_for, day, shares};
use dash_core::builders::{BarSpec, ChartSpec, GroupedBarSpec, LineSpec, TimeSeriesSpec};
use dash_core::chart::{Annotation, ChartKind, ClickPolicy, Frame, HoverMode, Tool};
use dash_core::dataset::{Column, Dataset};
use dash_core::series::Glyph;
use dash_core::style::apply_theme;
use dash_core::theme::presets;
use dash_core::{DashError, Theme};

#[test]
fn every_kind_takes_its_colors_from_the_theme() {
    for theme in presets() {
        for kind in ChartKind::ALL {
            let chart = build(kind, &theme);
            assert_eq!(chart.kind, kind);
            assert_eq!(chart.style.border_fill, theme.background, "{kind:?} / {}", theme.name);
            assert_eq!(chart.style.background_fill, theme.plot_background);
            assert_eq!(chart.style.grid.color, theme.grid);
            assert_eq!(chart.style.grid.alpha, 0.3);
            assert_eq!(chart.style.title.color, theme.text);
            assert_eq!(chart.style.tick_label, theme.text);
            assert_eq!(chart.style.legend.text, theme.text);
            assert!(!chart.style.minor_ticks);
            assert!(chart.toolbar.tools().starts_with(&Tool::BASE));
            if let Some(legend) = &chart.legend {
                assert_eq!(legend.click_policy, ClickPolicy::Hide);
            }
        }
    }
}

#[test]
fn style_applier_is_idempotent() {
    let theme = Theme::solarized_dark();
    for kind in ChartKind::ALL {
        let once = build(kind, &theme);
        let mut twice = once.clone();
        apply_theme(&mut twice, &theme);
        assert_eq!(once, twice, "{kind:?}");
    }
}

#[test]
fn restyling_swaps_every_theme_color() {
    let mut chart = build(ChartKind::Scatter, &Theme::midnight());
    let daylight = Theme::daylight();
    apply_theme(&mut chart, &daylight);
    assert_eq!(chart.style.border_fill, daylight.background);
    assert_eq!(chart.style.legend.border, daylight.grid);
}

#[test]
fn empty_dataset_gives_placeholder_for_every_kind() {
    let theme = Theme::midnight();
    let empty = Dataset::new("empty");
    for kind in ChartKind::ALL {
        let chart = ChartSpec::default_for(kind).build(&empty, &theme).unwrap();
        assert!(chart.is_placeholder(), "{kind:?}");
        assert_eq!(chart.placeholder.as_deref(), Some("No data available"));
        assert!(chart.series.is_empty());
        assert_eq!(chart.style.border_fill, theme.background);
    }
}

#[test]
fn wrong_shape_is_a_dataset_shape_error() {
    let theme = Theme::midnight();
    let wrong = Dataset::new("wrong").with_column("foo", Column::Number(vec![1.0, 2.0])).unwrap();
    for kind in ChartKind::ALL {
        let err = ChartSpec::default_for(kind).build(&wrong, &theme).unwrap_err();
        assert!(matches!(err, DashError::DatasetShape { ref dataset, .. } if dataset == "wrong"), "{kind:?}: {err}");
    }

    let typed_wrong = Dataset::new("regional")
        .with_column("region", Column::Number(vec![1.0]))
        .unwrap()
        .with_column("revenue", Column::Number(vec![1.0]))
        .unwrap();
    let err = BarSpec::default().build(&typed_wrong, &theme).unwrap_err();
    assert!(err.to_string().contains("region"));
}

#[test]
fn line_chart_one_line_and_marker_set_per_product() {
    let chart = build(ChartKind::Line, &Theme::midnight());
    let lines = chart.series.iter().filter(|s| matches!(s.glyph, Glyph::Line { .. })).count();
    let markers: Vec<_> = chart.series.iter().filter(|s| matches!(s.glyph, Glyph::Markers { .. })).collect();
    assert_eq!(lines, 2);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|s| s.tooltips.len() == 3));
    assert_eq!(chart.legend_len(), 2);
    assert_eq!(chart.hover, Some(HoverMode::Mouse));
    assert_eq!(chart.link_group.as_deref(), Some("monthly"));
}

#[test]
fn single_point_line_draws_a_marker_only() {
    let data = Dataset::new("sales")
        .with_column("date", Column::Date(vec![day(2024, 5, 31)]))
        .unwrap()
        .with_column("product", Column::Text(vec!["Sports".into()]))
        .unwrap()
        .with_column("sales", Column::Number(vec![5_000.0]))
        .unwrap()
        .with_column("units", Column::Number(vec![50.0]))
        .unwrap();
    let chart = LineSpec::default().build(&data, &Theme::midnight()).unwrap();
    assert!(!chart.is_placeholder());
    assert!(chart.series.iter().all(|s| !matches!(s.glyph, Glyph::Line { .. })));
    assert_eq!(chart.glyph_count(), 1);
    assert!(chart.x_axis.range.span() > 0.0);
    assert!(chart.y_axis.range.span() > 0.0);
}

#[test]
fn equal_values_still_open_the_value_axis() {
    let data = Dataset::new("regional")
        .with_column("region", Column::Text(vec!["A".into(), "B".into()]))
        .unwrap()
        .with_column("revenue", Column::Number(vec![0.0, 0.0]))
        .unwrap()
        .with_column("growth", Column::Number(vec![1.0, 1.0]))
        .unwrap()
        .with_column("customers", Column::Number(vec![1.0, 1.0]))
        .unwrap();
    let chart = BarSpec::default().build(&data, &Theme::midnight()).unwrap();
    assert!(chart.x_axis.range.span() > 0.0);
    assert!(chart.x_axis.range.start.is_finite() && chart.x_axis.range.end.is_finite());
}

#[test]
fn bars_keep_provided_order_by_default() {
    let chart = build(ChartKind::Bar, &Theme::midnight());
    let Glyph::Bars { bars, .. } = &chart.series[0].glyph else { panic!("bars first") };
    assert_eq!(bars.len(), 3);
    // First row sits on top.
    let top = bars.iter().max_by(|a, b| a.y0.total_cmp(&b.y0)).unwrap();
    assert_eq!(top.x1, 300_000.0);
    let labels: Vec<_> = chart.y_axis.factors.iter().map(|(_, name)| name.as_str()).collect();
    assert_eq!(labels, ["North America", "Europe", "Asia Pacific"]);
    assert!(chart.x_axis.range.start <= 0.0);
}

#[test]
fn bars_sorted_by_value_put_largest_on_top() {
    let spec = BarSpec { sort_by_value: true, ..BarSpec::default() };
    let chart = spec.build(&dataset_for(ChartKind::Bar), &Theme::midnight()).unwrap();
    let Glyph::Bars { bars, .. } = &chart.series[0].glyph else { panic!("bars first") };
    let top = bars.iter().max_by(|a, b| a.y0.total_cmp(&b.y0)).unwrap();
    assert_eq!(top.x1, 450_000.0);
    let labels: Vec<_> = chart.y_axis.factors.iter().map(|(_, name)| name.as_str()).collect();
    assert_eq!(labels, ["Europe", "North America", "Asia Pacific"]);
}

#[test]
fn grouped_bars_three_categories_two_subgroups() {
    let data = Dataset::new("teams")
        .with_column("team", Column::Text(vec!["Ops".into(), "HR".into(), "Dev".into()]))
        .unwrap()
        .with_column("quality", Column::Number(vec![90.0, 80.0, 70.0]))
        .unwrap()
        .with_column("speed", Column::Number(vec![60.0, 65.0, 99.0]))
        .unwrap();
    let spec = GroupedBarSpec { subgroups: vec!["quality".into(), "speed".into()], ..GroupedBarSpec::default() };
    let chart = spec.build(&data, &Theme::midnight()).unwrap();

    assert_eq!(chart.glyph_count(), 6);
    assert_eq!(chart.legend_len(), 2);
    let factors: Vec<_> = chart.x_axis.factors.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(factors, ["Ops", "HR", "Dev"]);
    assert!(chart.x_axis.label_orientation > 0.0);

    // Bars of one category sit side by side inside its slot.
    let Glyph::Bars { bars: first, .. } = &chart.series[0].glyph else { panic!() };
    let Glyph::Bars { bars: second, .. } = &chart.series[1].glyph else { panic!() };
    assert!((first[0].x1 - second[0].x0).abs() < 1e-12);
    assert!(second[2].x1 <= 3.0);

    assert!(chart.annotations.iter().any(|a| matches!(a, Annotation::Span { location, .. } if *location == 85.0)));
    assert_eq!(chart.y_axis.range.end, 110.0);
}

#[test]
fn donut_fractions_follow_values() {
    let chart = ChartSpec::default_for(ChartKind::Donut)
        .build(&shares(&[40.0, 30.0, 20.0, 10.0]), &Theme::midnight())
        .unwrap();
    assert_eq!(chart.frame, Frame::Polar);
    let wedges: Vec<_> = chart
        .series
        .iter()
        .filter_map(|s| match &s.glyph {
            Glyph::Wedges { wedges, .. } => Some(wedges[0]),
            _ => None,
        })
        .collect();
    let fractions: Vec<f64> = wedges.iter().map(|w| w.fraction).collect();
    for (got, want) in fractions.iter().zip([0.4, 0.3, 0.2, 0.1]) {
        assert!((got - want).abs() < 1e-9);
    }
    assert!((wedges[3].end_angle - std::f64::consts::TAU).abs() < 1e-9);
    assert_eq!(chart.legend_len(), 4);
    // Each legend entry toggles the wedge and its percentage label.
    assert!(chart.legend.as_ref().unwrap().items.iter().all(|it| it.series.len() == 2));
}

#[test]
fn donut_edge_cases() {
    let theme = Theme::midnight();
    let spec = ChartSpec::default_for(ChartKind::Donut);
    assert!(spec.build(&shares(&[0.0, 0.0]), &theme).unwrap().is_placeholder());
    assert!(matches!(spec.build(&shares(&[5.0, -1.0]), &theme), Err(DashError::DatasetShape { .. })));

    let lone = spec.build(&shares(&[0.0, 7.0]), &theme).unwrap();
    let full = lone.series.iter().find_map(|s| match &s.glyph {
        Glyph::Wedges { wedges, .. } if wedges[0].fraction > 0.0 => Some(wedges[0]),
        _ => None,
    });
    assert_eq!(full.map(|w| w.fraction), Some(1.0));
}

#[test]
fn time_series_moving_average_and_tools() {
    let theme = Theme::midnight();
    let chart = TimeSeriesSpec::default().with_window(5).build(&common::prices(20), &theme).unwrap();
    let ma = chart.series.iter().find(|s| s.name.as_deref() == Some("5-Day MA")).unwrap();
    let Glyph::Line { points, .. } = &ma.glyph else { panic!("ma is a line") };
    assert_eq!(points.len(), 20 - 5 + 1);
    // Prices climb by one per day, so the 5-day mean lags the price by two.
    assert!((points[0].1 - 104.0 + 2.0).abs() < 1e-9);
    assert!(chart.toolbar.contains(Tool::Crosshair));
    assert_eq!(chart.hover, Some(HoverMode::VLine));
    assert_eq!(chart.link_group.as_deref(), Some("timeline"));
}

#[test]
fn time_series_reduces_long_inputs_but_keeps_endpoints() {
    let spec = TimeSeriesSpec { max_points: 50, ..TimeSeriesSpec::default() };
    let chart = spec.build(&common::prices(400), &Theme::midnight()).unwrap();
    let price = chart.series.iter().find(|s| s.name.as_deref() == Some("Price")).unwrap();
    let Glyph::Line { points, .. } = &price.glyph else { panic!() };
    assert_eq!(points.len(), 50);
    assert_eq!(price.tooltips.len(), 50);
    assert_eq!(points[0].1, 100.0);
    assert_eq!(points[49].1, 499.0);
}

#[test]
fn time_series_as_long_as_window_draws_one_average_marker() {
    let theme = Theme::midnight();
    let chart = TimeSeriesSpec::default().with_window(7).build(&common::prices(7), &theme).unwrap();
    let ma = chart.series.iter().find(|s| s.name.as_deref() == Some("7-Day MA")).unwrap();
    let Glyph::Markers { points, color, .. } = &ma.glyph else { panic!("single average is a marker") };
    assert_eq!(points.len(), 1);
    // Mean of 100..=106, placed at the last day.
    assert!((points[0].1 - 103.0).abs() < 1e-9);
    assert_eq!(*color, theme.accent_tertiary);
    assert!(chart.legend.as_ref().unwrap().items.iter().any(|item| item.label == "7-Day MA"));
}

#[test]
fn time_series_shorter_than_window_has_no_average() {
    let chart = TimeSeriesSpec::default().build(&common::prices(3), &Theme::midnight()).unwrap();
    assert!(chart.series.iter().all(|s| s.name.as_deref() != Some("7-Day MA")));
    let price = chart.series.iter().find(|s| s.name.as_deref() == Some("Price")).unwrap();
    assert!(price.tooltips.iter().all(|rows| rows.iter().any(|(k, v)| k == "7-Day MA" && v == "—")));
}

#[test]
fn area_stacks_series_cumulatively() {
    let chart = build(ChartKind::Area, &Theme::midnight());
    let areas: Vec<_> = chart
        .series
        .iter()
        .filter_map(|s| match &s.glyph {
            Glyph::Area { lower, upper, .. } => Some((lower.clone(), upper.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].0, vec![0.0; 3]);
    assert_eq!(areas[1].0, areas[0].1);
    assert_eq!(areas[1].1, vec![16_000.0, 20_000.0, 20_000.0]);
    assert!(chart.y_axis.range.start >= 0.0);
}

#[test]
fn scatter_has_one_series_per_category_and_lasso() {
    let chart = build(ChartKind::Scatter, &Theme::midnight());
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.legend_len(), 2);
    assert!(chart.toolbar.contains(Tool::LassoSelect));
    let Glyph::Markers { sizes, .. } = &chart.series[0].glyph else { panic!() };
    assert_eq!(sizes.len(), 2);
}
