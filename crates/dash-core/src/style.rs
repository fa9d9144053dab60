// File: crates/dash-core/src/style.rs
// Summary: Style applier; stamps the theme onto a chart's style block, toolbar and legend.

use crate::chart::{Chart, ChartStyle, ClickPolicy, Frame, GridStyle, LegendStyle, TitleStyle, Tool};
use crate::theme::Theme;

/// Grid lines sit behind data at this opacity.
pub const GRID_ALPHA: f64 = 0.3;
/// Legend box opacity over the plot.
pub const LEGEND_ALPHA: f64 = 0.8;

/// Apply `theme` to `chart` in place.
///
/// Every property is assigned, never adjusted, and tools are merged as a set, so
/// applying the same theme twice leaves the chart exactly as one application did.
pub fn apply_theme(chart: &mut Chart, theme: &Theme) {
    chart.style = ChartStyle {
        border_fill: theme.background,
        background_fill: theme.plot_background,
        outline: theme.grid,
        grid: GridStyle {
            color: theme.grid,
            alpha: GRID_ALPHA,
            visible: chart.frame == Frame::Cartesian,
        },
        axis_line: theme.grid,
        major_tick: theme.grid,
        minor_ticks: false,
        tick_label: theme.text,
        axis_label: theme.text,
        title: TitleStyle {
            color: theme.text,
            font_size: theme.title_font_size,
            font_family: theme.font_family.clone(),
        },
        legend: LegendStyle {
            background: theme.plot_background,
            background_alpha: LEGEND_ALPHA,
            border: theme.grid,
            text: theme.text,
        },
    };

    chart.toolbar.merge_base(&Tool::BASE);

    if let Some(legend) = chart.legend.as_mut() {
        legend.click_policy = ClickPolicy::Hide;
    }
}

/// Convenience for builders: apply and hand the chart back.
pub fn styled(mut chart: Chart, theme: &Theme) -> Chart {
    apply_theme(&mut chart, theme);
    chart
}
