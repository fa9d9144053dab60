// File: crates/dash-core/src/render/html.rs
// Summary: Dashboard -> one self-contained HTML document (inline CSS, inline SVG,
// JSON interaction spec, embedded runtime script).

use std::fmt::Write;

use serde::Serialize;

use super::{render_svg, PlotRect, Viewport};
use crate::axis::{Axis, ScaleKind, TickFormat};
use crate::chart::{Chart, ClickPolicy, Frame, HoverMode, Tool, Toolbar};
use crate::error::Result;
use crate::format::html_escape;
use crate::kpi::{KpiCard, Trend};
use crate::layout::Dashboard;
use crate::scale::Range;
use crate::series::{Glyph, Tooltip};
use crate::theme::{Role, Theme};

/// Browser-side pan/zoom/hover/lasso/crosshair/legend/link handling.
pub const RUNTIME_JS: &str = include_str!("../../assets/runtime.js");

const PAGE_CSS: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { background: var(--background); color: var(--text); font-family: var(--font); padding: 20px; line-height: 1.5; }
        .dashboard { max-width: 1440px; margin: 0 auto; }
        .header { background: linear-gradient(135deg, var(--plot-background) 0%, var(--background) 50%, var(--plot-background) 100%); padding: 30px; border-radius: 16px; margin-bottom: 20px; border: 1px solid var(--grid); box-shadow: 0 10px 40px rgba(0, 0, 0, 0.4); }
        .header h1 { color: var(--accent-primary); font-size: 2.5em; margin: 0 0 10px 0; letter-spacing: -0.5px; }
        .header p { color: var(--muted-text); font-size: 1.1em; }
        .badges { margin-top: 15px; display: flex; gap: 20px; flex-wrap: wrap; }
        .badge { font-size: 0.9em; }
        .kpis { display: flex; gap: 20px; margin-bottom: 25px; flex-wrap: wrap; }
        .kpi { flex: 1; min-width: 160px; border: 1px solid; border-radius: 12px; padding: 20px; text-align: center; }
        .kpi-title { color: var(--muted-text); font-size: 0.9em; margin-bottom: 5px; }
        .kpi-value { font-size: 2em; font-weight: bold; }
        .kpi-caption { font-size: 0.85em; color: var(--muted-text); }
        .kpi-caption.up { color: var(--positive); }
        .kpi-caption.down { color: var(--negative); }
        .section h2 { color: var(--text); border-bottom: 2px solid var(--grid); padding-bottom: 10px; margin: 30px 0 20px 0; font-size: 1.5em; }
        .row { display: flex; gap: 20px; flex-wrap: wrap; margin-bottom: 20px; }
        .chart { position: relative; margin: 0; }
        .chart-svg { display: block; border-radius: 8px; user-select: none; }
        .toolbar { position: absolute; top: 6px; right: 6px; display: flex; gap: 2px; opacity: 0.55; transition: opacity 0.15s; }
        .chart:hover .toolbar { opacity: 1; }
        .tool { background: var(--plot-background); color: var(--text); border: 1px solid var(--grid); border-radius: 4px; width: 24px; height: 22px; font-size: 12px; line-height: 1; cursor: pointer; }
        .tool.active { border-color: var(--accent-primary); color: var(--accent-primary); }
        .legend-item { cursor: pointer; }
        .legend-item.muted { opacity: 0.35; }
        .series.hidden { display: none; }
        .item.unselected { opacity: 0.2; }
        .dash-tooltip { position: fixed; z-index: 10; pointer-events: none; background: var(--plot-background); color: var(--text); border: 1px solid var(--grid); border-radius: 6px; padding: 6px 8px; font-size: 12px; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.35); }
        .dash-tooltip table { border-collapse: collapse; }
        .dash-tooltip td { padding: 1px 6px 1px 0; }
        .dash-tooltip td:first-child { color: var(--muted-text); }
        .dash-tooltip .group + .group { margin-top: 6px; padding-top: 6px; border-top: 1px solid var(--grid); }
        .footer { text-align: center; padding: 20px; margin-top: 30px; border-top: 1px solid var(--grid); color: var(--muted-text); font-size: 0.9em; }
"#;

#[derive(Serialize)]
struct AxisView<'a> {
    kind: ScaleKind,
    format: TickFormat,
    range: Range,
    factors: &'a [(f64, String)],
    visible: bool,
    orientation: f64,
}

#[derive(Serialize)]
struct SeriesView<'a> {
    name: Option<&'a str>,
    glyph: &'static str,
    /// Initial-view pixel anchor per hoverable item.
    points: Vec<[f64; 2]>,
    tooltips: &'a [Tooltip],
}

/// Everything the runtime needs to drive one chart.
#[derive(Serialize)]
pub struct ChartInteraction<'a> {
    id: &'a str,
    tools: &'a Toolbar,
    hover: Option<HoverMode>,
    link_group: Option<&'a str>,
    frame: Frame,
    click_policy: ClickPolicy,
    plot: PlotRect,
    ticks: (usize, usize),
    x: AxisView<'a>,
    y: AxisView<'a>,
    series: Vec<SeriesView<'a>>,
}

#[derive(Serialize)]
struct PageSpec<'a> {
    charts: Vec<ChartInteraction<'a>>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build the interaction record for `chart` in its initial view.
pub fn interaction_spec(chart: &Chart) -> ChartInteraction<'_> {
    let vp = Viewport::of(chart);
    let anchor = |p: (f64, f64)| {
        let (x, y) = vp.px(p);
        [round2(x), round2(y)]
    };
    let series = chart
        .series
        .iter()
        .map(|s| {
            let (glyph, points): (&'static str, Vec<[f64; 2]>) = match &s.glyph {
                Glyph::Line { points, .. } => ("line", points.iter().map(|p| anchor(*p)).collect()),
                Glyph::Markers { points, .. } => ("markers", points.iter().map(|p| anchor(*p)).collect()),
                Glyph::Bars { bars, .. } => (
                    "bars",
                    bars.iter().map(|b| anchor(((b.x0 + b.x1) / 2.0, (b.y0 + b.y1) / 2.0))).collect(),
                ),
                Glyph::Area { xs, upper, .. } => {
                    ("area", xs.iter().zip(upper).map(|(&x, &y)| anchor((x, y))).collect())
                }
                Glyph::Wedges { .. } => ("wedges", Vec::new()),
                Glyph::Text { .. } => ("text", Vec::new()),
            };
            SeriesView { name: s.name.as_deref(), glyph, points, tooltips: &s.tooltips }
        })
        .collect();
    ChartInteraction {
        id: &chart.id,
        tools: &chart.toolbar,
        hover: chart.hover,
        link_group: chart.link_group.as_deref(),
        frame: chart.frame,
        click_policy: chart.legend.as_ref().map_or(ClickPolicy::None, |l| l.click_policy),
        plot: vp.rect,
        ticks: super::svg::tick_targets(vp.rect),
        x: axis_view(&chart.x_axis, vp.x.domain),
        y: axis_view(&chart.y_axis, vp.y.domain),
        series,
    }
}

fn axis_view(axis: &Axis, range: Range) -> AxisView<'_> {
    AxisView {
        kind: axis.kind,
        format: axis.format,
        range,
        factors: &axis.factors,
        visible: axis.visible,
        orientation: axis.label_orientation,
    }
}

fn tool_key(tool: Tool) -> (&'static str, &'static str) {
    match tool {
        Tool::Pan => ("pan", "✥"),
        Tool::BoxZoom => ("box_zoom", "⬚"),
        Tool::WheelZoom => ("wheel_zoom", "⊕"),
        Tool::Reset => ("reset", "↺"),
        Tool::Save => ("save", "⤓"),
        Tool::Hover => ("hover", "ⓘ"),
        Tool::LassoSelect => ("lasso_select", "➰"),
        Tool::Crosshair => ("crosshair", "✛"),
    }
}

fn root_vars(theme: &Theme) -> String {
    let mut css = String::from(":root {");
    for role in Role::ALL {
        let _ = write!(css, " --{}: {};", role.name().replace('_', "-"), theme.get(role).to_hex());
    }
    let _ = write!(css, " --font: {}; }}", theme.font_family);
    css
}

fn write_kpi(out: &mut String, card: &KpiCard, theme: &Theme) {
    let accent = theme.get(card.accent);
    let class = match card.trend {
        Some(Trend::Up) => " up",
        Some(Trend::Down) => " down",
        _ => "",
    };
    let _ = writeln!(
        out,
        r#"<div class="kpi" style="background: linear-gradient(135deg, {} 0%, {} 100%); border-color: {};"><div class="kpi-title">{}</div><div class="kpi-value" style="color: {};">{}</div><div class="kpi-caption{class}">{}</div></div>"#,
        accent.with_alpha(0.1).to_css_rgba(),
        accent.with_alpha(0.05).to_css_rgba(),
        accent.with_alpha(0.3).to_css_rgba(),
        html_escape(&card.title),
        accent.to_hex(),
        html_escape(&card.value),
        html_escape(&card.caption)
    );
}

fn write_chart(out: &mut String, chart: &Chart) {
    let _ = writeln!(out, r#"<figure class="chart" id="{}">"#, html_escape(&chart.id));
    if !chart.is_placeholder() {
        let _ = write!(out, r#"<div class="toolbar">"#);
        for &tool in chart.toolbar.tools() {
            let (key, icon) = tool_key(tool);
            let _ = write!(out, r#"<button type="button" class="tool" data-tool="{key}" title="{}">{icon}</button>"#, tool.label());
        }
        let _ = writeln!(out, "</div>");
    }
    out.push_str(&render_svg(chart));
    let _ = writeln!(out, "\n</figure>");
}

/// Render the whole dashboard. Output depends only on the dashboard value.
pub fn render_html(dashboard: &Dashboard) -> Result<String> {
    let theme = &dashboard.theme;
    let header = &dashboard.header;
    let mut out = String::with_capacity(256 * 1024);

    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>");
    let _ = writeln!(out, r#"<meta charset="UTF-8">"#);
    let _ = writeln!(out, r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
    let _ = writeln!(out, "<title>{}</title>", html_escape(&header.title));
    let _ = writeln!(out, "<style>\n{}{PAGE_CSS}</style>\n</head>\n<body>", root_vars(theme));
    let _ = writeln!(out, r#"<div class="dashboard">"#);

    let _ = writeln!(out, r#"<header class="header"><h1>{}</h1><p>{}</p><div class="badges">"#, html_escape(&header.title), html_escape(&header.subtitle));
    for badge in &header.badges {
        let _ = writeln!(out, r#"<span class="badge" style="color: {};">{}</span>"#, theme.get(badge.accent).to_hex(), html_escape(&badge.text));
    }
    let _ = writeln!(out, "</div></header>");

    let _ = writeln!(out, r#"<section class="kpis">"#);
    for card in &dashboard.kpis {
        write_kpi(&mut out, card, theme);
    }
    let _ = writeln!(out, "</section>");

    for section in &dashboard.sections {
        let _ = writeln!(out, r#"<section class="section"><h2>{}</h2>"#, html_escape(&section.title));
        for row in &section.rows {
            let _ = writeln!(out, r#"<div class="row">"#);
            for chart in &row.charts {
                write_chart(&mut out, chart);
            }
            let _ = writeln!(out, "</div>");
        }
        let _ = writeln!(out, "</section>");
    }

    let _ = writeln!(out, r#"<footer class="footer">{}</footer>"#, html_escape(&dashboard.footer));
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, r#"<div id="dash-tooltip" class="dash-tooltip" hidden></div>"#);

    let spec = PageSpec { charts: dashboard.charts().filter(|c| !c.is_placeholder()).map(interaction_spec).collect() };
    // `</` inside a script element would end it early.
    let json = serde_json::to_string(&spec)?.replace("</", "<\\/");
    let _ = writeln!(out, r#"<script type="application/json" id="dashboard-spec">{json}</script>"#);
    let _ = writeln!(out, "<script>\n{RUNTIME_JS}</script>\n</body>\n</html>");
    Ok(out)
}
