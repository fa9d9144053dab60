// File: crates/dash-core/src/render/svg.rs
// Summary: Chart -> standalone SVG string (static first paint; the page runtime re-ticks on zoom).

use std::f64::consts::PI;
use std::fmt::Write;

use super::{PlotRect, Viewport, LEGEND_WIDTH};
use crate::axis::Axis;
use crate::chart::{Annotation, Chart, Dimension, Legend, LegendLocation};
use crate::format::{coord, html_escape};
use crate::series::{Glyph, LineDash, TextAlign};
use crate::types::Color;

const TICK_LEN: f64 = 5.0;
const TICK_FONT: f64 = 11.0;
const AXIS_LABEL_FONT: f64 = 12.0;
const LEGEND_FONT: f64 = 12.0;
const LEGEND_ROW: f64 = 20.0;
const SWATCH: f64 = 12.0;
const DASH: &str = "6 4";
/// Horizontal/vertical spans reach this far past the plot so pans never reveal their ends.
const SPAN_REACH: f64 = 100_000.0;
const NON_SCALING: &str = r#"vector-effect="non-scaling-stroke""#;

/// Target tick counts for a plot area.
pub fn tick_targets(rect: PlotRect) -> (usize, usize) {
    (((rect.width / 90.0) as usize).max(2), ((rect.height / 50.0) as usize).max(2))
}

fn fill(color: Color, alpha: f64) -> String {
    let opacity = alpha * color.alpha_fraction();
    if opacity >= 1.0 {
        format!(r#"fill="{}""#, color.to_hex())
    } else {
        format!(r#"fill="{}" fill-opacity="{}""#, color.to_hex(), coord(opacity))
    }
}

fn stroke(color: Color, alpha: f64, width: f64) -> String {
    let opacity = alpha * color.alpha_fraction();
    let mut s = format!(r#"stroke="{}" stroke-width="{}""#, color.to_hex(), coord(width));
    if opacity < 1.0 {
        let _ = write!(s, r#" stroke-opacity="{}""#, coord(opacity));
    }
    s
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Middle => "middle",
        TextAlign::End => "end",
    }
}

/// Render `chart` as an SVG document fragment.
pub fn render_svg(chart: &Chart) -> String {
    let vp = Viewport::of(chart);
    let rect = vp.rect;
    let style = &chart.style;
    let id = html_escape(&chart.id);
    let mut out = String::with_capacity(16 * 1024);

    let _ = writeln!(
        out,
        r#"<svg id="{id}-svg" class="chart-svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="{font}">"#,
        w = chart.width,
        h = chart.height,
        font = html_escape(&style.title.font_family),
    );
    let _ = writeln!(out, "<title>{}</title>", html_escape(&chart.title));
    let _ = writeln!(
        out,
        r#"<rect class="border" x="0" y="0" width="{}" height="{}" {}/>"#,
        chart.width,
        chart.height,
        fill(style.border_fill, 1.0)
    );
    let _ = writeln!(
        out,
        r#"<defs><clipPath id="{id}-clip"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        coord(rect.x),
        coord(rect.y),
        coord(rect.width),
        coord(rect.height)
    );
    let _ = writeln!(
        out,
        r#"<rect class="plot-bg" x="{}" y="{}" width="{}" height="{}" {} {}/>"#,
        coord(rect.x),
        coord(rect.y),
        coord(rect.width),
        coord(rect.height),
        fill(style.background_fill, 1.0),
        stroke(style.outline, 1.0, 1.0)
    );
    write_title(&mut out, chart, rect);

    if let Some(message) = &chart.placeholder {
        let _ = writeln!(
            out,
            r#"<text class="placeholder" x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="14" {}>{}</text>"#,
            coord(rect.x + rect.width / 2.0),
            coord(rect.y + rect.height / 2.0),
            fill(style.tick_label, 0.7),
            html_escape(message)
        );
        out.push_str("</svg>");
        return out;
    }

    let (x_target, y_target) = tick_targets(rect);
    let x_ticks = chart.x_axis.ticks(x_target);
    let y_ticks = chart.y_axis.ticks(y_target);

    if style.grid.visible {
        write_grid(&mut out, chart, &vp, &x_ticks, &y_ticks);
    }
    if chart.x_axis.visible {
        write_x_axis(&mut out, chart, &vp, &x_ticks);
    }
    if chart.y_axis.visible {
        write_y_axis(&mut out, chart, &vp, &y_ticks);
    }

    write_data(&mut out, chart, &vp);
    write_labels(&mut out, chart, &vp);
    if let Some(legend) = &chart.legend {
        write_legend(&mut out, chart, legend, rect);
    }
    let _ = writeln!(out, r#"<g class="interaction"></g>"#);
    out.push_str("</svg>");
    out
}

fn write_title(out: &mut String, chart: &Chart, rect: PlotRect) {
    let title = &chart.style.title;
    // Points to pixels.
    let size = title.font_size * 4.0 / 3.0;
    let _ = writeln!(
        out,
        r#"<text class="chart-title" x="{}" y="{}" font-size="{}" font-weight="600" {}>{}</text>"#,
        coord(rect.x),
        coord((rect.y - 14.0).max(size)),
        coord(size),
        fill(title.color, 1.0),
        html_escape(&chart.title)
    );
}

fn write_grid(out: &mut String, chart: &Chart, vp: &Viewport, x_ticks: &[(f64, String)], y_ticks: &[(f64, String)]) {
    let grid = &chart.style.grid;
    let rect = vp.rect;
    let paint = stroke(grid.color, grid.alpha, 1.0);
    let _ = writeln!(out, r#"<g class="x-grid" {paint}>"#);
    for (v, _) in x_ticks {
        let px = coord(vp.x.to_px(*v));
        let _ = writeln!(out, r#"<line x1="{px}" y1="{}" x2="{px}" y2="{}"/>"#, coord(rect.y), coord(rect.bottom()));
    }
    let _ = writeln!(out, "</g>");
    let _ = writeln!(out, r#"<g class="y-grid" {paint}>"#);
    for (v, _) in y_ticks {
        let py = coord(vp.y.to_px(*v));
        let _ = writeln!(out, r#"<line x1="{}" y1="{py}" x2="{}" y2="{py}"/>"#, coord(rect.x), coord(rect.right()));
    }
    let _ = writeln!(out, "</g>");
}

fn write_x_axis(out: &mut String, chart: &Chart, vp: &Viewport, ticks: &[(f64, String)]) {
    let style = &chart.style;
    let rect = vp.rect;
    let axis: &Axis = &chart.x_axis;
    let y = rect.bottom();
    let _ = writeln!(out, r#"<g class="x-axis">"#);
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" {}/>"#,
        coord(rect.x),
        coord(rect.right()),
        stroke(style.axis_line, 1.0, 1.0),
        y = coord(y)
    );
    let _ = writeln!(out, r#"<g class="x-ticks" font-size="{TICK_FONT}" {}>"#, fill(style.tick_label, 1.0));
    for (v, label) in ticks {
        let px = vp.x.to_px(*v);
        let ly = y + TICK_LEN + TICK_FONT + 2.0;
        let _ = writeln!(
            out,
            r#"<line x1="{px}" y1="{}" x2="{px}" y2="{}" {}/>"#,
            coord(y),
            coord(y + TICK_LEN),
            stroke(style.major_tick, 1.0, 1.0),
            px = coord(px)
        );
        if axis.label_orientation.abs() > f64::EPSILON {
            let _ = writeln!(
                out,
                r#"<text x="{x}" y="{y}" text-anchor="end" transform="rotate({} {x} {y})">{}</text>"#,
                coord(-axis.label_orientation.to_degrees()),
                html_escape(label),
                x = coord(px),
                y = coord(ly - TICK_FONT / 2.0)
            );
        } else {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                coord(px),
                coord(ly),
                html_escape(label)
            );
        }
    }
    let _ = writeln!(out, "</g>");
    if !axis.label.is_empty() {
        let _ = writeln!(
            out,
            r#"<text class="axis-label" x="{}" y="{}" text-anchor="middle" font-size="{AXIS_LABEL_FONT}" {}>{}</text>"#,
            coord(rect.x + rect.width / 2.0),
            coord(f64::from(chart.height) - 8.0),
            fill(style.axis_label, 1.0),
            html_escape(&axis.label)
        );
    }
    let _ = writeln!(out, "</g>");
}

fn write_y_axis(out: &mut String, chart: &Chart, vp: &Viewport, ticks: &[(f64, String)]) {
    let style = &chart.style;
    let rect = vp.rect;
    let axis = &chart.y_axis;
    let x = rect.x;
    let _ = writeln!(out, r#"<g class="y-axis">"#);
    let _ = writeln!(
        out,
        r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}" {}/>"#,
        coord(rect.y),
        coord(rect.bottom()),
        stroke(style.axis_line, 1.0, 1.0),
        x = coord(x)
    );
    let _ = writeln!(out, r#"<g class="y-ticks" font-size="{TICK_FONT}" {}>"#, fill(style.tick_label, 1.0));
    for (v, label) in ticks {
        let py = coord(vp.y.to_px(*v));
        let _ = writeln!(
            out,
            r#"<line x1="{}" y1="{py}" x2="{}" y2="{py}" {}/>"#,
            coord(x - TICK_LEN),
            coord(x),
            stroke(style.major_tick, 1.0, 1.0)
        );
        let _ = writeln!(
            out,
            r#"<text x="{}" y="{py}" text-anchor="end" dominant-baseline="central">{}</text>"#,
            coord(x - TICK_LEN - 3.0),
            html_escape(label)
        );
    }
    let _ = writeln!(out, "</g>");
    if !axis.label.is_empty() {
        let cy = coord(rect.y + rect.height / 2.0);
        let _ = writeln!(
            out,
            r#"<text class="axis-label" x="14" y="{cy}" text-anchor="middle" dominant-baseline="central" transform="rotate(-90 14 {cy})" font-size="{AXIS_LABEL_FONT}" {}>{}</text>"#,
            fill(style.axis_label, 1.0),
            html_escape(&axis.label)
        );
    }
    let _ = writeln!(out, "</g>");
}

fn path_through(points: impl IntoIterator<Item = (f64, f64)>) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        let _ = write!(d, "{}{} {}", if i == 0 { "M" } else { "L" }, coord(x), coord(y));
    }
    d
}

/// Annular sector path; angles are counter-clockwise in data space, so y flips.
fn wedge_path(c: (f64, f64), r_in: f64, r_out: f64, start: f64, end: f64) -> String {
    let at = |r: f64, a: f64| (c.0 + r * a.cos(), c.1 - r * a.sin());
    let large = u8::from(end - start > PI);
    let (o0, o1, i1, i0) = (at(r_out, start), at(r_out, end), at(r_in, end), at(r_in, start));
    format!(
        "M{} {}A{r} {r} 0 {large} 0 {} {}L{} {}A{ri} {ri} 0 {large} 1 {} {}Z",
        coord(o0.0),
        coord(o0.1),
        coord(o1.0),
        coord(o1.1),
        coord(i1.0),
        coord(i1.1),
        coord(i0.0),
        coord(i0.1),
        r = coord(r_out),
        ri = coord(r_in)
    )
}

fn write_data(out: &mut String, chart: &Chart, vp: &Viewport) {
    let _ = writeln!(out, r#"<g clip-path="url(#{}-clip)">"#, html_escape(&chart.id));
    let _ = writeln!(out, r#"<g class="data" transform="matrix(1 0 0 1 0 0)">"#);
    for (i, series) in chart.series.iter().enumerate() {
        if matches!(series.glyph, Glyph::Text { .. }) {
            continue;
        }
        let _ = writeln!(out, r#"<g class="series" data-series="{i}">"#);
        write_glyph(out, &series.glyph, vp);
        let _ = writeln!(out, "</g>");
    }
    for annotation in &chart.annotations {
        if let Annotation::Span { location, dimension, color, width, dash } = annotation {
            let rect = vp.rect;
            let (x1, y1, x2, y2) = match dimension {
                Dimension::Width => {
                    let y = vp.y.to_px(*location);
                    (rect.x - SPAN_REACH, y, rect.right() + SPAN_REACH, y)
                }
                Dimension::Height => {
                    let x = vp.x.to_px(*location);
                    (x, rect.y - SPAN_REACH, x, rect.bottom() + SPAN_REACH)
                }
            };
            let dash = if *dash == LineDash::Dashed { format!(r#" stroke-dasharray="{DASH}""#) } else { String::new() };
            let _ = writeln!(
                out,
                r#"<line class="span" x1="{}" y1="{}" x2="{}" y2="{}" {}{dash} {NON_SCALING}/>"#,
                coord(x1),
                coord(y1),
                coord(x2),
                coord(y2),
                stroke(*color, 1.0, *width)
            );
        }
    }
    let _ = writeln!(out, "</g>\n</g>");
}

fn write_glyph(out: &mut String, glyph: &Glyph, vp: &Viewport) {
    match glyph {
        Glyph::Line { points, color, width, alpha, dash } => {
            let dash = if *dash == LineDash::Dashed { format!(r#" stroke-dasharray="{DASH}""#) } else { String::new() };
            let _ = writeln!(
                out,
                r#"<path class="line" d="{}" fill="none" {}{dash} stroke-linejoin="round" {NON_SCALING}/>"#,
                path_through(points.iter().map(|p| vp.px(*p))),
                stroke(*color, *alpha, *width)
            );
        }
        Glyph::Markers { points, sizes, color, alpha, line_color } => {
            // Zero-length round-capped strokes stay circular under any zoom.
            for (k, (p, size)) in points.iter().zip(sizes).enumerate() {
                let (x, y) = vp.px(*p);
                let d = format!("M{} {}h0", coord(x), coord(y));
                let _ = write!(out, r#"<g class="item" data-i="{k}">"#);
                if let Some(lc) = line_color {
                    let _ = write!(
                        out,
                        r#"<path d="{d}" {} stroke-linecap="round" {NON_SCALING}/>"#,
                        stroke(*lc, *alpha, size + 1.0)
                    );
                }
                let _ = writeln!(
                    out,
                    r#"<path d="{d}" {} stroke-linecap="round" {NON_SCALING}/></g>"#,
                    stroke(*color, *alpha, *size)
                );
            }
        }
        Glyph::Bars { bars, alpha, line_color } => {
            for (k, bar) in bars.iter().enumerate() {
                let (x0, y0) = vp.px((bar.x0, bar.y1));
                let (x1, y1) = vp.px((bar.x1, bar.y0));
                let outline = line_color.map_or_else(String::new, |c| format!(" {} {NON_SCALING}", stroke(c, 1.0, 1.0)));
                let _ = writeln!(
                    out,
                    r#"<rect class="item" data-i="{k}" x="{}" y="{}" width="{}" height="{}" {}{outline}/>"#,
                    coord(x0.min(x1)),
                    coord(y0.min(y1)),
                    coord((x1 - x0).abs()),
                    coord((y1 - y0).abs()),
                    fill(bar.color, *alpha)
                );
            }
        }
        Glyph::Wedges { center, inner_radius, outer_radius, wedges, alpha, line_color } => {
            let c = vp.px(*center);
            let ppu = vp.x.pixels_per_unit().abs();
            for (k, w) in wedges.iter().enumerate() {
                if w.fraction <= 0.0 {
                    continue;
                }
                // A full ring is drawn as two half sectors; a single arc cannot close on itself.
                let d = if w.end_angle - w.start_angle >= 2.0 * PI - 1e-9 {
                    let mid = w.start_angle + PI;
                    format!(
                        "{}{}",
                        wedge_path(c, inner_radius * ppu, outer_radius * ppu, w.start_angle, mid),
                        wedge_path(c, inner_radius * ppu, outer_radius * ppu, mid, w.end_angle)
                    )
                } else {
                    wedge_path(c, inner_radius * ppu, outer_radius * ppu, w.start_angle, w.end_angle)
                };
                let _ = writeln!(
                    out,
                    r#"<path class="item" data-i="{k}" d="{d}" {} {} {NON_SCALING}/>"#,
                    fill(w.color, *alpha),
                    stroke(*line_color, 1.0, 3.0)
                );
            }
        }
        Glyph::Area { xs, lower, upper, color, alpha } => {
            let top = xs.iter().zip(upper).map(|(&x, &y)| vp.px((x, y)));
            let bottom = xs.iter().zip(lower).rev().map(|(&x, &y)| vp.px((x, y)));
            let _ = writeln!(
                out,
                r#"<path class="area" d="{}Z" {} stroke="none"/>"#,
                path_through(top.chain(bottom)),
                fill(*color, *alpha)
            );
        }
        Glyph::Text { .. } => {}
    }
}

fn write_labels(out: &mut String, chart: &Chart, vp: &Viewport) {
    let _ = writeln!(out, r#"<g class="labels" clip-path="url(#{}-clip)">"#, html_escape(&chart.id));
    for (i, series) in chart.series.iter().enumerate() {
        let Glyph::Text { items, color, size, align, bold } = &series.glyph else { continue };
        let _ = writeln!(
            out,
            r#"<g class="series" data-series="{i}" font-size="{}" text-anchor="{}"{} {}>"#,
            coord(*size),
            anchor(*align),
            if *bold { r#" font-weight="bold""# } else { "" },
            fill(*color, 1.0)
        );
        for item in items {
            let (x, y) = vp.px((item.x, item.y));
            let _ = writeln!(
                out,
                r#"<text x="{x}" y="{y}" data-bx="{x}" data-by="{y}" dominant-baseline="central">{}</text>"#,
                html_escape(&item.text),
                x = coord(x),
                y = coord(y)
            );
        }
        let _ = writeln!(out, "</g>");
    }
    for annotation in &chart.annotations {
        if let Annotation::Label { x, y, text, color, font_size } = annotation {
            let (px, py) = vp.px((*x, *y));
            let _ = writeln!(
                out,
                r#"<text class="annotation" x="{x}" y="{y}" data-bx="{x}" data-by="{y}" font-size="{}" {}>{}</text>"#,
                coord(*font_size),
                fill(*color, 1.0),
                html_escape(text),
                x = coord(px),
                y = coord(py)
            );
        }
    }
    let _ = writeln!(out, "</g>");
}

fn write_legend(out: &mut String, chart: &Chart, legend: &Legend, rect: PlotRect) {
    let style = &chart.style.legend;
    let longest = legend.items.iter().map(|it| it.label.chars().count()).max().unwrap_or(0);
    let height = legend.items.len() as f64 * LEGEND_ROW + 12.0;
    let (x, y, width) = match legend.location {
        LegendLocation::Right => (f64::from(chart.width) - LEGEND_WIDTH + 4.0, rect.y, LEGEND_WIDTH - 12.0),
        LegendLocation::TopLeft | LegendLocation::TopRight => {
            let width = (longest as f64 * LEGEND_FONT * 0.6 + SWATCH + 28.0).min(rect.width - 20.0);
            let x = if legend.location == LegendLocation::TopLeft { rect.x + 10.0 } else { rect.right() - width - 10.0 };
            (x, rect.y + 10.0, width)
        }
    };
    let _ = writeln!(out, r#"<g class="legend" font-size="{LEGEND_FONT}">"#);
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="4" {} {}/>"#,
        coord(x),
        coord(y),
        coord(width),
        coord(height),
        fill(style.background, style.background_alpha),
        stroke(style.border, 1.0, 1.0)
    );
    for (j, item) in legend.items.iter().enumerate() {
        let row_y = y + 6.0 + j as f64 * LEGEND_ROW;
        let series = item.series.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        let _ = writeln!(
            out,
            r#"<g class="legend-item" data-legend="{j}" data-series="{series}"><rect x="{}" y="{}" width="{SWATCH}" height="{SWATCH}" rx="2" {}/><text x="{}" y="{}" dominant-baseline="central" {}>{}</text></g>"#,
            coord(x + 10.0),
            coord(row_y + (LEGEND_ROW - SWATCH) / 2.0),
            fill(item.color, 1.0),
            coord(x + 10.0 + SWATCH + 8.0),
            coord(row_y + LEGEND_ROW / 2.0),
            fill(style.text, 1.0),
            html_escape(&item.label)
        );
    }
    let _ = writeln!(out, "</g>");
}
