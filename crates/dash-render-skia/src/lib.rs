// File: crates/dash-render-skia/src/lib.rs
// Summary: Headless PNG snapshots of dashboard charts using Skia CPU raster surfaces.

mod text;

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use dash_core::chart::{Annotation, Chart, Dimension, Legend, LegendLocation};
use dash_core::render::{tick_targets, PlotRect, Viewport, LEGEND_WIDTH};
use dash_core::series::{Glyph, LineDash, TextAlign};
use dash_core::{Color, Dashboard};

pub use text::TextShaper;

const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 11.0;
const AXIS_LABEL_FONT: f32 = 12.0;
const LEGEND_FONT: f32 = 12.0;
const LEGEND_ROW: f32 = 20.0;
const SWATCH: f32 = 12.0;
const DASH: [f32; 2] = [6.0, 4.0];
/// Arc segments per full turn when flattening wedges.
const ARC_STEPS: f64 = 96.0;

fn sk(color: Color, alpha: f64) -> skia::Color {
    let a = (alpha * color.alpha_fraction() * 255.0).round().clamp(0.0, 255.0) as u8;
    skia::Color::from_argb(a, color.r, color.g, color.b)
}

fn fill_paint(color: Color, alpha: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk(color, alpha));
    paint
}

fn stroke_paint(color: Color, alpha: f64, width: f64, dash: LineDash) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(sk(color, alpha));
    if dash == LineDash::Dashed {
        paint.set_path_effect(skia::PathEffect::dash(&DASH, 0.0));
    }
    paint
}

fn pt(p: (f64, f64)) -> (f32, f32) {
    (p.0 as f32, p.1 as f32)
}

fn rect_of(r: PlotRect) -> skia::Rect {
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new(font_family: &str) -> Self {
        Self { shaper: TextShaper::new(font_family) }
    }

    /// Render `chart` to a PNG at `path`.
    pub fn render_png(&self, chart: &Chart, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png_bytes(chart)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(chart = %chart.id, path = %path.display(), "png snapshot written");
        Ok(())
    }

    /// Render `chart` into PNG-encoded bytes.
    pub fn render_png_bytes(&self, chart: &Chart) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((chart.width as i32, chart.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), chart);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn paint(&self, canvas: &skia::Canvas, chart: &Chart) {
        let style = &chart.style;
        let vp = Viewport::of(chart);
        let rect = vp.rect;

        canvas.clear(sk(style.border_fill, 1.0));
        canvas.draw_rect(rect_of(rect), &fill_paint(style.background_fill, 1.0));
        self.draw_title(canvas, chart);

        if let Some(message) = &chart.placeholder {
            let center = (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
            self.shaper.draw(canvas, message, pt(center), 14.0, sk(style.tick_label, 1.0), TextAlign::Middle, false);
        } else {
            let (x_target, y_target) = tick_targets(rect);
            let x_ticks = chart.x_axis.ticks(x_target);
            let y_ticks = chart.y_axis.ticks(y_target);
            if style.grid.visible {
                let grid = stroke_paint(style.grid.color, style.grid.alpha, 1.0, LineDash::Solid);
                for (v, _) in &x_ticks {
                    let x = vp.x.to_px(*v) as f32;
                    canvas.draw_line((x, rect.y as f32), (x, rect.bottom() as f32), &grid);
                }
                for (v, _) in &y_ticks {
                    let y = vp.y.to_px(*v) as f32;
                    canvas.draw_line((rect.x as f32, y), (rect.right() as f32, y), &grid);
                }
            }
            self.draw_axes(canvas, chart, &vp, &x_ticks, &y_ticks);

            canvas.save();
            canvas.clip_rect(rect_of(rect), None, Some(true));
            for series in &chart.series {
                self.draw_glyph(canvas, &series.glyph, &vp);
            }
            self.draw_annotations(canvas, chart, &vp);
            canvas.restore();
        }

        canvas.draw_rect(rect_of(rect), &stroke_paint(style.outline, 1.0, 1.0, LineDash::Solid));
        if let Some(legend) = &chart.legend {
            self.draw_legend(canvas, chart, legend, rect);
        }
    }

    fn draw_title(&self, canvas: &skia::Canvas, chart: &Chart) {
        let title = &chart.style.title;
        let y = f64::from(chart.insets.top) / 2.0;
        self.shaper.draw(
            canvas,
            &chart.title,
            (f64::from(chart.insets.left) as f32, y as f32),
            title.font_size as f32 * 4.0 / 3.0,
            sk(title.color, 1.0),
            TextAlign::Start,
            true,
        );
    }

    fn draw_axes(&self, canvas: &skia::Canvas, chart: &Chart, vp: &Viewport, x_ticks: &[(f64, String)], y_ticks: &[(f64, String)]) {
        let style = &chart.style;
        let rect = vp.rect;
        let (l, t, r, b) = (rect.x as f32, rect.y as f32, rect.right() as f32, rect.bottom() as f32);
        let axis = stroke_paint(style.axis_line, 1.0, 1.0, LineDash::Solid);
        let tick = stroke_paint(style.major_tick, 1.0, 1.0, LineDash::Solid);
        let label_color = sk(style.tick_label, 1.0);

        if chart.x_axis.visible {
            canvas.draw_line((l, b), (r, b), &axis);
            let rotation = chart.x_axis.label_orientation;
            for (v, label) in x_ticks {
                let x = vp.x.to_px(*v) as f32;
                canvas.draw_line((x, b), (x, b + TICK_LEN), &tick);
                if rotation.abs() > 1e-9 {
                    canvas.save();
                    canvas.rotate(-rotation.to_degrees() as f32, Some(skia::Point::new(x, b + 12.0)));
                    self.shaper.draw(canvas, label, (x, b + 12.0), TICK_FONT, label_color, TextAlign::End, false);
                    canvas.restore();
                } else {
                    self.shaper.draw(canvas, label, (x, b + 14.0), TICK_FONT, label_color, TextAlign::Middle, false);
                }
            }
            let label_y = chart.height as f32 - 12.0;
            self.shaper.draw(
                canvas,
                &chart.x_axis.label,
                ((l + r) / 2.0, label_y),
                AXIS_LABEL_FONT,
                sk(style.axis_label, 1.0),
                TextAlign::Middle,
                false,
            );
        }
        if chart.y_axis.visible {
            canvas.draw_line((l, t), (l, b), &axis);
            for (v, label) in y_ticks {
                let y = vp.y.to_px(*v) as f32;
                canvas.draw_line((l - TICK_LEN, y), (l, y), &tick);
                self.shaper.draw(canvas, label, (l - 8.0, y), TICK_FONT, label_color, TextAlign::End, false);
            }
            let center = (14.0, (t + b) / 2.0);
            canvas.save();
            canvas.rotate(-90.0, Some(skia::Point::new(center.0, center.1)));
            self.shaper.draw(
                canvas,
                &chart.y_axis.label,
                center,
                AXIS_LABEL_FONT,
                sk(style.axis_label, 1.0),
                TextAlign::Middle,
                false,
            );
            canvas.restore();
        }
    }

    fn draw_glyph(&self, canvas: &skia::Canvas, glyph: &Glyph, vp: &Viewport) {
        match glyph {
            Glyph::Line { points, color, width, alpha, dash } => {
                if points.len() < 2 {
                    return;
                }
                let mut path = skia::Path::new();
                for (i, p) in points.iter().enumerate() {
                    let q = pt(vp.px(*p));
                    if i == 0 {
                        path.move_to(q);
                    } else {
                        path.line_to(q);
                    }
                }
                canvas.draw_path(&path, &stroke_paint(*color, *alpha, *width, *dash));
            }
            Glyph::Markers { points, sizes, color, alpha, line_color } => {
                let body = fill_paint(*color, *alpha);
                let outline = line_color.map(|c| stroke_paint(c, *alpha, 1.0, LineDash::Solid));
                for (p, size) in points.iter().zip(sizes) {
                    let center = pt(vp.px(*p));
                    let radius = (*size / 2.0) as f32;
                    canvas.draw_circle(center, radius, &body);
                    if let Some(outline) = &outline {
                        canvas.draw_circle(center, radius, outline);
                    }
                }
            }
            Glyph::Bars { bars, alpha, line_color } => {
                for bar in bars {
                    let (x0, y0) = vp.px((bar.x0, bar.y1));
                    let (x1, y1) = vp.px((bar.x1, bar.y0));
                    let r = skia::Rect::from_ltrb(x0.min(x1) as f32, y0.min(y1) as f32, x0.max(x1) as f32, y0.max(y1) as f32);
                    canvas.draw_rect(r, &fill_paint(bar.color, *alpha));
                    if let Some(c) = line_color {
                        canvas.draw_rect(r, &stroke_paint(*c, 1.0, 1.0, LineDash::Solid));
                    }
                }
            }
            Glyph::Wedges { center, inner_radius, outer_radius, wedges, alpha, line_color } => {
                let c = vp.px(*center);
                let ppu = vp.x.pixels_per_unit().abs();
                let edge = stroke_paint(*line_color, 1.0, 3.0, LineDash::Solid);
                for w in wedges.iter().filter(|w| w.fraction > 0.0) {
                    let path = wedge_path(c, inner_radius * ppu, outer_radius * ppu, w.start_angle, w.end_angle);
                    canvas.draw_path(&path, &fill_paint(w.color, *alpha));
                    canvas.draw_path(&path, &edge);
                }
            }
            Glyph::Area { xs, lower, upper, color, alpha } => {
                if xs.is_empty() {
                    return;
                }
                let mut path = skia::Path::new();
                for (i, (&x, &y)) in xs.iter().zip(upper).enumerate() {
                    let q = pt(vp.px((x, y)));
                    if i == 0 {
                        path.move_to(q);
                    } else {
                        path.line_to(q);
                    }
                }
                for (&x, &y) in xs.iter().zip(lower).rev() {
                    path.line_to(pt(vp.px((x, y))));
                }
                path.close();
                canvas.draw_path(&path, &fill_paint(*color, *alpha));
            }
            Glyph::Text { items, color, size, align, bold } => {
                for item in items {
                    self.shaper.draw(canvas, &item.text, pt(vp.px((item.x, item.y))), *size as f32, sk(*color, 1.0), *align, *bold);
                }
            }
        }
    }

    fn draw_annotations(&self, canvas: &skia::Canvas, chart: &Chart, vp: &Viewport) {
        let rect = vp.rect;
        for annotation in &chart.annotations {
            match annotation {
                Annotation::Span { location, dimension, color, width, dash } => {
                    let paint = stroke_paint(*color, 1.0, *width, *dash);
                    match dimension {
                        Dimension::Width => {
                            let y = vp.y.to_px(*location) as f32;
                            canvas.draw_line((rect.x as f32, y), (rect.right() as f32, y), &paint);
                        }
                        Dimension::Height => {
                            let x = vp.x.to_px(*location) as f32;
                            canvas.draw_line((x, rect.y as f32), (x, rect.bottom() as f32), &paint);
                        }
                    }
                }
                Annotation::Label { x, y, text, color, font_size } => {
                    let p = pt(vp.px((*x, *y)));
                    self.shaper.draw(canvas, text, p, *font_size as f32, sk(*color, 1.0), TextAlign::Start, false);
                }
            }
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, chart: &Chart, legend: &Legend, rect: PlotRect) {
        if legend.items.is_empty() {
            return;
        }
        let style = &chart.style.legend;
        let longest = legend
            .items
            .iter()
            .map(|it| self.shaper.measure_width(&it.label, LEGEND_FONT))
            .fold(0.0_f32, f32::max);
        let height = legend.items.len() as f32 * LEGEND_ROW + 12.0;
        let (x, y, width) = match legend.location {
            LegendLocation::Right => (chart.width as f32 - LEGEND_WIDTH as f32 + 4.0, rect.y as f32, LEGEND_WIDTH as f32 - 12.0),
            LegendLocation::TopLeft | LegendLocation::TopRight => {
                let width = (longest + SWATCH + 28.0).min(rect.width as f32 - 20.0);
                let x = if legend.location == LegendLocation::TopLeft {
                    rect.x as f32 + 10.0
                } else {
                    rect.right() as f32 - width - 10.0
                };
                (x, rect.y as f32 + 10.0, width)
            }
        };
        let frame = skia::Rect::from_xywh(x, y, width, height);
        canvas.draw_rect(frame, &fill_paint(style.background, style.background_alpha));
        canvas.draw_rect(frame, &stroke_paint(style.border, 1.0, 1.0, LineDash::Solid));
        for (i, item) in legend.items.iter().enumerate() {
            let row_y = y + 6.0 + i as f32 * LEGEND_ROW + LEGEND_ROW / 2.0;
            let swatch = skia::Rect::from_xywh(x + 8.0, row_y - SWATCH / 2.0, SWATCH, SWATCH);
            canvas.draw_rect(swatch, &fill_paint(item.color, 1.0));
            self.shaper.draw(canvas, &item.label, (x + 14.0 + SWATCH, row_y), LEGEND_FONT, sk(style.text, 1.0), TextAlign::Start, false);
        }
    }
}

/// Annular sector between `start` and `end` radians (counter-clockwise, y up in data space).
fn wedge_path(c: (f64, f64), r_in: f64, r_out: f64, start: f64, end: f64) -> skia::Path {
    let steps = (((end - start) / TAU * ARC_STEPS).ceil() as usize).max(2);
    let at = |r: f64, a: f64| pt((c.0 + r * a.cos(), c.1 - r * a.sin()));
    let mut path = skia::Path::new();
    path.move_to(at(r_out, start));
    for k in 1..=steps {
        path.line_to(at(r_out, start + (end - start) * k as f64 / steps as f64));
    }
    for k in (0..=steps).rev() {
        path.line_to(at(r_in, start + (end - start) * k as f64 / steps as f64));
    }
    path.close();
    path
}

/// Write one `<chart id>.png` per chart of `dashboard` into `dir`.
pub fn snapshot_dashboard(dashboard: &Dashboard, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let renderer = SkiaRenderer::new(&dashboard.theme.font_family);
    let mut written = Vec::with_capacity(dashboard.chart_count());
    for chart in dashboard.charts() {
        let path = dir.join(format!("{}.png", chart.id));
        renderer.render_png(chart, &path)?;
        written.push(path);
    }
    Ok(written)
}
