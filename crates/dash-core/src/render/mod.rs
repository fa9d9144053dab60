// File: crates/dash-core/src/render/mod.rs
// Summary: Chart rendering: plot-area geometry shared by the SVG writer and the
// interaction spec, plus the HTML document writer.

mod html;
mod svg;

pub use html::{interaction_spec, render_html, RUNTIME_JS};
pub use svg::{render_svg, tick_targets};

use serde::Serialize;

use crate::chart::{Chart, Frame, LegendLocation};
use crate::scale::{LinearScale, Range};

/// Width reserved right of the plot for an outside legend.
pub const LEGEND_WIDTH: f64 = 150.0;

/// Plot area in SVG pixels (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Data-to-pixel mapping for one chart's initial view.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub rect: PlotRect,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Viewport {
    pub fn of(chart: &Chart) -> Self {
        let insets = chart.insets;
        let legend = match &chart.legend {
            Some(l) if l.location == LegendLocation::Right => LEGEND_WIDTH,
            _ => 0.0,
        };
        let rect = PlotRect {
            x: f64::from(insets.left),
            y: f64::from(insets.top),
            width: (f64::from(chart.width) - f64::from(insets.hsum()) - legend).max(1.0),
            height: (f64::from(chart.height) - f64::from(insets.vsum())).max(1.0),
        };
        let (xr, yr) = match chart.frame {
            Frame::Cartesian => (chart.x_axis.range, chart.y_axis.range),
            Frame::Polar => uniform(chart.x_axis.range, chart.y_axis.range, rect),
        };
        Self {
            rect,
            x: LinearScale::new(xr, rect.x, rect.right()),
            y: LinearScale::new(yr, rect.bottom(), rect.y),
        }
    }

    pub fn px(&self, p: (f64, f64)) -> (f64, f64) {
        (self.x.to_px(p.0), self.y.to_px(p.1))
    }
}

/// Widen the narrower range so one data unit spans the same pixels on both axes.
fn uniform(x: Range, y: Range, rect: PlotRect) -> (Range, Range) {
    let ppu = (rect.width / x.span().max(f64::EPSILON)).min(rect.height / y.span().max(f64::EPSILON));
    let widen = |r: Range, px: f64| {
        let center = (r.start + r.end) / 2.0;
        let half = px / ppu / 2.0;
        Range::new(center - half, center + half)
    };
    (widen(x, rect.width), widen(y, rect.height))
}
