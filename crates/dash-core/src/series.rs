// File: crates/dash-core/src/series.rs
// Summary: Series model: one glyph (lines, markers, bars, wedges, areas, text) plus
// its legend name and per-item hover rows.

use serde::Serialize;

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// Axis-aligned rectangle in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: Color,
}

/// Annular wedge; angles in radians, counter-clockwise from +x.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Wedge {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the whole ring, 0..=1.
    pub fraction: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextItem {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Glyph {
    Line {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
        alpha: f64,
        dash: LineDash,
    },
    Markers {
        points: Vec<(f64, f64)>,
        /// Diameter in pixels, one per point.
        sizes: Vec<f64>,
        color: Color,
        alpha: f64,
        line_color: Option<Color>,
    },
    Bars {
        bars: Vec<Bar>,
        alpha: f64,
        line_color: Option<Color>,
    },
    Wedges {
        center: (f64, f64),
        inner_radius: f64,
        outer_radius: f64,
        wedges: Vec<Wedge>,
        alpha: f64,
        line_color: Color,
    },
    /// Filled band between `lower` and `upper`, sharing `xs`.
    Area {
        xs: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        color: Color,
        alpha: f64,
    },
    Text {
        items: Vec<TextItem>,
        color: Color,
        /// Font size in pixels.
        size: f64,
        align: TextAlign,
        bold: bool,
    },
}

impl Glyph {
    /// Number of hoverable/selectable items this glyph draws.
    pub fn item_count(&self) -> usize {
        match self {
            Glyph::Line { points, .. } | Glyph::Markers { points, .. } => points.len(),
            Glyph::Bars { bars, .. } => bars.len(),
            Glyph::Wedges { wedges, .. } => wedges.len(),
            Glyph::Area { xs, .. } => xs.len(),
            Glyph::Text { items, .. } => items.len(),
        }
    }

    /// Representative color, used for legend swatches.
    pub fn swatch(&self) -> Option<Color> {
        match self {
            Glyph::Line { color, .. }
            | Glyph::Markers { color, .. }
            | Glyph::Area { color, .. }
            | Glyph::Text { color, .. } => Some(*color),
            Glyph::Bars { bars, .. } => bars.first().map(|b| b.color),
            Glyph::Wedges { wedges, .. } => wedges.first().map(|w| w.color),
        }
    }

    /// Every (x, y) data coordinate the glyph touches; feeds range computation.
    pub fn extent_points(&self) -> Vec<(f64, f64)> {
        match self {
            Glyph::Line { points, .. } | Glyph::Markers { points, .. } => points.clone(),
            Glyph::Bars { bars, .. } => bars.iter().flat_map(|b| [(b.x0, b.y0), (b.x1, b.y1)]).collect(),
            Glyph::Wedges { center, outer_radius, .. } => vec![
                (center.0 - outer_radius, center.1 - outer_radius),
                (center.0 + outer_radius, center.1 + outer_radius),
            ],
            Glyph::Area { xs, lower, upper, .. } => xs
                .iter()
                .zip(lower.iter().zip(upper))
                .flat_map(|(&x, (&lo, &hi))| [(x, lo), (x, hi)])
                .collect(),
            Glyph::Text { items, .. } => items.iter().map(|t| (t.x, t.y)).collect(),
        }
    }
}

/// Label/value rows shown when hovering one glyph item.
pub type Tooltip = Vec<(String, String)>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    /// Legend label; unnamed series (value labels, captions) stay out of the legend.
    pub name: Option<String>,
    pub glyph: Glyph,
    /// One entry per glyph item, or empty when the series is not hoverable.
    pub tooltips: Vec<Tooltip>,
}

impl Series {
    pub fn new(glyph: Glyph) -> Self {
        Self { name: None, glyph, tooltips: Vec::new() }
    }

    pub fn named(name: impl Into<String>, glyph: Glyph) -> Self {
        Self { name: Some(name.into()), glyph, tooltips: Vec::new() }
    }

    pub fn with_tooltips(mut self, tooltips: Vec<Tooltip>) -> Self {
        self.tooltips = tooltips;
        self
    }
}
