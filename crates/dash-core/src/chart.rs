// File: crates/dash-core/src/chart.rs
// Summary: Chart object: axes, series, legend, toolbar, annotations and style
// block for one dashboard panel. Built once by a builder, rendered once.

use serde::Serialize;

use crate::axis::Axis;
use crate::scale::Range;
use crate::series::{LineDash, Series};
use crate::types::{Color, Insets, HEIGHT, WIDTH};

/// The closed set of chart kinds the dashboard knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    GroupedBar,
    Scatter,
    Donut,
    Area,
    TimeSeries,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::GroupedBar,
        ChartKind::Scatter,
        ChartKind::Donut,
        ChartKind::Area,
        ChartKind::TimeSeries,
    ];

    /// Stable kebab-case name, used for DOM ids and snapshot file names.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::GroupedBar => "grouped-bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Donut => "donut",
            ChartKind::Area => "area",
            ChartKind::TimeSeries => "time-series",
        }
    }
}

/// Cartesian charts get axes and grid; polar ones (donut) do not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    Cartesian,
    Polar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Pan,
    BoxZoom,
    WheelZoom,
    Reset,
    Save,
    Hover,
    LassoSelect,
    Crosshair,
}

impl Tool {
    /// Interaction set every chart carries.
    pub const BASE: [Tool; 5] = [Tool::Pan, Tool::BoxZoom, Tool::WheelZoom, Tool::Reset, Tool::Save];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pan => "Pan",
            Tool::BoxZoom => "Box zoom",
            Tool::WheelZoom => "Wheel zoom",
            Tool::Reset => "Reset",
            Tool::Save => "Save",
            Tool::Hover => "Hover",
            Tool::LassoSelect => "Lasso select",
            Tool::Crosshair => "Crosshair",
        }
    }
}

/// Ordered tool set; inserting a tool twice keeps the first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Toolbar {
    tools: Vec<Tool>,
}

impl Toolbar {
    pub fn insert(&mut self, tool: Tool) {
        if !self.tools.contains(&tool) {
            self.tools.push(tool);
        }
    }

    pub fn contains(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Put `base` first (in order), followed by the remaining tools in their current order.
    pub fn merge_base(&mut self, base: &[Tool]) {
        let mut merged: Vec<Tool> = Vec::with_capacity(base.len() + self.tools.len());
        for &t in base.iter().chain(self.tools.iter()) {
            if !merged.contains(&t) {
                merged.push(t);
            }
        }
        self.tools = merged;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverMode {
    /// Tooltip for the item under the pointer.
    Mouse,
    /// Tooltip for the items nearest the pointer's x, across series.
    VLine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    None,
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    TopLeft,
    TopRight,
    /// Outside the plot area, right of it.
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    /// Indices into `Chart::series` toggled by this entry.
    pub series: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub items: Vec<LegendItem>,
    pub location: LegendLocation,
    pub click_policy: ClickPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Spans the plot horizontally at a y location.
    Width,
    /// Spans the plot vertically at an x location.
    Height,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    Span { location: f64, dimension: Dimension, color: Color, width: f64, dash: LineDash },
    Label { x: f64, y: f64, text: String, color: Color, font_size: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridStyle {
    pub color: Color,
    pub alpha: f64,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TitleStyle {
    pub color: Color,
    /// Points.
    pub font_size: f64,
    pub font_family: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendStyle {
    pub background: Color,
    pub background_alpha: f64,
    pub border: Color,
    pub text: Color,
}

/// Every visual property the style applier owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartStyle {
    pub border_fill: Color,
    pub background_fill: Color,
    pub outline: Color,
    pub grid: GridStyle,
    pub axis_line: Color,
    pub major_tick: Color,
    pub minor_ticks: bool,
    pub tick_label: Color,
    pub axis_label: Color,
    pub title: TitleStyle,
    pub legend: LegendStyle,
}

impl Default for ChartStyle {
    /// Unthemed defaults; builders always run the style applier over these.
    fn default() -> Self {
        let ink = Color::rgb(68, 68, 68);
        let paper = Color::rgb(255, 255, 255);
        let rule = Color::rgb(229, 229, 229);
        Self {
            border_fill: paper,
            background_fill: paper,
            outline: rule,
            grid: GridStyle { color: rule, alpha: 1.0, visible: true },
            axis_line: ink,
            major_tick: ink,
            minor_ticks: true,
            tick_label: ink,
            axis_label: ink,
            title: TitleStyle { color: ink, font_size: 13.0, font_family: "sans-serif".into() },
            legend: LegendStyle { background: paper, background_alpha: 0.95, border: rule, text: ink },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    /// DOM id, unique within a dashboard.
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub frame: Frame,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub legend: Option<Legend>,
    pub toolbar: Toolbar,
    pub hover: Option<HoverMode>,
    pub style: ChartStyle,
    /// Charts sharing a group pan and zoom their x ranges together.
    pub link_group: Option<String>,
    /// Message drawn instead of data when the input was empty.
    pub placeholder: Option<String>,
}

impl Chart {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            id: format!("chart-{}", kind.slug()),
            kind,
            title: title.into(),
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            frame: Frame::Cartesian,
            x_axis: Axis::new("", 0.0, 1.0),
            y_axis: Axis::new("", 0.0, 1.0),
            series: Vec::new(),
            annotations: Vec::new(),
            legend: None,
            toolbar: Toolbar::default(),
            hover: None,
            style: ChartStyle::default(),
            link_group: None,
            placeholder: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Push a series and return its index (for legend wiring).
    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    /// Build a legend from the named series, one entry per distinct name.
    pub fn legend_from_series(&mut self, location: LegendLocation) {
        let mut items: Vec<LegendItem> = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            let (Some(name), Some(color)) = (&s.name, s.glyph.swatch()) else { continue };
            match items.iter_mut().find(|it| &it.label == name) {
                Some(item) => item.series.push(i),
                None => items.push(LegendItem { label: name.clone(), color, series: vec![i] }),
            }
        }
        self.legend = (!items.is_empty()).then(|| Legend { items, location, click_policy: ClickPolicy::None });
    }

    /// Total glyph items across series (bars, wedges, points...).
    pub fn glyph_count(&self) -> usize {
        self.series.iter().map(|s| s.glyph.item_count()).sum()
    }

    pub fn legend_len(&self) -> usize {
        self.legend.as_ref().map_or(0, |l| l.items.len())
    }

    /// Data extents over all series, padded; degenerate spans are opened up.
    pub fn data_ranges(&self, pad_frac: f64) -> (Range, Range) {
        let pts: Vec<(f64, f64)> = self.series.iter().flat_map(|s| s.glyph.extent_points()).collect();
        (
            Range::covering(pts.iter().map(|p| p.0), pad_frac),
            Range::covering(pts.iter().map(|p| p.1), pad_frac),
        )
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}
