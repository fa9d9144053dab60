// File: crates/dash-core/src/builders/bar.rs
// Summary: Horizontal bar chart, one bar per category with a value label beside it.

use super::{placeholder, require_fields, tooltip, Field};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind, HoverMode, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::error::Result;
use crate::scale::{Range, MIN_SPAN};
use crate::series::{Bar, Glyph, Series, TextAlign, TextItem};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const BAR_HEIGHT: f64 = 0.6;
const BAR_ALPHA: f64 = 0.85;
const LABEL_SIZE: f64 = 11.0;
/// Room right of the longest bar for its label, as a share of the value span.
const LABEL_ROOM: f64 = 0.18;
const LABEL_GAP: f64 = 0.02;
/// Region names sit left of the plot.
const INSETS: Insets = Insets::new(112, 24, 44, 56);

#[derive(Clone, Debug, PartialEq)]
pub struct BarSpec {
    pub title: String,
    pub category: String,
    pub value: String,
    pub x_label: String,
    pub value_format: TickFormat,
    /// Order bars by descending value instead of input order.
    pub sort_by_value: bool,
    pub tooltip: Vec<Field>,
}

impl Default for BarSpec {
    fn default() -> Self {
        Self {
            title: "Revenue by Region".into(),
            category: "region".into(),
            value: "revenue".into(),
            x_label: "Revenue ($)".into(),
            value_format: TickFormat::Currency,
            sort_by_value: false,
            tooltip: vec![
                Field::new("region", "Region", TickFormat::Plain),
                Field::new("revenue", "Revenue", TickFormat::Currency),
                Field::new("growth", "Growth", TickFormat::Percent),
                Field::new("customers", "Customers", TickFormat::Thousands),
            ],
        }
    }
}

impl BarSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::Bar, &self.title, (WIDTH, HEIGHT), theme));
        }
        data.conform(&[(self.category.as_str(), ColumnType::Text), (self.value.as_str(), ColumnType::Number)])?;
        require_fields(data, &self.tooltip)?;

        let names = data.texts(&self.category)?;
        let values = data.numbers(&self.value)?;

        let mut order: Vec<usize> = (0..data.len()).collect();
        if self.sort_by_value {
            order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
        }

        let value_range = Range::covering(values.iter().copied(), 0.0).including(0.0);
        let span = if value_range.span() < MIN_SPAN { 1.0 } else { value_range.span() };

        // First bar in `order` sits on top.
        let n = order.len();
        let mut bars = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);
        let mut factors = Vec::with_capacity(n);
        let mut tips = Vec::with_capacity(n);
        for (i, &row) in order.iter().enumerate() {
            let center = (n - i) as f64 - 0.5;
            let v = values[row];
            bars.push(Bar {
                x0: v.min(0.0),
                x1: v.max(0.0),
                y0: center - BAR_HEIGHT / 2.0,
                y1: center + BAR_HEIGHT / 2.0,
                color: theme.accent(i),
            });
            labels.push(TextItem { x: v.max(0.0) + span * LABEL_GAP, y: center, text: self.value_format.apply(v) });
            factors.push((center, names[row].clone()));
            tips.push(tooltip(data, &self.tooltip, row)?);
        }

        let mut chart = Chart::new(ChartKind::Bar, &self.title);
        chart.insets = INSETS;
        chart.add_series(
            Series::new(Glyph::Bars { bars, alpha: BAR_ALPHA, line_color: Some(theme.text) }).with_tooltips(tips),
        );
        chart.add_series(Series::new(Glyph::Text {
            items: labels,
            color: theme.text,
            size: LABEL_SIZE,
            align: TextAlign::Start,
            bold: false,
        }));

        chart.x_axis = Axis::new(&self.x_label, value_range.start, value_range.end + span * LABEL_ROOM)
            .with_format(self.value_format);
        chart.y_axis = Axis::categorical("", Range::new(0.0, n as f64), factors);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::Mouse);
        Ok(styled(chart, theme))
    }
}
