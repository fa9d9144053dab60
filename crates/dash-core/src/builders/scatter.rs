// File: crates/dash-core/src/builders/scatter.rs
// Summary: Categorical scatter plot with per-point marker sizes and lasso selection.

use super::{group_rows, placeholder, require_fields, tooltip, Field};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind, HoverMode, LegendLocation, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::error::Result;
use crate::series::{Glyph, Series};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

const MARKER_ALPHA: f64 = 0.7;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x: String,
    pub y: String,
    /// Marker diameter in pixels.
    pub size: String,
    pub category: String,
    pub x_label: String,
    pub y_label: String,
    pub tooltip: Vec<Field>,
}

impl Default for ScatterSpec {
    fn default() -> Self {
        Self {
            title: "Multi-dimensional Data Analysis".into(),
            x: "x".into(),
            y: "y".into(),
            size: "size".into(),
            category: "category".into(),
            x_label: "Feature X".into(),
            y_label: "Feature Y".into(),
            tooltip: vec![
                Field::new("category", "Category", TickFormat::Plain),
                Field::new("x", "X Value", TickFormat::Decimal(1)),
                Field::new("y", "Y Value", TickFormat::Decimal(1)),
                Field::new("size", "Size", TickFormat::Decimal(1)),
                Field::new("value", "Value", TickFormat::Decimal(2)),
            ],
        }
    }
}

impl ScatterSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::Scatter, &self.title, (WIDTH, HEIGHT), theme));
        }
        data.conform(&[
            (self.x.as_str(), ColumnType::Number),
            (self.y.as_str(), ColumnType::Number),
            (self.size.as_str(), ColumnType::Number),
            (self.category.as_str(), ColumnType::Text),
        ])?;
        require_fields(data, &self.tooltip)?;

        let xs = data.numbers(&self.x)?;
        let ys = data.numbers(&self.y)?;
        let sizes = data.numbers(&self.size)?;
        let categories = data.texts(&self.category)?;

        let mut chart = Chart::new(ChartKind::Scatter, &self.title);
        for (i, (name, rows)) in group_rows(categories).into_iter().enumerate() {
            let tips = rows.iter().map(|&r| tooltip(data, &self.tooltip, r)).collect::<Result<Vec<_>>>()?;
            chart.add_series(
                Series::named(
                    name,
                    Glyph::Markers {
                        points: rows.iter().map(|&r| (xs[r], ys[r])).collect(),
                        sizes: rows.iter().map(|&r| sizes[r].max(0.0)).collect(),
                        color: theme.accent(i),
                        alpha: MARKER_ALPHA,
                        line_color: Some(theme.text),
                    },
                )
                .with_tooltips(tips),
            );
        }

        let (x_range, y_range) = chart.data_ranges(0.08);
        chart.x_axis = Axis::new(&self.x_label, x_range.start, x_range.end);
        chart.y_axis = Axis::new(&self.y_label, y_range.start, y_range.end);
        chart.legend_from_series(LegendLocation::TopLeft);
        chart.toolbar.insert(Tool::LassoSelect);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::Mouse);
        Ok(styled(chart, theme))
    }
}
