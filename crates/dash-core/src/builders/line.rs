// File: crates/dash-core/src/builders/line.rs
// Summary: Multi-series line chart (one line + markers per series value).

use super::{continuous_axis, group_rows, placeholder, require_fields, tooltip, Field};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind, HoverMode, LegendLocation, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::error::Result;
use crate::series::{Glyph, LineDash, Series};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

const LINE_WIDTH: f64 = 3.0;
const LINE_ALPHA: f64 = 0.9;
const MARKER_SIZE: f64 = 8.0;
const MARKER_ALPHA: f64 = 0.8;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSpec {
    pub title: String,
    /// Number or date column.
    pub x: String,
    pub y: String,
    /// Text column splitting rows into series.
    pub series: String,
    pub x_label: String,
    pub y_label: String,
    pub x_format: TickFormat,
    pub y_format: TickFormat,
    pub tooltip: Vec<Field>,
    pub link_group: Option<String>,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            title: "Monthly Sales Trends by Product Category".into(),
            x: "date".into(),
            y: "sales".into(),
            series: "product".into(),
            x_label: "Month".into(),
            y_label: "Sales Revenue".into(),
            x_format: TickFormat::MonthYear,
            y_format: TickFormat::Currency,
            tooltip: vec![
                Field::new("product", "Product", TickFormat::Plain),
                Field::new("date", "Date", TickFormat::MonthYearLong),
                Field::new("sales", "Sales", TickFormat::Currency),
                Field::new("units", "Units", TickFormat::Thousands),
            ],
            link_group: Some("monthly".into()),
        }
    }
}

impl LineSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::Line, &self.title, (WIDTH, HEIGHT), theme));
        }
        data.conform(&[
            (self.x.as_str(), ColumnType::Continuous),
            (self.y.as_str(), ColumnType::Number),
            (self.series.as_str(), ColumnType::Text),
        ])?;
        require_fields(data, &self.tooltip)?;

        let xs = data.axis_values(&self.x)?;
        let ys = data.numbers(&self.y)?;
        let names = data.texts(&self.series)?;

        let mut chart = Chart::new(ChartKind::Line, &self.title);
        for (i, (name, mut rows)) in group_rows(names).into_iter().enumerate() {
            rows.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
            let points: Vec<(f64, f64)> = rows.iter().map(|&r| (xs[r], ys[r])).collect();
            let tips = rows.iter().map(|&r| tooltip(data, &self.tooltip, r)).collect::<Result<Vec<_>>>()?;
            let color = theme.accent(i);

            // A single point has no segment to draw.
            if points.len() > 1 {
                chart.add_series(Series::named(
                    name,
                    Glyph::Line { points: points.clone(), color, width: LINE_WIDTH, alpha: LINE_ALPHA, dash: LineDash::Solid },
                ));
            }
            chart.add_series(
                Series::named(
                    name,
                    Glyph::Markers {
                        sizes: vec![MARKER_SIZE; points.len()],
                        points,
                        color,
                        alpha: MARKER_ALPHA,
                        line_color: None,
                    },
                )
                .with_tooltips(tips),
            );
        }

        let (x_range, y_range) = chart.data_ranges(0.05);
        chart.x_axis = continuous_axis(data, &self.x, &self.x_label, self.x_format, x_range)?;
        chart.y_axis = Axis::new(&self.y_label, y_range.start, y_range.end).with_format(self.y_format);
        chart.legend_from_series(LegendLocation::Right);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::Mouse);
        chart.link_group = self.link_group.clone();
        Ok(styled(chart, theme))
    }
}
