// File: crates/dash-core/src/builders/donut.rs
// Summary: Donut chart: one annular wedge per category, sized by its share of the total.

use std::f64::consts::TAU;

use super::placeholder;
use crate::axis::Axis;
use crate::chart::{Chart, ChartKind, Frame, HoverMode, LegendLocation, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::error::{DashError, Result};
use crate::format::percent;
use crate::series::{Glyph, Series, TextAlign, TextItem, Wedge};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::HEIGHT;

const WIDTH: u32 = 500;
pub const INNER_RADIUS: f64 = 0.4;
pub const OUTER_RADIUS: f64 = 0.9;
const LABEL_RADIUS: f64 = 0.65;
const EXTENT: f64 = 1.2;
const WEDGE_ALPHA: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSpec {
    pub title: String,
    pub category: String,
    pub value: String,
    pub center_caption: Option<String>,
}

impl Default for DonutSpec {
    fn default() -> Self {
        Self {
            title: "Traffic by Device Type".into(),
            category: "category".into(),
            value: "value".into(),
            center_caption: Some("Total Traffic".into()),
        }
    }
}

impl DonutSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(self.empty(theme));
        }
        data.conform(&[(self.category.as_str(), ColumnType::Text), (self.value.as_str(), ColumnType::Number)])?;

        let categories = data.texts(&self.category)?;
        let values = data.numbers(&self.value)?;
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(DashError::shape(
                data.name(),
                format!("column '{}' holds {bad}; wedge values must be finite and non-negative", self.value),
            ));
        }
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return Ok(self.empty(theme));
        }

        let mut chart = Chart::new(ChartKind::Donut, &self.title).with_size(WIDTH, HEIGHT);
        chart.frame = Frame::Polar;

        // Wedge and its label share a name so one legend entry hides both.
        let mut start = 0.0;
        for (i, (name, &v)) in categories.iter().zip(values).enumerate() {
            let fraction = v / total;
            let end = start + fraction * TAU;
            let color = theme.accent(i);
            chart.add_series(
                Series::named(
                    name,
                    Glyph::Wedges {
                        center: (0.0, 0.0),
                        inner_radius: INNER_RADIUS,
                        outer_radius: OUTER_RADIUS,
                        wedges: vec![Wedge { start_angle: start, end_angle: end, fraction, color }],
                        alpha: WEDGE_ALPHA,
                        line_color: theme.background,
                    },
                )
                .with_tooltips(vec![vec![(name.clone(), percent(fraction * 100.0, 1))]]),
            );
            if fraction > 0.0 {
                let mid = (start + end) / 2.0;
                chart.add_series(Series::named(
                    name,
                    Glyph::Text {
                        items: vec![TextItem {
                            x: LABEL_RADIUS * mid.cos(),
                            y: LABEL_RADIUS * mid.sin(),
                            text: percent(fraction * 100.0, 0),
                        }],
                        color: theme.text,
                        size: 12.0,
                        align: TextAlign::Middle,
                        bold: true,
                    },
                ));
            }
            start = end;
        }

        if let Some(caption) = &self.center_caption {
            chart.add_series(Series::new(Glyph::Text {
                items: vec![TextItem { x: 0.0, y: 0.0, text: caption.clone() }],
                color: theme.text,
                size: 14.0,
                align: TextAlign::Middle,
                bold: false,
            }));
        }

        chart.x_axis = Axis::new("", -EXTENT, EXTENT).hidden();
        chart.y_axis = Axis::new("", -EXTENT, EXTENT).hidden();
        chart.legend_from_series(LegendLocation::Right);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::Mouse);
        Ok(styled(chart, theme))
    }

    fn empty(&self, theme: &Theme) -> Chart {
        placeholder(ChartKind::Donut, &self.title, (WIDTH, HEIGHT), theme)
    }
}
