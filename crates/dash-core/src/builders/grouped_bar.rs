// File: crates/dash-core/src/builders/grouped_bar.rs
// Summary: Grouped vertical bars: categories along x, one adjacent bar per subgroup
// column, with an optional target reference line.

use super::{placeholder, title_case};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Annotation, Chart, ChartKind, Dimension, HoverMode, LegendLocation, Tool};
use crate::dataset::{ColumnType, Dataset};
use crate::error::Result;
use crate::scale::Range;
use crate::series::{Bar, Glyph, LineDash, Series};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT};

const WIDTH: u32 = 900;
/// Share of each category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;
const BAR_ALPHA: f64 = 0.85;
const LABEL_ORIENTATION: f64 = 0.8;
const INSETS: Insets = Insets::new(72, 24, 44, 92);

/// Horizontal reference line with a caption above it.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupedBarSpec {
    pub title: String,
    pub category: String,
    /// Number columns, one bar (and legend entry) each.
    pub subgroups: Vec<String>,
    pub y_label: String,
    pub value_format: TickFormat,
    /// Fixed y range; data-derived when absent.
    pub y_bounds: Option<(f64, f64)>,
    pub target: Option<Target>,
}

impl Default for GroupedBarSpec {
    fn default() -> Self {
        Self {
            title: "Team Performance Metrics".into(),
            category: "team".into(),
            subgroups: vec!["productivity".into(), "quality".into(), "efficiency".into()],
            y_label: "Score (%)".into(),
            value_format: TickFormat::Percent,
            y_bounds: Some((0.0, 110.0)),
            target: Some(Target { value: 85.0, label: "Target: 85%".into() }),
        }
    }
}

impl GroupedBarSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::GroupedBar, &self.title, (WIDTH, HEIGHT), theme));
        }
        let mut schema = vec![(self.category.as_str(), ColumnType::Text)];
        schema.extend(self.subgroups.iter().map(|c| (c.as_str(), ColumnType::Number)));
        data.conform(&schema)?;

        let categories = data.texts(&self.category)?;
        let factors: Vec<(f64, String)> =
            categories.iter().enumerate().map(|(i, c)| (i as f64 + 0.5, c.clone())).collect();
        let bar_width = GROUP_WIDTH / self.subgroups.len().max(1) as f64;
        let margin = (1.0 - GROUP_WIDTH) / 2.0;

        let mut chart = Chart::new(ChartKind::GroupedBar, &self.title).with_size(WIDTH, HEIGHT);
        chart.insets = INSETS;
        for (j, column) in self.subgroups.iter().enumerate() {
            let values = data.numbers(column)?;
            let color = theme.accent(j);
            let label = title_case(column);
            let bars = values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    let x0 = i as f64 + margin + j as f64 * bar_width;
                    Bar { x0, x1: x0 + bar_width, y0: v.min(0.0), y1: v.max(0.0), color }
                })
                .collect();
            let tips = values
                .iter()
                .zip(categories)
                .map(|(&v, team)| {
                    vec![
                        (title_case(&self.category), team.clone()),
                        ("Metric".to_string(), label.clone()),
                        ("Score".to_string(), self.value_format.apply(v)),
                    ]
                })
                .collect();
            chart.add_series(
                Series::named(label, Glyph::Bars { bars, alpha: BAR_ALPHA, line_color: Some(theme.text) })
                    .with_tooltips(tips),
            );
        }

        let y_range = match self.y_bounds {
            Some((lo, hi)) => Range::new(lo, hi),
            None => chart.data_ranges(0.05).1.including(0.0),
        };
        let mut x_axis = Axis::categorical("", Range::new(0.0, categories.len() as f64), factors);
        x_axis.label_orientation = LABEL_ORIENTATION;
        chart.x_axis = x_axis;
        chart.y_axis = Axis::new(&self.y_label, y_range.start, y_range.end).with_format(self.value_format);

        if let Some(target) = &self.target {
            let color = theme.accent_quaternary;
            chart.annotations.push(Annotation::Span {
                location: target.value,
                dimension: Dimension::Width,
                color,
                width: 2.0,
                dash: LineDash::Dashed,
            });
            chart.annotations.push(Annotation::Label {
                x: margin,
                y: target.value + 2.0,
                text: target.label.clone(),
                color,
                font_size: 10.0,
            });
        }

        chart.legend_from_series(LegendLocation::Right);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::Mouse);
        Ok(styled(chart, theme))
    }
}
