// File: crates/dash-core/src/builders/area.rs
// Summary: Stacked area chart built from a long-format (x, series, y) table.

use indexmap::IndexMap;

use super::{continuous_axis, placeholder, title_case};
use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind, HoverMode, LegendLocation, Tool};
use crate::dataset::{Column, ColumnType, Dataset};
use crate::error::Result;
use crate::scale::Range;
use crate::series::{Glyph, Series, Tooltip};
use crate::style::styled;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

const FILL_ALPHA: f64 = 0.7;
const MARKER_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AreaSpec {
    pub title: String,
    pub x: String,
    pub y: String,
    pub series: String,
    pub x_label: String,
    pub y_label: String,
    pub x_format: TickFormat,
    pub y_format: TickFormat,
    /// Format of x in hover rows.
    pub x_tooltip_format: TickFormat,
    pub link_group: Option<String>,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            title: "Cumulative Sales Distribution".into(),
            x: "date".into(),
            y: "sales".into(),
            series: "product".into(),
            x_label: "Month".into(),
            y_label: "Cumulative Sales".into(),
            x_format: TickFormat::MonthYear,
            y_format: TickFormat::Currency,
            x_tooltip_format: TickFormat::MonthYearLong,
            link_group: Some("monthly".into()),
        }
    }
}

/// Wide table: sorted distinct xs and, per series, one summed value per x.
struct Pivot<'a> {
    xs: Vec<f64>,
    columns: IndexMap<&'a str, Vec<f64>>,
}

fn pivot<'a>(xs: &[f64], names: &'a [String], ys: &[f64]) -> Pivot<'a> {
    let mut keys: Vec<f64> = xs.to_vec();
    keys.sort_by(f64::total_cmp);
    keys.dedup();

    let mut columns: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for ((&x, name), &y) in xs.iter().zip(names).zip(ys) {
        let column = columns.entry(name.as_str()).or_insert_with(|| vec![0.0; keys.len()]);
        if let Ok(k) = keys.binary_search_by(|key| key.total_cmp(&x)) {
            column[k] += y;
        }
    }
    Pivot { xs: keys, columns }
}

impl AreaSpec {
    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        if data.is_empty() {
            return Ok(placeholder(ChartKind::Area, &self.title, (WIDTH, HEIGHT), theme));
        }
        data.conform(&[
            (self.x.as_str(), ColumnType::Continuous),
            (self.y.as_str(), ColumnType::Number),
            (self.series.as_str(), ColumnType::Text),
        ])?;

        let xs = data.axis_values(&self.x)?;
        let Pivot { xs: keys, columns } = pivot(&xs, data.texts(&self.series)?, data.numbers(&self.y)?);
        let x_tip = if matches!(data.column(&self.x)?, Column::Date(_)) {
            self.x_tooltip_format
        } else {
            TickFormat::Decimal(1)
        };

        let series_label = title_case(&self.series);
        let y_label = title_case(&self.y);

        let mut chart = Chart::new(ChartKind::Area, &self.title);
        let mut lower = vec![0.0; keys.len()];
        for (i, (name, values)) in columns.into_iter().enumerate() {
            let upper: Vec<f64> = lower.iter().zip(&values).map(|(lo, v)| lo + v).collect();
            let tips: Vec<Tooltip> = keys
                .iter()
                .zip(values.iter().zip(&upper))
                .map(|(&x, (&v, &top))| {
                    vec![
                        (series_label.clone(), name.to_string()),
                        (title_case(&self.x), x_tip.apply(x)),
                        (y_label.clone(), self.y_format.apply(v)),
                        ("Cumulative".to_string(), self.y_format.apply(top)),
                    ]
                })
                .collect();
            let color = theme.accent(i);
            // One x gives a zero-width polygon; show the stacked tops as markers instead.
            let glyph = if keys.len() > 1 {
                Glyph::Area { xs: keys.clone(), lower: lower.clone(), upper: upper.clone(), color, alpha: FILL_ALPHA }
            } else {
                Glyph::Markers {
                    points: keys.iter().copied().zip(upper.iter().copied()).collect(),
                    sizes: vec![MARKER_SIZE; keys.len()],
                    color,
                    alpha: FILL_ALPHA,
                    line_color: None,
                }
            };
            chart.add_series(Series::named(name, glyph).with_tooltips(tips));
            lower = upper;
        }

        let (x_range, _) = chart.data_ranges(0.0);
        let (_, y_range) = chart.data_ranges(0.05);
        // Stacks of non-negative values start at the baseline.
        let y_range = if y_range.start < 0.0 && lower.iter().all(|v| *v >= 0.0) {
            Range::new(0.0, y_range.end)
        } else {
            y_range.including(0.0)
        };
        chart.x_axis = continuous_axis(data, &self.x, &self.x_label, self.x_format, x_range)?;
        chart.y_axis = Axis::new(&self.y_label, y_range.start, y_range.end).with_format(self.y_format);
        chart.legend_from_series(LegendLocation::TopLeft);
        chart.toolbar.insert(Tool::Hover);
        chart.hover = Some(HoverMode::VLine);
        chart.link_group = self.link_group.clone();
        Ok(styled(chart, theme))
    }
}
