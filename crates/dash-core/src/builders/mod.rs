// File: crates/dash-core/src/builders/mod.rs
// Summary: Chart builders: one config struct per chart kind behind a closed `ChartSpec` enum.
//
// Every builder is a function of (dataset, theme): a zero-row dataset yields a
// placeholder chart, a non-empty dataset of the wrong shape is an error, and the
// result always leaves through the style applier.

mod area;
mod bar;
mod donut;
mod grouped_bar;
mod line;
mod scatter;
mod time_series;

pub use area::AreaSpec;
pub use bar::BarSpec;
pub use donut::DonutSpec;
pub use grouped_bar::GroupedBarSpec;
pub use line::LineSpec;
pub use scatter::ScatterSpec;
pub use time_series::TimeSeriesSpec;

use indexmap::IndexMap;
use tracing::debug;

use crate::axis::{Axis, TickFormat};
use crate::chart::{Chart, ChartKind};
use crate::dataset::{date_to_millis, Column, Dataset};
use crate::error::Result;
use crate::scale::Range;
use crate::series::Tooltip;
use crate::style::styled;
use crate::theme::Theme;

/// A tooltip row sourced from a dataset column.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub column: String,
    pub label: String,
    pub format: TickFormat,
}

impl Field {
    pub fn new(column: &str, label: &str, format: TickFormat) -> Self {
        Self { column: column.into(), label: label.into(), format }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    Line(LineSpec),
    Bar(BarSpec),
    GroupedBar(GroupedBarSpec),
    Scatter(ScatterSpec),
    Donut(DonutSpec),
    Area(AreaSpec),
    TimeSeries(TimeSeriesSpec),
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSpec::Line(_) => ChartKind::Line,
            ChartSpec::Bar(_) => ChartKind::Bar,
            ChartSpec::GroupedBar(_) => ChartKind::GroupedBar,
            ChartSpec::Scatter(_) => ChartKind::Scatter,
            ChartSpec::Donut(_) => ChartKind::Donut,
            ChartSpec::Area(_) => ChartKind::Area,
            ChartSpec::TimeSeries(_) => ChartKind::TimeSeries,
        }
    }

    /// The default spec for `kind`, matching the sample data providers.
    pub fn default_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => ChartSpec::Line(LineSpec::default()),
            ChartKind::Bar => ChartSpec::Bar(BarSpec::default()),
            ChartKind::GroupedBar => ChartSpec::GroupedBar(GroupedBarSpec::default()),
            ChartKind::Scatter => ChartSpec::Scatter(ScatterSpec::default()),
            ChartKind::Donut => ChartSpec::Donut(DonutSpec::default()),
            ChartKind::Area => ChartSpec::Area(AreaSpec::default()),
            ChartKind::TimeSeries => ChartSpec::TimeSeries(TimeSeriesSpec::default()),
        }
    }

    pub fn build(&self, data: &Dataset, theme: &Theme) -> Result<Chart> {
        let chart = match self {
            ChartSpec::Line(spec) => spec.build(data, theme),
            ChartSpec::Bar(spec) => spec.build(data, theme),
            ChartSpec::GroupedBar(spec) => spec.build(data, theme),
            ChartSpec::Scatter(spec) => spec.build(data, theme),
            ChartSpec::Donut(spec) => spec.build(data, theme),
            ChartSpec::Area(spec) => spec.build(data, theme),
            ChartSpec::TimeSeries(spec) => spec.build(data, theme),
        }?;
        debug!(
            kind = ?chart.kind,
            dataset = data.name(),
            rows = data.len(),
            series = chart.series.len(),
            glyphs = chart.glyph_count(),
            "built chart"
        );
        Ok(chart)
    }
}

pub(crate) const NO_DATA: &str = "No data available";

/// Empty chart with unit ranges and a centered message.
pub(crate) fn placeholder(kind: ChartKind, title: &str, size: (u32, u32), theme: &Theme) -> Chart {
    let mut chart = Chart::new(kind, title).with_size(size.0, size.1);
    chart.x_axis = Axis::new("", 0.0, 1.0);
    chart.y_axis = Axis::new("", 0.0, 1.0);
    chart.placeholder = Some(NO_DATA.to_string());
    styled(chart, theme)
}

const DAY_MS: f64 = 86_400_000.0;
/// Half-width of the x window around a single date.
const SINGLE_DATE_PAD_DAYS: f64 = 15.0;

/// Continuous x axis: datetime when the column holds dates, linear otherwise.
pub(crate) fn continuous_axis(data: &Dataset, column: &str, label: &str, date_format: TickFormat, range: Range) -> Result<Axis> {
    Ok(match data.column(column)? {
        Column::Date(dates) => {
            let single = dates.iter().min() == dates.iter().max();
            let range = match dates.first() {
                Some(d) if single => {
                    let center = date_to_millis(*d);
                    let half = SINGLE_DATE_PAD_DAYS * DAY_MS;
                    Range::new(center - half, center + half)
                }
                _ => range,
            };
            Axis::datetime(label, range, date_format)
        }
        _ => Axis::new(label, range.start, range.end),
    })
}

/// Row indices grouped by label, groups in first-appearance order.
pub(crate) fn group_rows(labels: &[String]) -> IndexMap<&str, Vec<usize>> {
    let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (row, label) in labels.iter().enumerate() {
        groups.entry(label.as_str()).or_default().push(row);
    }
    groups
}

/// Fail unless every tooltip field names an existing column.
pub(crate) fn require_fields(data: &Dataset, fields: &[Field]) -> Result<()> {
    for field in fields {
        data.column(&field.column)?;
    }
    Ok(())
}

/// Hover rows for one dataset row.
pub(crate) fn tooltip(data: &Dataset, fields: &[Field], row: usize) -> Result<Tooltip> {
    fields.iter().map(|f| field_value(data, f, row)).collect()
}

fn field_value(data: &Dataset, field: &Field, row: usize) -> Result<(String, String)> {
    let value = match data.column(&field.column)? {
        Column::Number(v) => v.get(row).map_or_else(String::new, |n| field.format.apply(*n)),
        Column::Text(v) => v.get(row).cloned().unwrap_or_default(),
        Column::Date(v) => v.get(row).map_or_else(String::new, |d| field.format.apply(date_to_millis(*d))),
    };
    Ok((field.label.clone(), value))
}

/// `"productivity"` -> `"Productivity"`, used for legend labels derived from column names.
pub(crate) fn title_case(column: &str) -> String {
    column
        .split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |c| c.to_uppercase().chain(chars).collect())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
