// File: crates/dash-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and tick formatting.

use serde::Serialize;

use crate::dataset::millis_to_date;
use crate::format::{currency, percent, thousands};
use crate::grid::{date_ticks, nice_ticks};
use crate::scale::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Linear,
    /// Values are epoch milliseconds.
    Datetime,
    /// Values are positions of named factors.
    Categorical,
}

/// How tick labels (and matching tooltip values) are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    Plain,
    Thousands,
    /// `$0,0`
    Currency,
    /// `$0.00`
    CurrencyCents,
    Percent,
    /// Fixed number of decimals, with thousands separators.
    Decimal(u8),
    /// `%b %Y`
    MonthYear,
    /// `%B %Y`
    MonthYearLong,
    /// `%b %d`
    Day,
    /// `%Y-%m-%d`
    IsoDate,
}

impl TickFormat {
    pub fn apply(self, v: f64) -> String {
        match self {
            TickFormat::Plain => {
                if (v - v.round()).abs() < 1e-9 { thousands(v, 0) } else { format!("{v:.1}") }
            }
            TickFormat::Thousands => thousands(v, 0),
            TickFormat::Currency => currency(v, 0),
            TickFormat::CurrencyCents => currency(v, 2),
            TickFormat::Percent => percent(v, if (v - v.round()).abs() < 1e-9 { 0 } else { 1 }),
            TickFormat::Decimal(places) => thousands(v, usize::from(places)),
            TickFormat::MonthYear => date_label(v, "%b %Y"),
            TickFormat::MonthYearLong => date_label(v, "%B %Y"),
            TickFormat::Day => date_label(v, "%b %d"),
            TickFormat::IsoDate => date_label(v, "%Y-%m-%d"),
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, TickFormat::MonthYear | TickFormat::MonthYearLong | TickFormat::Day | TickFormat::IsoDate)
    }
}

fn date_label(ms: f64, pattern: &str) -> String {
    millis_to_date(ms).map_or_else(String::new, |d| d.format(pattern).to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub label: String,
    pub range: Range,
    pub kind: ScaleKind,
    pub format: TickFormat,
    /// Categorical ticks: (position, factor name).
    pub factors: Vec<(f64, String)>,
    pub visible: bool,
    /// Tick label rotation in radians.
    pub label_orientation: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            range: Range::new(min, max),
            kind: ScaleKind::Linear,
            format: TickFormat::Plain,
            factors: Vec::new(),
            visible: true,
            label_orientation: 0.0,
        }
    }

    pub fn datetime(label: impl Into<String>, range: Range, format: TickFormat) -> Self {
        Self { kind: ScaleKind::Datetime, format, range, ..Self::new(label, 0.0, 1.0) }
    }

    pub fn categorical(label: impl Into<String>, range: Range, factors: Vec<(f64, String)>) -> Self {
        Self { kind: ScaleKind::Categorical, factors, range, ..Self::new(label, 0.0, 1.0) }
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Tick positions and labels inside the current range.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        match self.kind {
            ScaleKind::Categorical => self
                .factors
                .iter()
                .filter(|(pos, _)| self.range.contains(*pos))
                .cloned()
                .collect(),
            ScaleKind::Datetime => date_ticks(self.range, target)
                .into_iter()
                .map(|v| (v, self.format.apply(v)))
                .collect(),
            ScaleKind::Linear => nice_ticks(self.range, target)
                .into_iter()
                .map(|v| (v, self.format.apply(v)))
                .collect(),
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
