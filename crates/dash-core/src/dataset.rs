// File: crates/dash-core/src/dataset.rs
// Summary: Column-oriented tabular dataset handed from providers to builders.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::error::{DashError, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Number(Vec<f64>),
    Text(Vec<String>),
    Date(Vec<NaiveDate>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    Text,
    Date,
    /// Schema-only: a number or date column usable on a continuous axis.
    Continuous,
}

impl ColumnType {
    fn name(self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Continuous => "number or date",
        }
    }
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Number(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Date(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Column::Number(_) => ColumnType::Number,
            Column::Text(_) => ColumnType::Text,
            Column::Date(_) => ColumnType::Date,
        }
    }

    /// Cell rendered as text (dates ISO-8601, numbers shortest round-trip form).
    pub fn cell(&self, row: usize) -> Option<String> {
        match self {
            Column::Number(v) => v.get(row).map(|n| n.to_string()),
            Column::Text(v) => v.get(row).cloned(),
            Column::Date(v) => v.get(row).map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A named table of equal-length columns, kept in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    name: String,
    columns: IndexMap<String, Column>,
}

impl Dataset {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), columns: IndexMap::new() }
    }

    /// Append a column. Its length must match the columns already present.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        let name = name.into();
        if let Some((first, existing)) = self.columns.first() {
            if existing.len() != column.len() {
                return Err(DashError::shape(
                    &self.name,
                    format!("column '{name}' has {} rows, '{first}' has {}", column.len(), existing.len()),
                ));
            }
        }
        if self.columns.contains_key(&name) {
            return Err(DashError::shape(&self.name, format!("duplicate column '{name}'")));
        }
        self.columns.insert(name, column);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows; zero for a dataset without columns.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| DashError::shape(&self.name, format!("missing column '{name}'")))
    }

    fn mismatch(&self, name: &str, want: ColumnType, got: &Column) -> DashError {
        DashError::shape(
            &self.name,
            format!("column '{name}' is {}, expected {}", got.column_type().name(), want.name()),
        )
    }

    pub fn numbers(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Number(v) => Ok(v),
            other => Err(self.mismatch(name, ColumnType::Number, other)),
        }
    }

    pub fn texts(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            other => Err(self.mismatch(name, ColumnType::Text, other)),
        }
    }

    pub fn dates(&self, name: &str) -> Result<&[NaiveDate]> {
        match self.column(name)? {
            Column::Date(v) => Ok(v),
            other => Err(self.mismatch(name, ColumnType::Date, other)),
        }
    }

    /// Values usable on a continuous axis: numbers as-is, dates as epoch milliseconds.
    pub fn axis_values(&self, name: &str) -> Result<Vec<f64>> {
        match self.column(name)? {
            Column::Number(v) => Ok(v.clone()),
            Column::Date(v) => Ok(v.iter().map(|d| date_to_millis(*d)).collect()),
            other => Err(self.mismatch(name, ColumnType::Continuous, other)),
        }
    }

    /// Check every `(column, type)` pair of `schema` is present with that type.
    pub fn conform(&self, schema: &[(&str, ColumnType)]) -> Result<()> {
        for &(name, want) in schema {
            let got = self.column(name)?;
            let ok = match want {
                ColumnType::Continuous => matches!(got, Column::Number(_) | Column::Date(_)),
                _ => got.column_type() == want,
            };
            if !ok {
                return Err(self.mismatch(name, want, got));
            }
        }
        Ok(())
    }
}

/// Midnight UTC of `date` as milliseconds since the Unix epoch.
pub fn date_to_millis(date: NaiveDate) -> f64 {
    date.and_hms_opt(0, 0, 0)
        .map_or(0.0, |dt| dt.and_utc().timestamp_millis() as f64)
}

/// Inverse of [`date_to_millis`], truncating to the day.
pub fn millis_to_date(ms: f64) -> Option<NaiveDate> {
    chrono::DateTime::from_timestamp_millis(ms.round() as i64).map(|dt| dt.date_naive())
}
