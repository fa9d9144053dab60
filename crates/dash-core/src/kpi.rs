// File: crates/dash-core/src/kpi.rs
// Summary: KPI summary cards computed from the sales, regional, performance and price datasets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{ColumnType, Dataset};
use crate::error::Result;
use crate::format::{currency, signed_percent, thousands};
use crate::theme::{Role, Theme};

/// Relative change below this (in percent) reads as flat.
pub const FLAT_THRESHOLD: f64 = 0.5;
/// Shown in place of a value that cannot be computed.
pub const MISSING: &str = "—";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a change expressed in percent.
    pub fn from_delta(delta_pct: f64) -> Self {
        if !delta_pct.is_finite() || delta_pct.abs() < FLAT_THRESHOLD {
            Trend::Flat
        } else if delta_pct > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "→",
        }
    }

    /// Theme role used for the caption color.
    pub fn role(&self) -> Role {
        match self {
            Trend::Up => Role::Positive,
            Trend::Down => Role::Negative,
            Trend::Flat => Role::MutedText,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub trend: Option<Trend>,
    pub accent: Role,
}

impl KpiCard {
    fn new(index: usize, title: &str, value: String, caption: String, trend: Option<Trend>) -> Self {
        Self { title: title.into(), value, caption, trend, accent: Theme::accent_role(index) }
    }
}

/// Datasets the cards are computed from.
#[derive(Clone, Copy, Debug)]
pub struct KpiInputs<'a> {
    pub sales: &'a Dataset,
    pub regional: &'a Dataset,
    pub performance: &'a Dataset,
    pub prices: &'a Dataset,
}

/// Six cards in display order. Empty datasets give `—` values; a non-empty
/// dataset missing its columns is an error.
pub fn summarize(inputs: &KpiInputs<'_>) -> Result<Vec<KpiCard>> {
    Ok(vec![
        total_revenue(inputs.sales)?,
        total_customers(inputs.regional)?,
        avg_satisfaction(inputs.regional)?,
        avg_growth(inputs.regional)?,
        avg_performance(inputs.performance)?,
        latest_price(inputs.prices)?,
    ])
}

fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.into_iter().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn change_pct(latest: f64, previous: f64) -> Option<f64> {
    (previous.abs() > f64::EPSILON).then(|| (latest - previous) / previous.abs() * 100.0)
}

fn trend_caption(delta: Option<f64>, period: &str) -> (String, Option<Trend>) {
    match delta {
        Some(d) => {
            let trend = Trend::from_delta(d);
            (format!("{} {} vs {period}", trend.arrow(), signed_percent(d, 1)), Some(trend))
        }
        None => (format!("no {period} to compare"), None),
    }
}

fn total_revenue(sales: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Total Revenue";
    if sales.is_empty() {
        return Ok(KpiCard::new(0, TITLE, MISSING.into(), String::new(), None));
    }
    sales.conform(&[("date", ColumnType::Date), ("sales", ColumnType::Number)])?;
    let amounts = sales.numbers("sales")?;

    let mut monthly: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for (date, amount) in sales.dates("date")?.iter().zip(amounts) {
        *monthly.entry(*date).or_default() += amount;
    }
    let mut latest_first = monthly.values().rev();
    let delta = match (latest_first.next(), latest_first.next()) {
        (Some(&latest), Some(&previous)) => change_pct(latest, previous),
        _ => None,
    };
    let (caption, trend) = trend_caption(delta, "last month");
    Ok(KpiCard::new(0, TITLE, currency(amounts.iter().sum(), 0), caption, trend))
}

fn total_customers(regional: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Total Customers";
    if regional.is_empty() {
        return Ok(KpiCard::new(1, TITLE, MISSING.into(), String::new(), None));
    }
    let customers = regional.numbers("customers")?;
    let caption = format!("across {} regions", regional.len());
    Ok(KpiCard::new(1, TITLE, thousands(customers.iter().sum(), 0), caption, None))
}

fn avg_satisfaction(regional: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Avg. Satisfaction";
    if regional.is_empty() {
        return Ok(KpiCard::new(2, TITLE, MISSING.into(), String::new(), None));
    }
    let score = mean(regional.numbers("satisfaction")?.iter().copied()).unwrap_or(f64::NAN);
    let caption = match score {
        s if s >= 4.5 => "Excellent rating",
        s if s >= 4.0 => "Great rating",
        s if s >= 3.0 => "Good rating",
        _ => "Needs attention",
    };
    Ok(KpiCard::new(2, TITLE, format!("{score:.1}/5.0"), caption.into(), None))
}

fn avg_growth(regional: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Avg. Growth Rate";
    if regional.is_empty() {
        return Ok(KpiCard::new(3, TITLE, MISSING.into(), String::new(), None));
    }
    let growth = mean(regional.numbers("growth")?.iter().copied()).unwrap_or(f64::NAN);
    let trend = Trend::from_delta(growth);
    let caption = match trend {
        Trend::Up => "Strong performance",
        Trend::Down => "Declining",
        Trend::Flat => "Holding steady",
    };
    Ok(KpiCard::new(3, TITLE, format!("{growth:.1}%"), format!("{} {caption}", trend.arrow()), Some(trend)))
}

fn avg_performance(performance: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Avg. Performance";
    if performance.is_empty() {
        return Ok(KpiCard::new(4, TITLE, MISSING.into(), String::new(), None));
    }
    let mut cells = Vec::with_capacity(performance.len() * 3);
    for column in ["productivity", "quality", "efficiency"] {
        cells.extend_from_slice(performance.numbers(column)?);
    }
    let score = mean(cells).unwrap_or(f64::NAN);
    let caption = format!("across {} teams", performance.len());
    Ok(KpiCard::new(4, TITLE, format!("{score:.1}%"), caption, None))
}

fn latest_price(prices: &Dataset) -> Result<KpiCard> {
    const TITLE: &str = "Latest Price";
    if prices.is_empty() {
        return Ok(KpiCard::new(5, TITLE, MISSING.into(), String::new(), None));
    }
    prices.conform(&[("date", ColumnType::Continuous), ("price", ColumnType::Number)])?;
    let xs = prices.axis_values("date")?;
    let price = prices.numbers("price")?;
    let mut order: Vec<usize> = (0..prices.len()).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));

    let latest = order.last().map(|&r| price[r]).unwrap_or(f64::NAN);
    let delta = match order.len() {
        n if n >= 2 => change_pct(latest, price[order[n - 2]]),
        _ => None,
    };
    let (caption, trend) = trend_caption(delta, "previous day");
    Ok(KpiCard::new(5, TITLE, currency(latest, 2), caption, trend))
}
