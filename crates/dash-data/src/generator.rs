// File: crates/dash-data/src/generator.rs
// Summary: Seeded generators for sales, regional, team, price, cluster and device-share tables.

use std::f64::consts::TAU;

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use dash_core::dataset::{Column, Dataset};
use dash_core::grid::linspace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;

pub const PRODUCTS: [&str; 5] = ["Electronics", "Clothing", "Food & Beverages", "Home & Garden", "Sports"];
pub const REGIONS: [&str; 5] = ["North America", "Europe", "Asia Pacific", "Latin America", "Middle East"];
pub const TEAMS: [&str; 6] = ["Engineering", "Sales", "Marketing", "Operations", "Support", "HR"];
pub const CLUSTERS: [(&str, (f64, f64)); 3] =
    [("Category A", (30.0, 40.0)), ("Category B", (60.0, 70.0)), ("Category C", (80.0, 30.0))];
pub const DEVICES: [(&str, f64); 5] =
    [("Desktop", 45.0), ("Mobile", 35.0), ("Tablet", 12.0), ("Smart TV", 5.0), ("Other", 3.0)];

const SALES_FLOOR: f64 = 1_000.0;
const PRICE_FLOOR: f64 = 10.0;
const SEASON_AMPLITUDE: f64 = 5_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataConfig {
    pub seed: u64,
    /// Date the generated histories end near.
    pub anchor: NaiveDate,
}

impl DataConfig {
    pub fn new(seed: u64, anchor: NaiveDate) -> Self {
        Self { seed, anchor }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { seed: 42, anchor: Utc::now().date_naive() }
    }
}

/// Every dataset the dashboard consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct Bundle {
    pub sales: Dataset,
    pub regional: Dataset,
    pub performance: Dataset,
    pub time_series: Dataset,
    pub scatter: Dataset,
    pub device_share: Dataset,
}

impl Bundle {
    pub fn datasets(&self) -> [&Dataset; 6] {
        [&self.sales, &self.regional, &self.performance, &self.time_series, &self.scatter, &self.device_share]
    }
}

/// Synthetic data source. Each provider starts from a fresh RNG seeded with
/// `config.seed`, so its output does not depend on which providers ran before.
#[derive(Clone, Debug)]
pub struct Generator {
    config: DataConfig,
}

impl Generator {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> DataConfig {
        self.config
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.config.seed)
    }

    pub fn bundle(&self, months: usize, days: usize, points: usize) -> Result<Bundle> {
        Ok(Bundle {
            sales: self.sales(months)?,
            regional: self.regional()?,
            performance: self.performance()?,
            time_series: self.time_series(days)?,
            scatter: self.scatter(points)?,
            device_share: self.device_share()?,
        })
    }

    /// Monthly sales per product: base + linear trend + one seasonal cycle + noise.
    pub fn sales(&self, months: usize) -> Result<Dataset> {
        let mut rng = self.rng();
        let dates = month_ends(self.config.anchor - Duration::days(months as i64 * 30), months);
        let cycle = linspace(0.0, TAU, months);

        let mut date_col = Vec::with_capacity(PRODUCTS.len() * months);
        let mut product_col = Vec::with_capacity(PRODUCTS.len() * months);
        let mut sales_col = Vec::with_capacity(PRODUCTS.len() * months);
        let mut units_col = Vec::with_capacity(PRODUCTS.len() * months);
        for product in PRODUCTS {
            let base = f64::from(rng.random_range(10_000..50_000_i32));
            let trend = linspace(0.0, f64::from(rng.random_range(-5_000..10_000_i32)), months);
            let noise: Vec<f64> = (0..months).map(|_| normal(&mut rng, 0.0, 2_000.0)).collect();
            for (i, date) in dates.iter().enumerate() {
                let sales = (base + trend[i] + SEASON_AMPLITUDE * cycle[i].sin() + noise[i]).max(SALES_FLOOR).trunc();
                let per_unit = f64::from(rng.random_range(20..100_i32));
                date_col.push(*date);
                product_col.push(product.to_string());
                sales_col.push(sales);
                units_col.push((sales / per_unit).trunc());
            }
        }
        finish(
            Dataset::new("sales")
                .with_column("date", Column::Date(date_col))?
                .with_column("product", Column::Text(product_col))?
                .with_column("sales", Column::Number(sales_col))?
                .with_column("units", Column::Number(units_col))?,
        )
    }

    /// One row per region, listed by descending revenue.
    pub fn regional(&self) -> Result<Dataset> {
        let mut rng = self.rng();
        let mut rows: Vec<(&str, f64, f64, f64, f64)> = REGIONS
            .iter()
            .map(|&region| {
                let revenue = f64::from(rng.random_range(100_000..500_000_i32));
                let growth = rng.random_range(-5.0..25.0_f64);
                let customers = f64::from(rng.random_range(1_000..10_000_i32));
                let satisfaction = rng.random_range(3.5..5.0_f64);
                (region, revenue, growth, customers, satisfaction)
            })
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        finish(
            Dataset::new("regional")
                .with_column("region", Column::Text(rows.iter().map(|r| r.0.to_string()).collect()))?
                .with_column("revenue", Column::Number(rows.iter().map(|r| r.1).collect()))?
                .with_column("growth", Column::Number(rows.iter().map(|r| r.2).collect()))?
                .with_column("customers", Column::Number(rows.iter().map(|r| r.3).collect()))?
                .with_column("satisfaction", Column::Number(rows.iter().map(|r| r.4).collect()))?,
        )
    }

    pub fn performance(&self) -> Result<Dataset> {
        let mut rng = self.rng();
        let n = TEAMS.len();
        let productivity = (0..n).map(|_| rng.random_range(70.0..100.0_f64)).collect();
        let quality = (0..n).map(|_| rng.random_range(80.0..99.0_f64)).collect();
        let efficiency = (0..n).map(|_| rng.random_range(65.0..95.0_f64)).collect();
        let headcount = (0..n).map(|_| f64::from(rng.random_range(10..100_i32))).collect();
        finish(
            Dataset::new("performance")
                .with_column("team", texts(&TEAMS))?
                .with_column("productivity", Column::Number(productivity))?
                .with_column("quality", Column::Number(quality))?
                .with_column("efficiency", Column::Number(efficiency))?
                .with_column("headcount", Column::Number(headcount))?,
        )
    }

    /// Daily prices as a gaussian random walk from 100, with a high/low band and volume.
    pub fn time_series(&self, days: usize) -> Result<Dataset> {
        let mut rng = self.rng();
        let start = self.config.anchor - Duration::days(days as i64);
        let dates = (0..days).map(|i| start + Duration::days(i as i64)).collect();

        let mut prices = Vec::with_capacity(days);
        let mut price = 100.0;
        for i in 0..days {
            if i > 0 {
                price = (price + normal(&mut rng, 0.0, 2.0)).max(PRICE_FLOOR);
            }
            prices.push(price);
        }
        let volume = (0..days).map(|_| f64::from(rng.random_range(100_000..1_000_000_i32))).collect();
        let high = prices.iter().map(|p| p + rng.random_range(0.0..5.0_f64)).collect();
        let low = prices.iter().map(|p| p - rng.random_range(0.0..5.0_f64)).collect();
        finish(
            Dataset::new("time_series")
                .with_column("date", Column::Date(dates))?
                .with_column("price", Column::Number(prices))?
                .with_column("volume", Column::Number(volume))?
                .with_column("high", Column::Number(high))?
                .with_column("low", Column::Number(low))?,
        )
    }

    /// Three gaussian clusters of `points / 3` points each.
    pub fn scatter(&self, points: usize) -> Result<Dataset> {
        let mut rng = self.rng();
        let per = points / CLUSTERS.len();
        let (mut xs, mut ys, mut sizes, mut cats, mut values) = (vec![], vec![], vec![], vec![], vec![]);
        for (name, (cx, cy)) in CLUSTERS {
            let x: Vec<f64> = (0..per).map(|_| normal(&mut rng, cx, 10.0)).collect();
            let y: Vec<f64> = (0..per).map(|_| normal(&mut rng, cy, 10.0)).collect();
            let size: Vec<f64> = (0..per).map(|_| rng.random_range(5.0..20.0_f64)).collect();
            for j in 0..per {
                values.push(x[j] * y[j] / 100.0);
                cats.push(name.to_string());
            }
            xs.extend(x);
            ys.extend(y);
            sizes.extend(size);
        }
        finish(
            Dataset::new("scatter")
                .with_column("x", Column::Number(xs))?
                .with_column("y", Column::Number(ys))?
                .with_column("size", Column::Number(sizes))?
                .with_column("category", Column::Text(cats))?
                .with_column("value", Column::Number(values))?,
        )
    }

    pub fn device_share(&self) -> Result<Dataset> {
        let names: Vec<&str> = DEVICES.iter().map(|(name, _)| *name).collect();
        finish(
            Dataset::new("device_share")
                .with_column("category", texts(&names))?
                .with_column("value", Column::Number(DEVICES.iter().map(|(_, v)| *v).collect()))?,
        )
    }
}

fn finish(data: Dataset) -> Result<Dataset> {
    debug!(dataset = data.name(), rows = data.len(), "generated dataset");
    Ok(data)
}

fn texts(values: &[&str]) -> Column {
    Column::Text(values.iter().map(|s| s.to_string()).collect())
}

/// Box-Muller transform.
fn normal(rng: &mut StdRng, mean: f64, sd: f64) -> f64 {
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    mean + sd * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// `count` consecutive month-end dates, the first on or after `from`.
pub fn month_ends(from: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(count);
    let mut month_start = from.with_day(1).unwrap_or(from);
    while out.len() < count {
        let Some(next) = month_start.checked_add_months(Months::new(1)) else { break };
        if let Some(end) = next.pred_opt() {
            if end >= from {
                out.push(end);
            }
        }
        month_start = next;
    }
    out
}
