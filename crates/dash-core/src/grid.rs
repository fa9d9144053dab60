// File: crates/dash-core/src/grid.rs
// Summary: Grid/tick layout helpers for numeric and calendar axes.

use chrono::{Datelike, Duration, NaiveDate};

use crate::dataset::{date_to_millis, millis_to_date};
use crate::scale::Range;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` step up to 1, 2, 2.5 or 5 × 10^k.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 2.5 { 2.5 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Evenly spaced round values inside `range`, about `target` of them.
pub fn nice_ticks(range: Range, target: usize) -> Vec<f64> {
    let span = range.span();
    if span <= 0.0 || !span.is_finite() { return vec![range.start]; }
    let step = nice_step(span / target.max(1) as f64);
    let first = (range.start / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= range.end + step * 1e-9 {
        // snap away float noise like 0.30000000000000004
        out.push((v / step).round() * step);
        v += step;
    }
    out
}

/// Calendar-aligned ticks for a range of epoch milliseconds: month starts for
/// long spans, whole days otherwise.
pub fn date_ticks(range: Range, target: usize) -> Vec<f64> {
    let (Some(start), Some(end)) = (millis_to_date(range.start), millis_to_date(range.end)) else {
        return Vec::new();
    };
    let days = (end - start).num_days().max(1);
    let target = target.max(1) as i64;
    if days > 62 {
        let months = (days / 30).max(1);
        let every = ((months + target - 1) / target).max(1) as u32;
        let mut cursor = NaiveDate::from_ymd_opt(start.year(), start.month(), 1).unwrap_or(start);
        let mut out = Vec::new();
        while cursor <= end {
            let ms = date_to_millis(cursor);
            if range.contains(ms) { out.push(ms); }
            cursor = add_months(cursor, every);
        }
        out
    } else {
        let step = [1, 2, 7, 14, 28].into_iter().find(|s| days / s <= target).unwrap_or(28);
        let mut cursor = start;
        let mut out = Vec::new();
        while cursor <= end {
            let ms = date_to_millis(cursor);
            if range.contains(ms) { out.push(ms); }
            cursor += Duration::days(step);
        }
        out
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    NaiveDate::from_ymd_opt(total.div_euclid(12), total.rem_euclid(12) as u32 + 1, 1).unwrap_or(date)
}
