// File: crates/dash-core/tests/kpi.rs
// Purpose: KPI cards: values, captions, trends and empty inputs.

mod common;

use dash_core::dataset::Dataset;
use dash_core::kpi::{summarize, KpiInputs, Trend, MISSING};
use dash_core::theme::Role;

#[test]
fn six_cards_in_display_order() {
    let (sales, regional, performance, prices) = (common::sales(), common::regional(), common::performance(), common::prices(30));
    let cards = summarize(&KpiInputs { sales: &sales, regional: &regional, performance: &performance, prices: &prices }).unwrap();

    let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Total Revenue", "Total Customers", "Avg. Satisfaction", "Avg. Growth Rate", "Avg. Performance", "Latest Price"]
    );

    assert_eq!(cards[0].value, "$56,000");
    // March total equals February total.
    assert_eq!(cards[0].trend, Some(Trend::Flat));
    assert_eq!(cards[1].value, "8,000");
    assert_eq!(cards[1].caption, "across 3 regions");
    assert_eq!(cards[2].value, "4.4/5.0");
    assert_eq!(cards[3].value, "10.0%");
    assert_eq!(cards[3].trend, Some(Trend::Up));
    assert_eq!(cards[4].value, "80.0%");
    assert_eq!(cards[5].value, "$129.00");
    assert_eq!(cards[5].trend, Some(Trend::Up));
    assert!(cards[5].caption.starts_with("↑ +0.8%"));
    assert_eq!(cards[0].accent, Role::AccentPrimary);
}

#[test]
fn empty_inputs_show_placeholders() {
    let empty = Dataset::new("empty");
    let cards = summarize(&KpiInputs { sales: &empty, regional: &empty, performance: &empty, prices: &empty }).unwrap();
    assert_eq!(cards.len(), 6);
    assert!(cards.iter().all(|c| c.value == MISSING && c.trend.is_none()));
}

#[test]
fn trend_threshold_is_half_a_percent() {
    assert_eq!(Trend::from_delta(0.49), Trend::Flat);
    assert_eq!(Trend::from_delta(-0.49), Trend::Flat);
    assert_eq!(Trend::from_delta(0.5), Trend::Up);
    assert_eq!(Trend::from_delta(-3.0), Trend::Down);
    assert_eq!(Trend::Down.role(), Role::Negative);
}

#[test]
fn missing_column_is_an_error() {
    let sales = common::sales();
    let wrong = common::scatter();
    let result = summarize(&KpiInputs { sales: &sales, regional: &wrong, performance: &wrong, prices: &wrong });
    assert!(result.is_err());
}
