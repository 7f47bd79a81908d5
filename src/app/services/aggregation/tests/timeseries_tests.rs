//! Tests for daily series

use super::*;
use crate::app::services::aggregation::{Metric, time_series};

#[test]
fn test_spend_series_sorted_by_date() {
    let series = time_series(&create_sample_records(), Metric::Spend);

    let dates: Vec<&str> = series.points.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02"]);
    assert_eq!(
        series.platforms,
        vec![Platform::Facebook, Platform::TikTok, Platform::GooglePMax]
    );

    let first = &series.points[0];
    assert_close(first.value(Platform::Facebook), 100.0);
    assert_close(first.value(Platform::TikTok), 370.0);
    assert_eq!(first.value(Platform::GooglePMax), 0.0);

    // Two Facebook rows on the same day are summed
    let second = &series.points[1];
    assert_close(second.value(Platform::Facebook), 400.0);
    assert_close(second.value(Platform::GooglePMax), 230.0);
}

#[test]
fn test_conversions_series() {
    let series = time_series(&create_sample_records(), Metric::Conversions);

    assert_close(series.points[1].value(Platform::Facebook), 7.0);
    assert_eq!(series.metric, Metric::Conversions);
}

#[test]
fn test_cpa_series_sums_row_values() {
    let series = time_series(&create_sample_records(), Metric::Cpa);

    // 300/3 + 100/4
    assert_close(series.points[1].value(Platform::Facebook), 125.0);
    // No conversions contributes 0
    assert_eq!(series.points[0].value(Platform::TikTok), 0.0);
}

#[test]
fn test_series_spend_matches_breakdown() {
    let records = create_sample_records();
    let series = time_series(&records, Metric::Spend);

    for entry in crate::app::services::aggregation::platform_breakdown(&records) {
        let summed: f64 = series.points.iter().map(|p| p.value(entry.platform)).sum();
        assert_close(summed, entry.spend);
    }
}

#[test]
fn test_empty_series() {
    let series = time_series(&[], Metric::Spend);

    assert!(series.is_empty());
    assert!(series.platforms.is_empty());
}
