//! Tests for headline totals

use super::*;
use crate::app::services::aggregation::{SummaryStats, summarize};

#[test]
fn test_summarize_sample() {
    let summary = summarize(&create_sample_records());

    assert_close(summary.total_spend, 1100.0);
    assert_close(summary.total_conversions, 10.0);
    assert_close(summary.avg_cpa, 110.0);
    assert_eq!(summary.active_channels, 3);
    assert!(!summary.is_empty());
}

#[test]
fn test_summarize_empty() {
    let summary = summarize(&[]);

    assert_eq!(summary, SummaryStats::default());
    assert!(summary.is_empty());
}

#[test]
fn test_avg_cpa_zero_without_conversions() {
    let records = vec![DailyDataPoint::new("2024-01-01", Platform::TikTok, 50.0, 0.0)];
    let summary = summarize(&records);

    assert_eq!(summary.total_spend, 50.0);
    assert_eq!(summary.avg_cpa, 0.0);
    assert_eq!(summary.active_channels, 1);
}
