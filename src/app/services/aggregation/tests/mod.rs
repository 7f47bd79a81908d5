//! Tests for record aggregation

pub use crate::app::models::{DailyDataPoint, Platform};

mod breakdown_tests;
mod summary_tests;
mod timeseries_tests;

/// Records from a small month across three platforms, in input order
pub fn create_sample_records() -> Vec<DailyDataPoint> {
    vec![
        DailyDataPoint::new("2024-01-02", Platform::Facebook, 300.0, 3.0),
        DailyDataPoint::new("2024-01-01", Platform::Facebook, 100.0, 1.0),
        DailyDataPoint::new("2024-01-01", Platform::TikTok, 370.0, 0.0),
        DailyDataPoint::new("2024-01-02", Platform::GooglePMax, 230.0, 2.0),
        DailyDataPoint::new("2024-01-02", Platform::Facebook, 100.0, 4.0),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
