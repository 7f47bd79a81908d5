//! Test utilities and fixtures for export parser testing
//!
//! This module provides sample exports and helper functions used across the
//! parser test modules.

use crate::app::models::{DailyDataPoint, Platform};

mod header_tests;
mod stats_tests;

/// Helper to create a paste of all four platforms' exports in sequence
///
/// 18 lines: 3 blank, 6 headers, 7 daily rows, 1 totals row and 1 untranslated
/// column-title row.
pub fn create_multi_platform_export() -> String {
    [
        "FACEBOOK",
        "Day\tReach\tImpressions\tFrequency\tCurrency\tAmount spent (ILS)\tLeads\tCost per lead",
        "\t2024-01-01\t12,000\t15,500\t1.29\tILS\t1,000\t5\t200",
        "\t2024-01-02\t11,000\t14,000\t1.27\tILS\t850.50\t4\t212.63",
        "\tAll\t23,000\t29,500\t1.28\tILS\t1,850.50\t9\t205.61",
        "",
        "TIKTOK",
        "Day\tCost (USD)\tCPC\tImpressions\tCTR\tClicks\tCost/Conv\tCVR\tConversions",
        "2024-01-01\t100\t0.5\t20000\t1%\t200\t20\t2.5%\t5",
        "2024-01-02\t50\t0.4\t15000\t0.9%\t125\t25\t1.6%\t2",
        "",
        "GOOGLE PMAX",
        "קמפיין\tיום\tקליקים\tחשיפות\tשיעור קליקים\tעלות ממוצעת\tערך המרה\tמחיר\tהמרות",
        "Summer PMAX Campaign\t2024-01-01\t120\t3,400\t3.5%\t2.1\t0\t500\t2",
        "Summer PMAX Campaign\t2024-01-02\t95\t2,900\t3.3%\t2.4\t0\t1,250\t3",
        "",
        "GOOGLE SEARCH",
        "Brand Search\t2024-01-01\t80\t1,200\t6.7%\t3.1\t0\t1,234.50\t3.5",
    ]
    .join("\n")
}

/// Helper to create a paste with no section headers, classified by signature only
pub fn create_headerless_export() -> String {
    [
        "Facebook\t2024-02-01\t9,000\t11,000\t1.22\tILS\t700\t7\t100",
        "Facebook\tAll\t9,000\t11,000\t1.22\tILS\t700\t7\t100",
        "2024-02-01\t20\t0.3\t8000\t1.1%\t88\t10\t2.3%\t2",
        "Retargeting Search\t2024-02-01\t40\t600\t6.6%\t2.5\t0\t300\t1",
        "Generic Display\t2024-02-01\t40\t600\t6.6%\t2.5\t0\t300\t1",
    ]
    .join("\n")
}

/// Helper to compare money values produced by currency conversion
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Helper to build an expected record
pub fn point(date: &str, platform: Platform, spend: f64, conversions: f64) -> DailyDataPoint {
    DailyDataPoint::new(date, platform, spend, conversions)
}
