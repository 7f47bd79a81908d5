//! Headline totals across every platform

use std::collections::HashSet;

use serde::Serialize;

use crate::app::models::DailyDataPoint;

/// Totals shown at the top of a report
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SummaryStats {
    pub total_spend: f64,
    pub total_conversions: f64,

    /// Total spend per conversion, 0 when there were no conversions
    pub avg_cpa: f64,

    /// Number of distinct platforms with at least one record
    pub active_channels: usize,
}

impl SummaryStats {
    pub fn is_empty(&self) -> bool {
        self.active_channels == 0
    }
}

/// Reduce records into headline totals
pub fn summarize(records: &[DailyDataPoint]) -> SummaryStats {
    let total_spend: f64 = records.iter().map(|r| r.spend).sum();
    let total_conversions: f64 = records.iter().map(|r| r.conversions).sum();

    let avg_cpa = if total_conversions > 0.0 {
        total_spend / total_conversions
    } else {
        0.0
    };

    let active_channels = records
        .iter()
        .map(|r| r.platform)
        .collect::<HashSet<_>>()
        .len();

    SummaryStats {
        total_spend,
        total_conversions,
        avg_cpa,
        active_channels,
    }
}
