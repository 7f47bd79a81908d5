//! Per-platform totals

use serde::Serialize;

use crate::app::models::{DailyDataPoint, Platform};

/// Totals for one platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub spend: f64,
    pub conversions: f64,

    /// Spend per conversion; equals `spend` when there were no conversions
    pub cpa: f64,

    /// Percentage of the total spend across all platforms
    pub spend_share: f64,
}

/// Group records by platform, in the order platforms first appear
///
/// A platform with spend but zero conversions reports its whole spend as CPA
/// rather than infinity or zero, matching how the dashboard has always shown it.
pub fn platform_breakdown(records: &[DailyDataPoint]) -> Vec<PlatformBreakdown> {
    let mut totals: Vec<(Platform, f64, f64)> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|(p, _, _)| *p == record.platform) {
            Some((_, spend, conversions)) => {
                *spend += record.spend;
                *conversions += record.conversions;
            }
            None => totals.push((record.platform, record.spend, record.conversions)),
        }
    }

    let grand_total: f64 = totals.iter().map(|(_, spend, _)| spend).sum();

    totals
        .into_iter()
        .map(|(platform, spend, conversions)| PlatformBreakdown {
            platform,
            spend,
            conversions,
            cpa: if conversions > 0.0 {
                spend / conversions
            } else {
                spend
            },
            spend_share: if grand_total > 0.0 {
                spend / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
