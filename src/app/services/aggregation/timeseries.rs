//! Daily series per platform for charting

use std::collections::BTreeMap;

use serde::Serialize;

use crate::app::models::{DailyDataPoint, Platform};

/// Value plotted for each record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Spend,
    Conversions,
    Cpa,
}

impl Metric {
    /// Value one record contributes to its date bucket
    pub fn value(self, record: &DailyDataPoint) -> f64 {
        match self {
            Metric::Spend => record.spend,
            Metric::Conversions => record.conversions,
            Metric::Cpa => record.cpa(),
        }
    }
}

/// One date bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePoint {
    pub date: String,
    pub values: BTreeMap<Platform, f64>,
}

impl DatePoint {
    /// Value for a platform, 0 when it reported nothing that day
    pub fn value(&self, platform: Platform) -> f64 {
        self.values.get(&platform).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub metric: Metric,

    /// Platforms in the order they first appear in the records
    pub platforms: Vec<Platform>,

    /// Buckets sorted by date ascending
    pub points: Vec<DatePoint>,
}

impl TimeSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Bucket records by date and sum the chosen metric per platform
///
/// Dates are `YYYY-MM-DD` strings, so lexical order is chronological order.
/// For [`Metric::Cpa`] the per-row CPA values are summed, so a day with two
/// rows for one platform shows the sum of both rows' CPA.
pub fn time_series(records: &[DailyDataPoint], metric: Metric) -> TimeSeries {
    let mut platforms = Vec::new();
    let mut buckets: BTreeMap<&str, BTreeMap<Platform, f64>> = BTreeMap::new();

    for record in records {
        if !platforms.contains(&record.platform) {
            platforms.push(record.platform);
        }

        *buckets
            .entry(record.date.as_str())
            .or_default()
            .entry(record.platform)
            .or_insert(0.0) += metric.value(record);
    }

    let points = buckets
        .into_iter()
        .map(|(date, values)| DatePoint {
            date: date.to_string(),
            values,
        })
        .collect();

    TimeSeries {
        metric,
        platforms,
        points,
    }
}
