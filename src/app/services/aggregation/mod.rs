//! Aggregation of parsed daily records for reporting
//!
//! Pure reductions over the parser output:
//! - [`summarize`]: totals, average CPA and number of active channels
//! - [`platform_breakdown`]: per-platform totals in first-seen order
//! - [`time_series`]: one bucket per date with a value per platform
//!
//! None of these functions fail. Empty input produces zeroed or empty results.
//!
//! # Examples
//!
//! ```
//! use monthsum::app::services::aggregation::{platform_breakdown, summarize};
//! use monthsum::parse_export;
//!
//! let records = parse_export("FACEBOOK\n2024-01-01\t\t\t\t\t\t1000\t5");
//! let summary = summarize(&records);
//!
//! assert_eq!(summary.total_spend, 1000.0);
//! assert_eq!(summary.avg_cpa, 200.0);
//! assert_eq!(platform_breakdown(&records)[0].spend_share, 100.0);
//! ```

pub mod breakdown;
pub mod summary;
pub mod timeseries;

#[cfg(test)]
pub mod tests;

pub use breakdown::{PlatformBreakdown, platform_breakdown};
pub use summary::{SummaryStats, summarize};
pub use timeseries::{DatePoint, Metric, TimeSeries, time_series};
