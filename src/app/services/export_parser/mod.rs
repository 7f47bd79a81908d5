//! Export parser for copy-pasted advertising platform reports
//!
//! This module turns a pasted block of tab-separated text, possibly several
//! platforms' exports one after another, into normalized daily records. It never
//! fails: lines it cannot classify are skipped and reported in the parse
//! statistics.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line scan orchestration and the per-line step function
//! - [`header`] - Header lines that switch the scan into a platform mode
//! - [`row_classifier`] - Platform resolution from mode or column signature
//! - [`column_mapping`] - Metric extraction through a platform's column map
//! - [`field_parsers`] - Date and numeric field parsing
//! - [`rejection`] - Reasons a line did not produce a record
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Resolution policy
//!
//! A header line always sets the platform for the lines after it. Column
//! signatures only classify rows that appear before any header. Each platform has
//! exactly one column map, whichever way its rows were recognized.
//!
//! ## Usage
//!
//! ```rust
//! use monthsum::app::services::export_parser::{ExportParser, parse_export};
//! use monthsum::{ParserConfig, Platform};
//!
//! let records = parse_export("FACEBOOK\n2024-01-01\t\t\t\t\t\t1000\t5");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].platform, Platform::Facebook);
//!
//! let parser = ExportParser::new(ParserConfig::default().with_usd_rate(3.5));
//! let result = parser.parse("2024-01-03\t100\t0.5\t2000\t1.2%\t24\t20\t20%\t5");
//! assert_eq!(result.records[0].spend, 350.0);
//! println!("{}", result.stats.summary());
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod rejection;
pub mod row_classifier;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::SplitRow;
pub use header::HeaderMatcher;
pub use parser::{ExportParser, LineOutcome};
pub use rejection::RowRejection;
pub use stats::{ParseResult, ParseStats};

use crate::app::models::DailyDataPoint;

/// Parse a pasted export with the default configuration
///
/// Returns the records in input order; an empty vector means no line could be
/// classified.
pub fn parse_export(raw: &str) -> Vec<DailyDataPoint> {
    ExportParser::default().parse(raw).records
}
