//! Core export parser implementation
//!
//! This module provides the line scan: every line goes through [`ExportParser::step`],
//! which takes the current scan mode and returns the next mode together with
//! what the line produced. [`ExportParser::parse`] threads the mode through the
//! whole input and collects records and statistics.

use tracing::{debug, info, warn};

use super::column_mapping::{SplitRow, extract_metrics};
use super::header::HeaderMatcher;
use super::rejection::RowRejection;
use super::row_classifier::classify_row;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{DailyDataPoint, Platform, ScanMode};
use crate::config::ParserConfig;

/// What a single input line produced
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Empty after trimming
    Blank,

    /// Header line; the scan is now in this platform's mode
    ModeSwitch(Platform),

    /// Data row that produced a record
    Record {
        point: DailyDataPoint,
        warnings: Vec<String>,
    },

    /// Data row that produced nothing
    Skipped(RowRejection),
}

/// Parser for pasted advertising exports
///
/// Holds only immutable configuration, so one parser can serve any number of
/// concurrent parses.
#[derive(Debug, Clone)]
pub struct ExportParser {
    config: ParserConfig,
    headers: HeaderMatcher,
}

impl Default for ExportParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl ExportParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        let headers = HeaderMatcher::new(&config.header_rules);
        Self { config, headers }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a pasted export and return records with statistics
    ///
    /// Never fails. Lines that cannot be classified are skipped and listed in
    /// `stats.errors`.
    pub fn parse(&self, raw: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();
        let mut mode = ScanMode::Unset;

        for (index, line) in raw.lines().enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;

            let (next_mode, outcome) = self.step(mode, line);
            mode = next_mode;

            match outcome {
                LineOutcome::Blank => stats.blank_lines += 1,
                LineOutcome::ModeSwitch(platform) => {
                    stats.mode_switches += 1;
                    debug!("Line {}: switched to {} mode", line_number, platform);
                }
                LineOutcome::Record { point, warnings } => {
                    for warning in warnings {
                        debug!("Line {}: {}", line_number, warning);
                        stats.add_warning(format!("Line {}: {}", line_number, warning));
                    }
                    records.push(point);
                    stats.records_parsed += 1;
                }
                LineOutcome::Skipped(reason) => {
                    debug!("Skipped line {}: {}", line_number, reason);
                    stats.add_skipped(format!("Line {}: {}", line_number, reason));
                }
            }
        }

        if records.is_empty() {
            warn!(
                "No records found in {} lines of input ({} skipped)",
                stats.total_lines, stats.lines_skipped
            );
        } else {
            info!(
                "Parsed {} records from {} lines ({} skipped)",
                stats.records_parsed, stats.total_lines, stats.lines_skipped
            );
        }

        ParseResult { records, stats }
    }

    /// Process one line given the current scan mode
    ///
    /// Pure: the returned mode is the only state carried to the next line.
    pub fn step(&self, mode: ScanMode, line: &str) -> (ScanMode, LineOutcome) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (mode, LineOutcome::Blank);
        }

        if let Some(platform) = self.headers.detect(trimmed) {
            return (ScanMode::Known(platform), LineOutcome::ModeSwitch(platform));
        }

        let row = SplitRow::split(line);
        let outcome = match self.build_record(&row, mode) {
            Ok((point, warnings)) => LineOutcome::Record { point, warnings },
            Err(reason) => LineOutcome::Skipped(reason),
        };

        (mode, outcome)
    }

    /// Classify a data row and read its metrics into a record
    fn build_record(
        &self,
        row: &SplitRow<'_>,
        mode: ScanMode,
    ) -> Result<(DailyDataPoint, Vec<String>), RowRejection> {
        let classified = classify_row(row, mode)?;

        let map = self
            .config
            .layout(classified.platform)
            .ok_or(RowRejection::MissingLayout {
                platform: classified.platform,
            })?;

        let metrics = extract_metrics(row, map, classified.date_index)?;
        let spend = self.config.to_reporting_currency(metrics.spend, map.currency);

        let point = DailyDataPoint::new(
            classified.date,
            classified.platform,
            spend,
            metrics.conversions,
        );

        Ok((point, metrics.warnings))
    }
}
