//! Parsing statistics and result structures for export processing
//!
//! This module provides types for tracking what happened to every input line
//! and organizing parsed records for the aggregation step.

use crate::app::models::DailyDataPoint;

/// Parsing result with records and per-invocation statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Records in input order
    pub records: Vec<DailyDataPoint>,

    /// Line accounting and diagnostics for this parse
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check whether no line produced a record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Line accounting for one parse
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of input lines
    pub total_lines: usize,

    /// Lines that were empty after trimming
    pub blank_lines: usize,

    /// Header lines that switched the platform mode
    pub mode_switches: usize,

    /// Number of records emitted
    pub records_parsed: usize,

    /// Data lines that produced no record
    pub lines_skipped: usize,

    /// Why each skipped line was skipped
    pub errors: Vec<String>,

    /// Problems tolerated on lines that still produced a record
    pub warnings: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            blank_lines: 0,
            mode_switches: 0,
            records_parsed: 0,
            lines_skipped: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a skipped data line
    pub fn add_skipped(&mut self, message: String) {
        self.lines_skipped += 1;
        self.errors.push(message);
    }

    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Lines that were neither blank nor headers
    pub fn data_lines(&self) -> usize {
        self.total_lines
            .saturating_sub(self.blank_lines)
            .saturating_sub(self.mode_switches)
    }

    /// Calculate the share of data lines that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        let data_lines = self.data_lines();
        if data_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / data_lines as f64) * 100.0
        }
    }

    /// Get summary of parse statistics
    pub fn summary(&self) -> String {
        format!(
            "Parse Summary: {} lines -> {} records ({:.1}% of data lines) | \
             Headers: {} | Skipped: {} | Warnings: {}",
            self.total_lines,
            self.records_parsed,
            self.success_rate(),
            self.mode_switches,
            self.lines_skipped,
            self.warnings.len()
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
