//! Tests for parsing statistics functionality

use super::super::stats::{ParseResult, ParseStats};
use super::*;

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_lines: 20,
        blank_lines: 4,
        mode_switches: 6,
        records_parsed: 8,
        lines_skipped: 2,
        errors: vec!["Error 1".to_string(), "Error 2".to_string()],
        warnings: vec![],
    };

    assert_eq!(stats.data_lines(), 10);
    assert_eq!(stats.success_rate(), 80.0);
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_lines, 0);
    assert_eq!(empty_stats.records_parsed, 0);
    assert_eq!(empty_stats.lines_skipped, 0);
    assert!(empty_stats.errors.is_empty());
    assert!(empty_stats.warnings.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert_eq!(empty_stats, ParseStats::default());
}

#[test]
fn test_parse_stats_add_skipped() {
    let mut stats = ParseStats::new();

    stats.add_skipped("Line 3: totals row".to_string());
    stats.add_skipped("Line 9: no YYYY-MM-DD date column".to_string());
    stats.add_warning("Line 4: spend column 6 holds non-numeric value 'x', using 0".to_string());

    assert_eq!(stats.lines_skipped, 2);
    assert_eq!(stats.errors.len(), 2);
    assert_eq!(stats.errors[0], "Line 3: totals row");
    assert_eq!(stats.warnings.len(), 1);
}

#[test]
fn test_parse_stats_summary() {
    let result = crate::app::services::export_parser::ExportParser::default()
        .parse(&create_multi_platform_export());
    let summary = result.stats.summary();

    assert!(summary.contains("18 lines -> 7 records"));
    assert!(summary.contains("Headers: 6"));
    assert!(summary.contains("Skipped: 2"));
}

#[test]
fn test_parse_result_helpers() {
    let result = ParseResult {
        records: vec![point("2024-01-01", Platform::Facebook, 10.0, 1.0)],
        stats: ParseStats::new(),
    };

    assert_eq!(result.record_count(), 1);
    assert!(!result.is_empty());
}
