//! Report command implementation
//!
//! Parses the export and prints the monthly dashboard numbers: headline
//! totals, the per-platform breakdown and the daily series.

use crate::app::services::aggregation::{
    Metric, PlatformBreakdown, SummaryStats, TimeSeries, platform_breakdown, summarize,
    time_series,
};
use crate::app::services::export_parser::{ParseResult, ParseStats};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::ParserConfig;
use crate::{Error, Result};
use colored::*;
use tracing::info;

use super::shared::{format_count, format_currency, load_configuration, parse_input, setup_logging};

/// Everything a report shows, computed once from the parse result
#[derive(Debug, Clone)]
pub struct Report {
    pub summary: SummaryStats,
    pub breakdown: Vec<PlatformBreakdown>,
    pub series: Option<TimeSeries>,
}

impl Report {
    pub fn build(result: &ParseResult, metric: Option<Metric>) -> Self {
        Self {
            summary: summarize(&result.records),
            breakdown: platform_breakdown(&result.records),
            series: metric.map(|metric| time_series(&result.records, metric)),
        }
    }
}

/// Run the report command
pub fn run_report(args: ReportArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    args.common.validate()?;

    let config = load_configuration(&args.common)?;
    let result = parse_input(&args.common, &config)?;

    let metric = (!args.no_series).then(|| Metric::from(args.metric));
    let report = Report::build(&result, metric);

    let output = match args.common.output_format {
        OutputFormat::Text => render_text_report(&report, &result.stats),
        OutputFormat::Json => render_json_report(&report, &result.stats, &config)?,
    };
    println!("{}", output);

    info!(
        "Reported {} records across {} platforms",
        result.record_count(),
        report.summary.active_channels
    );
    Ok(result.stats)
}

/// Render the report for a terminal
pub fn render_text_report(report: &Report, stats: &ParseStats) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    output.push_str(&format!("{}\n", "Monthly Summary".bright_green().bold()));
    output.push_str(&format!(
        "   Total spend:        {}\n",
        format_currency(summary.total_spend).bright_white().bold()
    ));
    output.push_str(&format!(
        "   Total conversions:  {}\n",
        format_count(summary.total_conversions).bright_white().bold()
    ));
    output.push_str(&format!(
        "   Average CPA:        {}\n",
        format_currency(summary.avg_cpa).bright_white().bold()
    ));
    output.push_str(&format!(
        "   Active channels:    {}\n",
        summary.active_channels.to_string().bright_white().bold()
    ));
    output.push('\n');

    output.push_str(&format!("{}\n", "Platform Breakdown".bright_green().bold()));
    output.push_str(&format!(
        "   {:<14} | {:>14} | {:>11} | {:>12} | {:>6}\n",
        "Platform", "Spend", "Conversions", "CPA", "Share"
    ));
    output.push_str(&format!("   {}\n", "-".repeat(71)));
    for entry in &report.breakdown {
        output.push_str(&format!(
            "   {:<14} | {:>14} | {:>11} | {:>12} | {:>5.1}%\n",
            entry.platform.name(),
            format_currency(entry.spend),
            format_count(entry.conversions),
            format_currency(entry.cpa),
            entry.spend_share
        ));
    }

    if let Some(series) = &report.series {
        output.push('\n');
        output.push_str(&render_text_series(series));
    }

    output.push('\n');
    let skipped = if stats.lines_skipped > 0 {
        stats.lines_skipped.to_string().bright_yellow().bold()
    } else {
        stats.lines_skipped.to_string().normal()
    };
    output.push_str(&format!(
        "{} records from {} lines, {} skipped\n",
        stats.records_parsed, stats.total_lines, skipped
    ));

    output
}

fn render_text_series(series: &TimeSeries) -> String {
    let title = match series.metric {
        Metric::Spend => "Daily Spend",
        Metric::Conversions => "Daily Conversions",
        Metric::Cpa => "Daily CPA",
    };

    let mut output = format!("{}\n", title.bright_green().bold());
    output.push_str(&format!("   {:<10}", "Date"));
    for platform in &series.platforms {
        output.push_str(&format!(" | {:>13}", platform.name()));
    }
    output.push('\n');

    for point in &series.points {
        output.push_str(&format!("   {:<10}", point.date));
        for platform in &series.platforms {
            let value = point.value(*platform);
            let cell = match series.metric {
                Metric::Conversions => format_count(value),
                Metric::Spend | Metric::Cpa => format_currency(value),
            };
            output.push_str(&format!(" | {:>13}", cell));
        }
        output.push('\n');
    }

    output
}

/// Render the report as pretty-printed JSON
pub fn render_json_report(
    report: &Report,
    stats: &ParseStats,
    config: &ParserConfig,
) -> Result<String> {
    use serde_json::json;

    let json_report = json!({
        "metadata": {
            "usd_to_ils_rate": config.usd_to_ils_rate,
            "total_lines": stats.total_lines,
            "records": stats.records_parsed,
            "lines_skipped": stats.lines_skipped,
            "warnings": stats.warnings.len(),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "summary": report.summary,
        "platforms": report.breakdown,
        "series": report.series
    });

    serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::serialization("Failed to serialize report", e))
}
