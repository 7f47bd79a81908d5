//! Parse command implementation
//!
//! Prints the normalized daily records, one per line, so the output can be
//! pasted back into a spreadsheet or piped into other tools.

use crate::app::services::export_parser::{ParseResult, ParseStats};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::{Error, Result};
use colored::*;
use std::io::Write;

use super::shared::{ensure_records, load_configuration, read_and_parse, setup_logging};

/// Run the parse command
pub fn run_parse(args: ParseArgs) -> Result<ParseStats> {
    setup_logging(&args.common)?;
    args.common.validate()?;

    let config = load_configuration(&args.common)?;
    let result = read_and_parse(&args.common, &config)?;
    let result = check_records(result, args.show_skipped, &mut std::io::stderr())?;

    let output = match args.common.output_format {
        OutputFormat::Text => render_text_records(&result, args.show_skipped),
        OutputFormat::Json => render_json_records(&result, args.show_skipped)?,
    };
    println!("{}", output);

    if args.common.output_format == OutputFormat::Text && !args.common.quiet {
        eprintln!("{}", result.stats.summary().dimmed());
    }

    Ok(result.stats)
}

/// Require at least one record
///
/// With `show_skipped`, an input where every line was rejected still gets its
/// skip reasons written to `diagnostics` before failing with [`Error::NoData`].
pub fn check_records<W: Write>(
    result: ParseResult,
    show_skipped: bool,
    diagnostics: &mut W,
) -> Result<ParseResult> {
    if result.is_empty() && show_skipped && !result.stats.errors.is_empty() {
        let mut listing = format!("{}\n", "Skipped lines:".bright_yellow().bold());
        for message in &result.stats.errors {
            listing.push_str(&format!("   {}\n", message));
        }
        diagnostics
            .write_all(listing.as_bytes())
            .map_err(|e| Error::io("Failed to write skipped lines", e))?;
    }

    ensure_records(result)
}

/// Tab-separated records with a header line
pub fn render_text_records(result: &ParseResult, show_skipped: bool) -> String {
    let mut output = String::from("date\tplatform\tspend\tconversions\n");

    for record in &result.records {
        output.push_str(&format!(
            "{}\t{}\t{:.2}\t{}\n",
            record.date, record.platform, record.spend, record.conversions
        ));
    }

    if show_skipped && !result.stats.errors.is_empty() {
        output.push('\n');
        output.push_str(&format!("{}\n", "Skipped lines:".bright_yellow().bold()));
        for message in &result.stats.errors {
            output.push_str(&format!("   {}\n", message));
        }
    }

    output
}

/// Records plus diagnostics as pretty-printed JSON
pub fn render_json_records(result: &ParseResult, show_skipped: bool) -> Result<String> {
    use serde_json::json;

    let mut json_output = json!({
        "metadata": {
            "stats": result.stats,
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "records": result.records
    });

    if !show_skipped {
        if let Some(stats) = json_output["metadata"]["stats"].as_object_mut() {
            stats.remove("errors");
        }
    }

    serde_json::to_string_pretty(&json_output)
        .map_err(|e| Error::serialization("Failed to serialize records", e))
}
