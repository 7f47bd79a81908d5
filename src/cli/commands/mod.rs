//! Command implementations for the MonthSum CLI
//!
//! Each command lives in its own module:
//! - `report`: totals, platform breakdown and daily series
//! - `parse`: normalized daily records with parse diagnostics

pub mod parse;
pub mod report;
pub mod shared;

use crate::Result;
use crate::app::services::export_parser::ParseStats;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the subcommand handler and returns the parse statistics of
/// the run.
pub fn run(args: Args) -> Result<ParseStats> {
    match args.command {
        Some(Commands::Report(report_args)) => report::run_report(report_args),
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args),
        None => Err(crate::Error::configuration(
            "No command given; use `monthsum report` or `monthsum parse`",
        )),
    }
}
