//! Command-line argument definitions for MonthSum
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::aggregation::Metric;
use crate::cli::input::InputSource;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the MonthSum report tool
///
/// Reads a pasted advertising export and turns it into monthly totals per
/// platform.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "monthsum",
    version,
    about = "Summarize copy-pasted Facebook, TikTok and Google Ads exports",
    long_about = "Reads tab-separated exports pasted from the Facebook, TikTok and Google Ads \
                  dashboards, detects which platform each row belongs to, converts TikTok's USD \
                  cost to ILS and prints monthly spend, conversions and cost per acquisition."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print totals, per-platform breakdown and the daily series
    Report(ReportArgs),
    /// Print the normalized daily records
    Parse(ParseArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// File holding the pasted export
    ///
    /// Reads standard input when omitted or when set to "-".
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Export file to read (default: stdin)"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to parser configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long = "usd-rate",
        value_name = "RATE",
        help = "USD to ILS exchange rate applied to TikTok cost"
    )]
    pub usd_rate: Option<f64>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(
        long = "metric",
        value_enum,
        default_value = "spend",
        help = "Value plotted in the daily series"
    )]
    pub metric: SeriesMetric,

    #[arg(long = "no-series", help = "Leave the daily series out of the report")]
    pub no_series: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(
        long = "show-skipped",
        help = "List every skipped line and the reason it was skipped"
    )]
    pub show_skipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesMetric {
    Spend,
    Conversions,
    Cpa,
}

impl From<SeriesMetric> for Metric {
    fn from(metric: SeriesMetric) -> Self {
        match metric {
            SeriesMetric::Spend => Metric::Spend,
            SeriesMetric::Conversions => Metric::Conversions,
            SeriesMetric::Cpa => Metric::Cpa,
        }
    }
}

impl CommonArgs {
    pub fn validate(&self) -> Result<()> {
        if let Some(rate) = self.usd_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(Error::configuration(format!(
                    "USD rate must be a positive number, got {}",
                    rate
                )));
            }
        }

        if let InputSource::File(path) = self.input_source() {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    path.display()
                )));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Where the export is read from
    pub fn input_source(&self) -> InputSource {
        InputSource::from_arg(self.input.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for CommonArgs {
    fn default() -> Self {
        Self {
            input: None,
            config_file: None,
            usd_rate: None,
            output_format: OutputFormat::Text,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Report(args) => &args.common,
            Commands::Parse(args) => &args.common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_report_command_parsing() {
        let args = Args::try_parse_from([
            "monthsum", "report", "-i", "export.tsv", "--format", "json", "--usd-rate", "3.6",
            "--metric", "cpa", "-vv",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Report(report)) => {
                assert_eq!(report.common.input, Some(PathBuf::from("export.tsv")));
                assert_eq!(report.common.output_format, OutputFormat::Json);
                assert_eq!(report.common.usd_rate, Some(3.6));
                assert_eq!(report.common.get_log_level(), "debug");
                assert_eq!(report.metric, SeriesMetric::Cpa);
                assert!(!report.no_series);
            }
            other => panic!("expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_command_defaults() {
        let args = Args::try_parse_from(["monthsum", "parse"]).unwrap();

        let command = args.command.unwrap();
        let common = command.common();
        assert_eq!(common.input, None);
        assert_eq!(common.output_format, OutputFormat::Text);
        assert_eq!(common.get_log_level(), "warn");
        assert_eq!(common.input_source(), InputSource::Stdin);
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["monthsum"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["monthsum", "report", "-q", "-v"]).is_err());

        let args = Args::try_parse_from(["monthsum", "report", "-q"]).unwrap();
        assert_eq!(args.command.unwrap().common().get_log_level(), "error");
    }

    #[test]
    fn test_validation() {
        assert!(CommonArgs::default().validate().is_ok());

        let bad_rate = CommonArgs {
            usd_rate: Some(0.0),
            ..CommonArgs::default()
        };
        assert!(bad_rate.validate().is_err());

        let missing_input = CommonArgs {
            input: Some(PathBuf::from("/nonexistent/export.tsv")),
            ..CommonArgs::default()
        };
        assert!(missing_input.validate().is_err());

        let stdin_dash = CommonArgs {
            input: Some(PathBuf::from("-")),
            ..CommonArgs::default()
        };
        assert!(stdin_dash.validate().is_ok());

        let file = NamedTempFile::new().unwrap();
        let existing = CommonArgs {
            input: Some(file.path().to_path_buf()),
            config_file: Some(PathBuf::from("/nonexistent/config.json")),
            ..CommonArgs::default()
        };
        assert!(existing.validate().is_err());
    }

    #[test]
    fn test_metric_conversion() {
        assert_eq!(Metric::from(SeriesMetric::Spend), Metric::Spend);
        assert_eq!(Metric::from(SeriesMetric::Cpa), Metric::Cpa);
    }
}
