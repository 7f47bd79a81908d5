//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, input parsing and number formatting
//! used by every command.

use crate::app::services::export_parser::{ExportParser, ParseResult};
use crate::cli::args::CommonArgs;
use crate::cli::input::read_input;
use crate::config::ParserConfig;
use crate::constants::{LOG_TARGET, REPORTING_CURRENCY_SYMBOL, THOUSANDS_SEPARATOR};
use crate::{Error, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<ParserConfig> {
    info!("Loading configuration");

    let config = ParserConfig::load_layered(args.config_file.as_deref(), args.usd_rate)?;

    debug!(
        "Using USD->ILS rate {} with {} header rules",
        config.usd_to_ils_rate,
        config.header_rules.len()
    );
    Ok(config)
}

/// Read the export named by the arguments and parse it
///
/// Fails with [`Error::NoData`] when no line produced a record.
pub fn parse_input(args: &CommonArgs, config: &ParserConfig) -> Result<ParseResult> {
    ensure_records(read_and_parse(args, config)?)
}

/// Read the export named by the arguments and parse it, records or not
pub fn read_and_parse(args: &CommonArgs, config: &ParserConfig) -> Result<ParseResult> {
    let source = args.input_source();
    info!("Reading export from {}", source.describe());

    let raw = read_input(&source)?;
    let result = ExportParser::new(config.clone()).parse(&raw);
    info!("{}", result.stats.summary());
    Ok(result)
}

/// Parse already-loaded export text, rejecting input without records
pub fn parse_text(raw: &str, config: &ParserConfig) -> Result<ParseResult> {
    let result = ExportParser::new(config.clone()).parse(raw);
    info!("{}", result.stats.summary());
    ensure_records(result)
}

/// Fail with [`Error::NoData`] when no line produced a record
pub fn ensure_records(result: ParseResult) -> Result<ParseResult> {
    if result.is_empty() {
        return Err(Error::NoData);
    }
    Ok(result)
}

/// Group the integer digits of a formatted number in threes
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an amount in the reporting currency, e.g. `₪1,234.50`
pub fn format_currency(amount: f64) -> String {
    format!(
        "{}{}",
        REPORTING_CURRENCY_SYMBOL,
        group_thousands(&format!("{:.2}", amount))
    )
}

/// Format a count that may be fractional, e.g. `1,204` or `3.5`
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(&format!("{:.0}", value))
    } else {
        group_thousands(&format!("{:.1}", value))
    }
}
