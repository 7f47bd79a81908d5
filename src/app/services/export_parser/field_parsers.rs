//! Field parsing utilities for export rows
//!
//! Numeric fields in pasted exports carry thousands separators, currency
//! symbols and placeholder dashes; these helpers normalize them before parsing.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{CURRENCY_SYMBOLS, DATE_PATTERN, THOUSANDS_SEPARATOR};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("DATE_PATTERN is a valid regex"));

/// Placeholders exports print instead of a number
const EMPTY_FIELD_MARKERS: &[&str] = &["-", "--"];

/// Result of reading one numeric column
#[derive(Debug, Clone, PartialEq)]
pub enum NumericField {
    /// Column absent, empty or a placeholder
    Missing,
    /// Finite, non-negative number
    Value(f64),
    /// Text that is not a usable amount (kept for diagnostics)
    Invalid(String),
}

impl NumericField {
    pub fn is_value(&self) -> bool {
        matches!(self, NumericField::Value(_))
    }
}

/// Check whether a field is a `YYYY-MM-DD` date
pub fn is_date(field: &str) -> bool {
    DATE_REGEX.is_match(field)
}

/// Strip thousands separators and currency symbols from a numeric field
pub fn clean_numeric(field: &str) -> String {
    field
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR && !CURRENCY_SYMBOLS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse an optional numeric column
///
/// Amounts must be finite and non-negative; anything else is `Invalid`.
pub fn parse_numeric_field(field: Option<&str>) -> NumericField {
    let Some(raw) = field.map(str::trim) else {
        return NumericField::Missing;
    };

    let cleaned = clean_numeric(raw);
    if cleaned.is_empty() || EMPTY_FIELD_MARKERS.contains(&cleaned.as_str()) {
        return NumericField::Missing;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => NumericField::Value(value),
        _ => NumericField::Invalid(raw.to_string()),
    }
}
