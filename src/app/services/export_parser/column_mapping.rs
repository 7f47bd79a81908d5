//! Column splitting and metric extraction
//!
//! Rows are split on tabs into trimmed columns; a platform's [`ColumnMap`]
//! then says where spend and conversions live.

use tracing::debug;

use super::field_parsers::{NumericField, is_date, parse_numeric_field};
use super::rejection::RowRejection;
use crate::config::ColumnMap;
use crate::constants::{FIELD_DELIMITER, signatures};

/// One data line split into trimmed columns
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRow<'a> {
    columns: Vec<&'a str>,
}

impl<'a> SplitRow<'a> {
    /// Split a raw line on tabs
    ///
    /// The untrimmed line must be passed in: a leading tab is an empty first
    /// column and shifts every offset after it.
    pub fn split(line: &'a str) -> Self {
        Self {
            columns: line.split(FIELD_DELIMITER).map(str::trim).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_empty())
    }

    /// Get a column by index
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.columns.get(index).copied()
    }

    /// Check whether the column at `index` is a `YYYY-MM-DD` date
    pub fn is_date_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(is_date)
    }

    /// First column holding a `YYYY-MM-DD` date
    pub fn first_date(&self) -> Option<&'a str> {
        self.first_date_index().and_then(|index| self.get(index))
    }

    /// Position of the first `YYYY-MM-DD` column
    pub fn first_date_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| is_date(c))
    }

    /// Totals rows carry "All" in place of the day
    pub fn is_totals_row(&self) -> bool {
        self.get(1) == Some(signatures::AGGREGATE_ROW_MARKER)
    }
}

/// Metrics read from one row, in the platform's own currency
#[derive(Debug, Clone, PartialEq)]
pub struct RowMetrics {
    pub spend: f64,
    pub conversions: f64,

    /// Problems that were tolerated (e.g. unreadable spend read as 0)
    pub warnings: Vec<String>,
}

/// Read spend and conversions from a row through a column map
///
/// `date_index` is where the row's date was found; date-anchored maps count
/// their offsets from it. Missing or empty columns count as 0. Unreadable
/// spend is also read as 0 and noted; unreadable conversions reject the row.
pub fn extract_metrics(
    row: &SplitRow<'_>,
    map: &ColumnMap,
    date_index: usize,
) -> Result<RowMetrics, RowRejection> {
    let mut warnings = Vec::new();
    let (spend_column, conversions_column) = map.resolve(date_index);

    let spend = match parse_numeric_field(row.get(spend_column)) {
        NumericField::Value(value) => value,
        NumericField::Missing => 0.0,
        NumericField::Invalid(raw) => {
            debug!("Spend column {} = '{}' is not numeric, using 0", spend_column, raw);
            warnings.push(format!(
                "spend column {} holds non-numeric value '{}', using 0",
                spend_column, raw
            ));
            0.0
        }
    };

    let conversions = match parse_numeric_field(row.get(conversions_column)) {
        NumericField::Value(value) => value,
        NumericField::Missing => 0.0,
        NumericField::Invalid(value) => {
            return Err(RowRejection::InvalidConversions {
                column: conversions_column,
                value,
            });
        }
    };

    Ok(RowMetrics {
        spend,
        conversions,
        warnings,
    })
}
