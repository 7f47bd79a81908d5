//! Reasons a non-blank, non-header line did not produce a record

use crate::app::models::Platform;

/// Why a data line was skipped
///
/// These never reach the caller of `parse` as errors; they are collected in
/// [`super::ParseStats`] and logged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowRejection {
    /// No header has set a platform and no column signature matched
    #[error("no platform header seen and no column signature matched")]
    NoPlatform,

    /// Row has no `YYYY-MM-DD` column
    #[error("no YYYY-MM-DD date column")]
    NoDate,

    /// Totals row ("All" in the second column)
    #[error("totals row")]
    TotalsRow,

    /// Google row whose campaign name names neither campaign type
    #[error("campaign '{campaign}' is neither PMAX nor SEARCH")]
    UndecidableCampaign { campaign: String },

    /// Platform resolved but no column map configured for it
    #[error("no column map configured for {platform}")]
    MissingLayout { platform: Platform },

    /// Conversions column holds text that is not a usable count
    #[error("conversions column {column} holds non-numeric value '{value}'")]
    InvalidConversions { column: usize, value: String },
}
