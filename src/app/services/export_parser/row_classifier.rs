//! Platform resolution for data rows
//!
//! A row belongs to the platform of the current scan mode. While no header has
//! been seen, the row's column signature decides instead, checked from the most
//! specific signature to the least.

use super::column_mapping::SplitRow;
use super::field_parsers::parse_numeric_field;
use super::rejection::RowRejection;
use crate::app::models::{Platform, ScanMode};
use crate::constants::signatures;

/// Platform and date resolved for a data row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedRow<'a> {
    pub platform: Platform,
    pub date: &'a str,

    /// Column the date was read from
    pub date_index: usize,
}

/// Resolve the platform and date of a data row
pub fn classify_row<'a>(
    row: &SplitRow<'a>,
    mode: ScanMode,
) -> Result<ClassifiedRow<'a>, RowRejection> {
    if row.is_totals_row() {
        return Err(RowRejection::TotalsRow);
    }

    match mode {
        ScanMode::Known(platform) => {
            let date_index = row.first_date_index().ok_or(RowRejection::NoDate)?;
            Ok(ClassifiedRow {
                platform,
                date: row.get(date_index).ok_or(RowRejection::NoDate)?,
                date_index,
            })
        }
        ScanMode::Unset => match_signature(row),
    }
}

/// Classify a row by its column signature alone
pub fn match_signature<'a>(row: &SplitRow<'a>) -> Result<ClassifiedRow<'a>, RowRejection> {
    if let Some(classified) = match_facebook(row) {
        return Ok(classified);
    }

    if let Some(classified) = match_tiktok(row) {
        return Ok(classified);
    }

    if let Some(result) = match_google(row) {
        return result;
    }

    Err(RowRejection::NoPlatform)
}

/// `Facebook | YYYY-MM-DD | ...`
fn match_facebook<'a>(row: &SplitRow<'a>) -> Option<ClassifiedRow<'a>> {
    if row.get(0) != Some(signatures::FACEBOOK_ROW_MARKER) || !row.is_date_at(1) {
        return None;
    }

    Some(ClassifiedRow {
        platform: Platform::Facebook,
        date: row.get(1)?,
        date_index: 1,
    })
}

/// `YYYY-MM-DD | cost | ...` with at least 9 columns
fn match_tiktok<'a>(row: &SplitRow<'a>) -> Option<ClassifiedRow<'a>> {
    if !row.is_date_at(0) || row.len() < signatures::TIKTOK_MIN_COLUMNS {
        return None;
    }

    if !parse_numeric_field(row.get(1)).is_value() {
        return None;
    }

    Some(ClassifiedRow {
        platform: Platform::TikTok,
        date: row.get(0)?,
        date_index: 0,
    })
}

/// `campaign | YYYY-MM-DD | ...` with at least 8 columns
///
/// Returns `Some(Err)` when the row has the Google shape but its campaign name
/// does not tell PMax from Search.
fn match_google<'a>(row: &SplitRow<'a>) -> Option<Result<ClassifiedRow<'a>, RowRejection>> {
    if !row.is_date_at(1) || row.len() < signatures::GOOGLE_MIN_COLUMNS {
        return None;
    }

    let campaign = row.get(0).unwrap_or_default();
    let date = row.get(1)?;

    Some(
        google_campaign_platform(campaign)
            .map(|platform| ClassifiedRow {
                platform,
                date,
                date_index: 1,
            })
            .ok_or_else(|| RowRejection::UndecidableCampaign {
                campaign: campaign.to_string(),
            }),
    )
}

/// Google campaign type from a campaign name (PMAX takes precedence)
pub fn google_campaign_platform(campaign: &str) -> Option<Platform> {
    let upper = campaign.to_uppercase();
    if upper.contains(signatures::GOOGLE_PMAX_CAMPAIGN) {
        Some(Platform::GooglePMax)
    } else if upper.contains(signatures::GOOGLE_SEARCH_CAMPAIGN) {
        Some(Platform::GoogleSearch)
    } else {
        None
    }
}
