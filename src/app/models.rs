//! Data models for advertising export processing
//!
//! This module contains the core data structures for representing the platforms
//! an export can come from, the parser's scan state, and the normalized daily
//! records produced from every supported export.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Platform
// =============================================================================

/// Advertising platform a daily record was reported by
///
/// `Other` is a regular tag that configured header rules may assign. It is
/// never used to mean "not classified yet"; that state is [`ScanMode::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Facebook")]
    Facebook,

    #[serde(rename = "TikTok")]
    TikTok,

    #[serde(rename = "Google PMax")]
    GooglePMax,

    #[serde(rename = "Google Search")]
    GoogleSearch,

    #[serde(rename = "Other")]
    Other,
}

impl Platform {
    /// Display name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::GooglePMax => "Google PMax",
            Platform::GoogleSearch => "Google Search",
            Platform::Other => "Other",
        }
    }

    /// Get all platforms in report order
    pub fn all_values() -> [Platform; 5] {
        [
            Platform::Facebook,
            Platform::TikTok,
            Platform::GooglePMax,
            Platform::GoogleSearch,
            Platform::Other,
        ]
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "facebook" | "fb" | "meta" => Ok(Platform::Facebook),
            "tiktok" => Ok(Platform::TikTok),
            "googlepmax" | "pmax" => Ok(Platform::GooglePMax),
            "googlesearch" | "search" => Ok(Platform::GoogleSearch),
            "other" => Ok(Platform::Other),
            _ => Err(Error::configuration(format!(
                "Unknown platform '{}': expected Facebook, TikTok, Google PMax, Google Search or Other",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Scan State
// =============================================================================

/// Platform mode of the line scan
///
/// Starts as `Unset` and becomes `Known` once a header line names a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Unset,
    Known(Platform),
}

impl ScanMode {
    /// The platform of the current mode, if one has been set
    pub fn platform(self) -> Option<Platform> {
        match self {
            ScanMode::Unset => None,
            ScanMode::Known(platform) => Some(platform),
        }
    }

    pub fn is_unset(self) -> bool {
        matches!(self, ScanMode::Unset)
    }
}

// =============================================================================
// Daily Record
// =============================================================================

/// One normalized day of spend and conversions for one platform
///
/// `spend` is always in the reporting currency (ILS); amounts reported in other
/// currencies are converted before the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDataPoint {
    /// Calendar day in `YYYY-MM-DD` form, kept as text
    pub date: String,

    /// Amount spent, in ILS
    pub spend: f64,

    /// Attributed conversions (may be fractional)
    pub conversions: f64,

    /// Platform the row was attributed to
    pub platform: Platform,
}

impl DailyDataPoint {
    pub fn new(date: impl Into<String>, platform: Platform, spend: f64, conversions: f64) -> Self {
        Self {
            date: date.into(),
            spend,
            conversions,
            platform,
        }
    }

    /// Cost per conversion for this day, or 0 when nothing converted
    pub fn cpa(&self) -> f64 {
        if self.conversions > 0.0 {
            self.spend / self.conversions
        } else {
            0.0
        }
    }
}
