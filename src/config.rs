//! Configuration management and validation.
//!
//! Provides the parser configuration: which header lines switch the scan into a
//! platform mode, where each platform keeps its spend and conversion columns,
//! and the exchange rate used for exports reported in US dollars. Column
//! layouts are data, so an export format change only needs a config change.

use crate::app::models::Platform;
use crate::constants::{self, columns, headers};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Currency a platform reports its spend in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Israeli new shekel, the reporting currency
    #[default]
    Ils,
    /// US dollar, converted at `usd_to_ils_rate`
    Usd,
}

/// What the offsets of a [`ColumnMap`] are counted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAnchor {
    /// Offsets are positions in the tab-split row
    #[default]
    Row,
    /// Offsets are counted from the row's date column, so a leading empty
    /// column shifts the metrics along with the date
    Date,
}

/// Column offsets (0-indexed) of the metrics in one platform's daily rows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column holding the amount spent
    pub spend: usize,

    /// Column holding the conversion count
    pub conversions: usize,

    /// Currency of the spend column
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub anchor: ColumnAnchor,
}

impl ColumnMap {
    pub fn new(spend: usize, conversions: usize, currency: Currency) -> Self {
        Self {
            spend,
            conversions,
            currency,
            anchor: ColumnAnchor::Row,
        }
    }

    /// Count the offsets from the date column instead of the row start
    pub fn anchored_to_date(mut self) -> Self {
        self.anchor = ColumnAnchor::Date;
        self
    }

    /// Absolute positions of the spend and conversions columns in a row whose
    /// date sits at `date_index`
    pub fn resolve(&self, date_index: usize) -> (usize, usize) {
        match self.anchor {
            ColumnAnchor::Row => (self.spend, self.conversions),
            ColumnAnchor::Date => (date_index + self.spend, date_index + self.conversions),
        }
    }
}

/// Column maps for every platform the parser can attribute rows to
///
/// Platforms left out of a configuration file keep their default map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformLayouts {
    pub facebook: ColumnMap,
    pub tiktok: ColumnMap,
    pub google_pmax: ColumnMap,
    pub google_search: ColumnMap,

    /// Only needed when a header rule assigns rows to `Other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<ColumnMap>,
}

impl Default for PlatformLayouts {
    fn default() -> Self {
        Self {
            facebook: ColumnMap::new(
                columns::FACEBOOK_SPEND,
                columns::FACEBOOK_CONVERSIONS,
                Currency::Ils,
            ),
            tiktok: ColumnMap::new(
                columns::TIKTOK_SPEND,
                columns::TIKTOK_CONVERSIONS,
                Currency::Usd,
            )
            .anchored_to_date(),
            google_pmax: ColumnMap::new(
                columns::GOOGLE_SPEND,
                columns::GOOGLE_CONVERSIONS,
                Currency::Ils,
            ),
            google_search: ColumnMap::new(
                columns::GOOGLE_SPEND,
                columns::GOOGLE_CONVERSIONS,
                Currency::Ils,
            ),
            other: None,
        }
    }
}

impl PlatformLayouts {
    /// Get the column map for a platform
    pub fn get(&self, platform: Platform) -> Option<&ColumnMap> {
        match platform {
            Platform::Facebook => Some(&self.facebook),
            Platform::TikTok => Some(&self.tiktok),
            Platform::GooglePMax => Some(&self.google_pmax),
            Platform::GoogleSearch => Some(&self.google_search),
            Platform::Other => self.other.as_ref(),
        }
    }

    /// Replace the column map for a platform
    pub fn set(&mut self, platform: Platform, map: ColumnMap) {
        match platform {
            Platform::Facebook => self.facebook = map,
            Platform::TikTok => self.tiktok = map,
            Platform::GooglePMax => self.google_pmax = map,
            Platform::GoogleSearch => self.google_search = map,
            Platform::Other => self.other = Some(map),
        }
    }
}

/// A header line pattern that switches the scan into a platform mode
///
/// The rule matches a line containing every pattern as a substring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRule {
    pub platform: Platform,
    pub patterns: Vec<String>,

    #[serde(default)]
    pub ignore_case: bool,
}

impl HeaderRule {
    pub fn new(platform: Platform, patterns: &[&str]) -> Self {
        Self {
            platform,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ignore_case: false,
        }
    }

    /// Match patterns regardless of letter case
    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

/// Default header rules in evaluation order
pub fn default_header_rules() -> Vec<HeaderRule> {
    vec![
        HeaderRule::new(Platform::Facebook, &[headers::FACEBOOK_SECTION]),
        HeaderRule::new(
            Platform::Facebook,
            &[headers::FACEBOOK_SPEND_COLUMN, headers::FACEBOOK_RESULTS_COLUMN],
        )
        .ignoring_case(),
        HeaderRule::new(Platform::TikTok, &[headers::TIKTOK_SECTION]),
        HeaderRule::new(
            Platform::TikTok,
            &[headers::TIKTOK_COST_COLUMN, headers::TIKTOK_RESULTS_COLUMN],
        )
        .ignoring_case(),
        HeaderRule::new(Platform::GooglePMax, &[headers::GOOGLE_PMAX_SECTION]),
        HeaderRule::new(Platform::GoogleSearch, &[headers::GOOGLE_SEARCH_SECTION]),
    ]
}

/// Global configuration for export parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Fixed rate used to convert USD spend into ILS
    pub usd_to_ils_rate: f64,

    /// Header rules, evaluated in order; the first match wins
    pub header_rules: Vec<HeaderRule>,

    /// Column maps per platform
    pub layouts: PlatformLayouts,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            usd_to_ils_rate: constants::DEFAULT_USD_TO_ILS_RATE,
            header_rules: default_header_rules(),
            layouts: PlatformLayouts::default(),
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom USD to ILS rate
    pub fn with_usd_rate(mut self, rate: f64) -> Self {
        self.usd_to_ils_rate = rate;
        self
    }

    /// Create configuration with a custom column map for one platform
    pub fn with_layout(mut self, platform: Platform, map: ColumnMap) -> Self {
        self.layouts.set(platform, map);
        self
    }

    /// Append a header rule after the existing ones
    pub fn with_header_rule(mut self, rule: HeaderRule) -> Self {
        self.header_rules.push(rule);
        self
    }

    /// Get the column map for a platform
    pub fn layout(&self, platform: Platform) -> Option<&ColumnMap> {
        self.layouts.get(platform)
    }

    /// Convert an amount in the given currency into ILS
    pub fn to_reporting_currency(&self, amount: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Ils => amount,
            Currency::Usd => amount * self.usd_to_ils_rate,
        }
    }

    /// Check the configuration for values the parser cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.usd_to_ils_rate.is_finite() || self.usd_to_ils_rate <= 0.0 {
            return Err(Error::configuration(format!(
                "USD to ILS rate must be a positive number, got {}",
                self.usd_to_ils_rate
            )));
        }

        for (index, rule) in self.header_rules.iter().enumerate() {
            if rule.patterns.is_empty() {
                return Err(Error::configuration(format!(
                    "Header rule {} for {} has no patterns",
                    index + 1,
                    rule.platform
                )));
            }

            if rule.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(Error::configuration(format!(
                    "Header rule {} for {} contains an empty pattern",
                    index + 1,
                    rule.platform
                )));
            }

            if self.layouts.get(rule.platform).is_none() {
                return Err(Error::configuration(format!(
                    "Header rule {} switches to {} but no column map is configured for it",
                    index + 1,
                    rule.platform
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        let config: ParserConfig = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(
                format!("Failed to parse config file '{}'", path.display()),
                e,
            )
        })?;

        debug!("Loaded parser configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration using layered approach (defaults -> file -> overrides)
    ///
    /// The file is taken from `config_file` or, when absent, from the
    /// `MONTHSUM_CONFIG` environment variable.
    pub fn load_layered(config_file: Option<&Path>, usd_rate: Option<f64>) -> Result<Self> {
        let env_path = std::env::var_os(constants::CONFIG_ENV_VAR).map(PathBuf::from);

        let mut config = match config_file.or(env_path.as_deref()) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(rate) = usd_rate {
            config.usd_to_ils_rate = rate;
        }

        config.validate()?;
        Ok(config)
    }
}
