//! Application constants for MonthSum
//!
//! This module contains the export markers, column layouts, currency settings
//! and CLI defaults used throughout the application.

// =============================================================================
// Export Markers
// =============================================================================

/// Section headers that switch the parser into a platform mode
pub mod headers {
    /// Section title used when several exports are pasted together
    pub const FACEBOOK_SECTION: &str = "FACEBOOK";
    pub const TIKTOK_SECTION: &str = "TIKTOK";
    pub const GOOGLE_PMAX_SECTION: &str = "GOOGLE PMAX";
    pub const GOOGLE_SEARCH_SECTION: &str = "GOOGLE SEARCH";

    /// Column titles of the Facebook Ads Manager export
    pub const FACEBOOK_SPEND_COLUMN: &str = "Amount Spent (ILS)";
    pub const FACEBOOK_RESULTS_COLUMN: &str = "Leads";

    /// Column titles of the TikTok Ads Manager export
    pub const TIKTOK_COST_COLUMN: &str = "Cost (USD)";
    pub const TIKTOK_RESULTS_COLUMN: &str = "Conversions";
}

/// Values that identify rows by their column contents
pub mod signatures {
    /// First column of a Facebook daily row
    pub const FACEBOOK_ROW_MARKER: &str = "Facebook";

    /// Second column of a totals row ("All" days)
    pub const AGGREGATE_ROW_MARKER: &str = "All";

    /// Campaign name fragments that identify Google campaign types (matched case-insensitively)
    pub const GOOGLE_PMAX_CAMPAIGN: &str = "PMAX";
    pub const GOOGLE_SEARCH_CAMPAIGN: &str = "SEARCH";

    /// Minimum column count of a TikTok daily row
    pub const TIKTOK_MIN_COLUMNS: usize = 9;

    /// Minimum column count of a Google daily row
    pub const GOOGLE_MIN_COLUMNS: usize = 8;
}

/// Calendar date pattern used by every supported export (`YYYY-MM-DD`)
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Field delimiter produced by spreadsheet copy operations
pub const FIELD_DELIMITER: char = '\t';

// =============================================================================
// Column Layouts
// =============================================================================

/// Default column offsets (0-indexed) for each platform's daily rows
pub mod columns {
    pub const FACEBOOK_SPEND: usize = 6;
    pub const FACEBOOK_CONVERSIONS: usize = 7;

    // Counted from the date column: pasted rows may start with an empty column
    pub const TIKTOK_SPEND: usize = 1;
    pub const TIKTOK_CONVERSIONS: usize = 8;

    pub const GOOGLE_SPEND: usize = 7;
    pub const GOOGLE_CONVERSIONS: usize = 8;
}

// =============================================================================
// Currency
// =============================================================================

/// Fixed USD to ILS conversion rate applied to USD-denominated exports
pub const DEFAULT_USD_TO_ILS_RATE: f64 = 3.7;

/// Symbol of the reporting currency
pub const REPORTING_CURRENCY_SYMBOL: &str = "₪";

/// Thousands separator stripped from numeric fields
pub const THOUSANDS_SEPARATOR: char = ',';

/// Currency symbols stripped from numeric fields before parsing
pub const CURRENCY_SYMBOLS: &[char] = &['₪', '$'];

// =============================================================================
// CLI Defaults
// =============================================================================

/// Environment variable pointing at a JSON parser configuration
pub const CONFIG_ENV_VAR: &str = "MONTHSUM_CONFIG";

/// Input path value that means "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Log target used for the default tracing filter
pub const LOG_TARGET: &str = "monthsum";
