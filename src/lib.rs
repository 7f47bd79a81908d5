//! MonthSum Library
//!
//! A Rust library for turning copy-pasted advertising platform exports into
//! normalized daily spend and conversion records.
//!
//! This library provides tools for:
//! - Parsing tab-separated exports from Facebook, TikTok, Google PMax and Google Search
//! - Detecting the platform of each row from header lines or column signatures
//! - Converting platform-native currencies into a single reporting currency (ILS)
//! - Summarizing the records into totals, per-platform breakdowns and daily series
//! - Comprehensive error handling for configuration and input handling

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod export_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{DailyDataPoint, Platform, ScanMode};
pub use app::services::export_parser::{ExportParser, parse_export};
pub use config::ParserConfig;

/// Result type alias for MonthSum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration, input and report output
///
/// The export parser itself never fails; these errors only come from the
/// layers around it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input produced no records
    #[error("No valid data found. Please paste the full platform export including headers.")]
    NoData,
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
