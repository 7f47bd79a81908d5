//! Tests for header line detection

use super::*;
use crate::app::services::export_parser::HeaderMatcher;
use crate::config::{HeaderRule, default_header_rules};

fn default_matcher() -> HeaderMatcher {
    HeaderMatcher::new(&default_header_rules())
}

#[test]
fn test_section_titles() {
    let matcher = default_matcher();

    assert_eq!(matcher.detect("FACEBOOK"), Some(Platform::Facebook));
    assert_eq!(matcher.detect("TIKTOK ADS - JANUARY"), Some(Platform::TikTok));
    assert_eq!(matcher.detect("GOOGLE PMAX"), Some(Platform::GooglePMax));
    assert_eq!(matcher.detect("=== GOOGLE SEARCH ==="), Some(Platform::GoogleSearch));
}

#[test]
fn test_section_titles_are_case_sensitive() {
    let matcher = default_matcher();

    // Facebook daily rows start with "Facebook" and must stay data rows
    assert_eq!(matcher.detect("Facebook\t2024-01-01\t1\t1\t1\tILS\t10\t1"), None);
    assert_eq!(matcher.detect("Google Search brand campaign"), None);
}

#[test]
fn test_column_title_headers() {
    let matcher = default_matcher();

    assert_eq!(
        matcher.detect("Day\tReach\tImpressions\tFrequency\tCurrency\tAmount spent (ILS)\tLeads"),
        Some(Platform::Facebook)
    );
    assert_eq!(
        matcher.detect("Day\tCost (USD)\tCPC\tImpressions\tCTR\tClicks\tCost/Conv\tCVR\tConversions"),
        Some(Platform::TikTok)
    );
}

#[test]
fn test_column_title_rule_needs_every_pattern() {
    let matcher = default_matcher();

    assert_eq!(matcher.detect("Day\tAmount spent (ILS)\tClicks"), None);
    assert_eq!(matcher.detect("Day\tCost (USD)\tClicks"), None);
}

#[test]
fn test_first_matching_rule_wins() {
    let matcher = default_matcher();

    assert_eq!(matcher.detect("FACEBOOK vs TIKTOK"), Some(Platform::Facebook));
    assert_eq!(matcher.detect("TIKTOK vs GOOGLE PMAX"), Some(Platform::TikTok));
}

#[test]
fn test_data_rows_are_not_headers() {
    let matcher = default_matcher();

    assert_eq!(matcher.detect("2024-01-01\t100\t0.5\t2000\t1.2%\t24\t20\t20%\t5"), None);
    assert_eq!(matcher.detect("Summer PMAX Campaign\t2024-01-02\t0\t0\t0\t0\t0\t500\t2"), None);
}

#[test]
fn test_custom_rules() {
    let rules = vec![
        HeaderRule::new(Platform::Other, &["LinkedIn", "Spent"]).ignoring_case(),
        HeaderRule {
            platform: Platform::TikTok,
            patterns: vec![],
            ignore_case: false,
        },
    ];
    let matcher = HeaderMatcher::new(&rules);

    // Rules without patterns are dropped rather than matching every line
    assert_eq!(matcher.rule_count(), 1);
    assert_eq!(matcher.detect("LINKEDIN ADS\tTotal SPENT"), Some(Platform::Other));
    assert_eq!(matcher.detect("anything else"), None);
}
