//! Tests for per-platform totals

use super::*;
use crate::app::services::aggregation::platform_breakdown;

#[test]
fn test_breakdown_first_seen_order() {
    let breakdown = platform_breakdown(&create_sample_records());

    let platforms: Vec<Platform> = breakdown.iter().map(|b| b.platform).collect();
    assert_eq!(
        platforms,
        vec![Platform::Facebook, Platform::TikTok, Platform::GooglePMax]
    );
}

#[test]
fn test_breakdown_totals_and_cpa() {
    let breakdown = platform_breakdown(&create_sample_records());

    let facebook = &breakdown[0];
    assert_close(facebook.spend, 500.0);
    assert_close(facebook.conversions, 8.0);
    assert_close(facebook.cpa, 62.5);
    assert_close(facebook.spend_share, 500.0 / 1100.0 * 100.0);

    // No conversions: CPA falls back to the spend itself
    let tiktok = &breakdown[1];
    assert_close(tiktok.cpa, 370.0);

    let share_total: f64 = breakdown.iter().map(|b| b.spend_share).sum();
    assert_close(share_total, 100.0);
}

#[test]
fn test_breakdown_spend_matches_record_sums() {
    let records = create_sample_records();

    for entry in platform_breakdown(&records) {
        let summed: f64 = records
            .iter()
            .filter(|r| r.platform == entry.platform)
            .map(|r| r.spend)
            .sum();
        assert_close(entry.spend, summed);
    }
}

#[test]
fn test_breakdown_zero_spend() {
    let records = vec![DailyDataPoint::new("2024-01-01", Platform::GoogleSearch, 0.0, 2.0)];
    let breakdown = platform_breakdown(&records);

    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].spend_share, 0.0);
    assert_eq!(breakdown[0].cpa, 0.0);
}

#[test]
fn test_breakdown_empty() {
    assert!(platform_breakdown(&[]).is_empty());
}
