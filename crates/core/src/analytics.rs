//! Aggregate traffic totals for the analytics page.

use serde::Serialize;

use crate::types::AnalyticsRecord;

/// Summed analytics across every day in the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverviewTotals {
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
    /// Conversions per click, as a percentage with one decimal place.
    pub ctr: f64,
}

/// Sum views, clicks and conversions and derive the click-through rate.
pub fn overview_totals(records: &[AnalyticsRecord]) -> OverviewTotals {
    let (views, clicks, conversions) = records.iter().fold((0u64, 0u64, 0u64), |acc, r| {
        (
            acc.0.saturating_add(r.views),
            acc.1.saturating_add(r.clicks),
            acc.2.saturating_add(r.conversions),
        )
    });

    OverviewTotals {
        views,
        clicks,
        conversions,
        ctr: click_through_rate(clicks, conversions),
    }
}

/// `round(conversions / clicks * 1000) / 10`, or `0` when there were no
/// clicks.
pub fn click_through_rate(clicks: u64, conversions: u64) -> f64 {
    if clicks == 0 {
        return 0.0;
    }
    (conversions as f64 / clicks as f64 * 1000.0).round() / 10.0
}
