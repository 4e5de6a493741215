//! Weekly views bar chart.
//!
//! The chart always has seven Sunday-first slots. Analytics records fill the
//! weekday slots (Monday to Friday) in order; both Sundays never carry data
//! and render as textured placeholders.

use serde::Serialize;

use crate::types::AnalyticsRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Slot labels, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Number of slots in the chart.
pub const SLOT_COUNT: usize = DAY_LABELS.len();

/// Slots `1..=5` are the only ones that can carry data.
pub const MAX_FILLED_SLOTS: usize = 5;

/// Bar height for slots without data.
pub const PLACEHOLDER_PERCENT: u8 = 18;

/// Smallest bar height for a slot with data, so zero-view days stay visible.
pub const MIN_BAR_PERCENT: u8 = 12;

pub const MAX_BAR_PERCENT: u8 = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySlot {
    pub label: &'static str,
    pub views: u64,
    /// Bar height as a percentage of the chart height.
    pub percent: u8,
    pub has_data: bool,
    pub is_peak: bool,
}

impl WeeklySlot {
    fn placeholder(index: usize) -> Self {
        Self {
            label: DAY_LABELS[index],
            views: 0,
            percent: PLACEHOLDER_PERCENT,
            has_data: false,
            is_peak: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyChart {
    pub slots: [WeeklySlot; SLOT_COUNT],
    /// Sum of views over the rendered slots.
    pub total_views: u64,
}

impl WeeklyChart {
    /// Index of the peak slot, if any slot carries data.
    pub fn peak_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_peak)
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Build the seven-slot chart from the analytics sequence.
///
/// Bar heights are relative to the largest view count across *all* records,
/// including any beyond the fifth that do not get a slot. The first slot
/// holding the maximal view count among filled slots is the peak.
pub fn weekly_chart(records: &[AnalyticsRecord]) -> WeeklyChart {
    let max_views = records.iter().map(|r| r.views).max().unwrap_or(0).max(1);

    let mut slots: [WeeklySlot; SLOT_COUNT] = std::array::from_fn(WeeklySlot::placeholder);

    for (offset, record) in records.iter().take(MAX_FILLED_SLOTS).enumerate() {
        let index = offset + 1;
        slots[index] = WeeklySlot {
            label: DAY_LABELS[index],
            views: record.views,
            percent: bar_percent(record.views, max_views),
            has_data: true,
            is_peak: false,
        };
    }

    let mut peak: Option<usize> = None;
    for (index, slot) in slots.iter().enumerate() {
        if !slot.has_data {
            continue;
        }
        match peak {
            Some(best) if slots[best].views >= slot.views => {}
            _ => peak = Some(index),
        }
    }
    if let Some(index) = peak {
        slots[index].is_peak = true;
    }

    let total_views = slots.iter().map(|s| s.views).sum();

    WeeklyChart { slots, total_views }
}

/// `clamp(round(views / max_views * 100), 12, 100)`.
fn bar_percent(views: u64, max_views: u64) -> u8 {
    let raw = (views as f64 / max_views as f64 * 100.0).round();
    raw.clamp(f64::from(MIN_BAR_PERCENT), f64::from(MAX_BAR_PERCENT)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(values: &[u64]) -> Vec<AnalyticsRecord> {
        values
            .iter()
            .map(|&v| AnalyticsRecord {
                views: v,
                clicks: 0,
                conversions: 0,
            })
            .collect()
    }

    #[test]
    fn always_seven_slots_with_empty_sundays() {
        for len in 0..=7 {
            let chart = weekly_chart(&views(&vec![10; len]));
            assert_eq!(chart.slots.len(), 7);
            assert!(!chart.slots[0].has_data);
            assert!(!chart.slots[6].has_data);
            for index in 1..=5 {
                assert_eq!(chart.slots[index].has_data, index <= len.min(5));
            }
        }
    }

    #[test]
    fn labels_are_sunday_first() {
        let chart = weekly_chart(&[]);
        let labels: Vec<&str> = chart.slots.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["S", "M", "T", "W", "T", "F", "S"]);
    }

    #[test]
    fn empty_input_has_no_peak_and_placeholder_bars() {
        let chart = weekly_chart(&[]);
        assert_eq!(chart.peak_index(), None);
        assert!(chart.slots.iter().all(|s| s.percent == PLACEHOLDER_PERCENT));
        assert_eq!(chart.total_views, 0);
    }

    #[test]
    fn percent_is_relative_to_max_and_clamped() {
        let chart = weekly_chart(&views(&[200, 100, 0, 1, 150]));
        let percents: Vec<u8> = chart.slots.iter().map(|s| s.percent).collect();
        assert_eq!(percents, [18, 100, 50, 12, 12, 75, 18]);
    }

    #[test]
    fn max_includes_records_beyond_the_fifth() {
        let chart = weekly_chart(&views(&[50, 50, 50, 50, 50, 100]));
        assert!(chart.slots[1..=5].iter().all(|s| s.percent == 50));
        assert_eq!(chart.total_views, 250);
    }

    #[test]
    fn peak_is_first_maximum() {
        let chart = weekly_chart(&views(&[10, 40, 40, 5]));
        assert_eq!(chart.peak_index(), Some(2));
        assert_eq!(chart.slots.iter().filter(|s| s.is_peak).count(), 1);
    }

    #[test]
    fn all_zero_views_still_flags_first_filled_slot() {
        let chart = weekly_chart(&views(&[0, 0, 0]));
        assert_eq!(chart.peak_index(), Some(1));
        assert!(chart.slots[1..=3].iter().all(|s| s.percent == MIN_BAR_PERCENT));
    }
}
