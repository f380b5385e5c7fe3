//! Zero-filled time-bucketed event counts for chart data.
//!
//! Each bucketing produces a complete, contiguous label sequence (all 24
//! hours, all 7 weekdays, every week touching the month) even when some
//! buckets hold zero events, so chart consumers never see sparse output.

use chrono::{Datelike, Duration, NaiveDate, Timelike};
use serde::Serialize;

use crate::model::LogEvent;
use crate::types::Timestamp;

/// The fixed-width slot scheme to bucket events into, relative to a
/// reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucketing {
    /// 24 hourly buckets covering the reference day.
    HourOfDay,
    /// 7 daily buckets covering the reference ISO week (Monday-first).
    DayOfWeek,
    /// One bucket per Monday-started week intersecting the reference month.
    WeekOfMonth,
}

/// A complete label/count series. `labels.len() == counts.len()` always.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSeries {
    pub labels: Vec<String>,
    pub counts: Vec<i64>,
}

impl BucketSeries {
    /// Total events across all buckets.
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }
}

/// Bucket `events` into fixed-width slots relative to `reference`.
pub fn bucket_counts(events: &[LogEvent], bucketing: Bucketing, reference: Timestamp) -> BucketSeries {
    match bucketing {
        Bucketing::HourOfDay => hourly(events, reference),
        Bucketing::DayOfWeek => weekday(events, reference),
        Bucketing::WeekOfMonth => monthly(events, reference),
    }
}

// ---------------------------------------------------------------------------
// Hour of day
// ---------------------------------------------------------------------------

fn hourly(events: &[LogEvent], reference: Timestamp) -> BucketSeries {
    let day = reference.date_naive();
    let mut counts = vec![0i64; 24];
    for event in events {
        if event.timestamp.date_naive() == day {
            counts[event.timestamp.hour() as usize] += 1;
        }
    }
    BucketSeries {
        labels: (0..24).map(|h| format!("{h:02}:00")).collect(),
        counts,
    }
}

// ---------------------------------------------------------------------------
// Day of week
// ---------------------------------------------------------------------------

/// Monday of the ISO week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn weekday(events: &[LogEvent], reference: Timestamp) -> BucketSeries {
    let start = week_start(reference.date_naive());
    let mut counts = vec![0i64; 7];
    for event in events {
        let offset = (event.timestamp.date_naive() - start).num_days();
        if (0..7).contains(&offset) {
            counts[offset as usize] += 1;
        }
    }
    BucketSeries {
        labels: (0..7)
            .map(|i| (start + Duration::days(i)).format("%A").to_string())
            .collect(),
        counts,
    }
}

// ---------------------------------------------------------------------------
// Week of month
// ---------------------------------------------------------------------------

/// First day of the month after the one containing `date`.
fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of a month always exists.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn monthly(events: &[LogEvent], reference: Timestamp) -> BucketSeries {
    let month_start = reference
        .date_naive()
        .with_day(1)
        .unwrap_or(reference.date_naive());
    let month_end = next_month_start(month_start);
    let first_week = week_start(month_start);

    // Every Monday whose week intersects the month gets a bucket, so a
    // month starting mid-week still shows its partial first week.
    let mut labels = Vec::new();
    let mut monday = first_week;
    while monday < month_end {
        labels.push(format!("Week of {}", monday.format("%b %d")));
        monday += Duration::weeks(1);
    }

    let mut counts = vec![0i64; labels.len()];
    for event in events {
        let date = event.timestamp.date_naive();
        if date >= month_start && date < month_end {
            let index = (date - first_week).num_days() / 7;
            counts[index as usize] += 1;
        }
    }

    BucketSeries { labels, counts }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trigger;
    use chrono::{TimeZone, Utc};

    fn reference() -> Timestamp {
        // Sunday 2025-06-15, 12:00 UTC.
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn event_on(year: i32, month: u32, day: u32, hour: u32) -> LogEvent {
        LogEvent {
            id: 0,
            user_id: 1,
            timestamp: Utc.with_ymd_and_hms(year, month, day, hour, 30, 0).unwrap(),
            trigger: Trigger::Other,
            mood_before: None,
            mood_after: None,
            note: None,
            user_brand_id: None,
        }
    }

    // -- hour of day --

    #[test]
    fn hourly_series_has_24_contiguous_buckets() {
        let series = bucket_counts(&[], Bucketing::HourOfDay, reference());
        assert_eq!(series.labels.len(), 24);
        assert_eq!(series.counts.len(), 24);
        assert_eq!(series.labels[0], "00:00");
        assert_eq!(series.labels[23], "23:00");
        assert_eq!(series.total(), 0);
    }

    #[test]
    fn hourly_counts_duplicate_hours_and_zero_fills() {
        // Two events at hour 3 and one at hour 17.
        let events = vec![
            event_on(2025, 6, 15, 3),
            event_on(2025, 6, 15, 3),
            event_on(2025, 6, 15, 17),
        ];
        let series = bucket_counts(&events, Bucketing::HourOfDay, reference());
        assert_eq!(series.total(), 3);
        assert_eq!(series.counts[3], 2);
        assert_eq!(series.counts[17], 1);
        let zeros = series
            .counts
            .iter()
            .enumerate()
            .filter(|(i, c)| *i != 3 && *i != 17 && **c == 0)
            .count();
        assert_eq!(zeros, 22);
    }

    #[test]
    fn hourly_ignores_events_outside_reference_day() {
        let events = vec![event_on(2025, 6, 14, 3), event_on(2025, 6, 16, 3)];
        let series = bucket_counts(&events, Bucketing::HourOfDay, reference());
        assert_eq!(series.total(), 0);
    }

    // -- day of week --

    #[test]
    fn weekday_series_is_monday_first() {
        let series = bucket_counts(&[], Bucketing::DayOfWeek, reference());
        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.labels[0], "Monday");
        assert_eq!(series.labels[6], "Sunday");
    }

    #[test]
    fn weekday_counts_fall_in_correct_slots() {
        // Reference week runs Mon 2025-06-09 .. Sun 2025-06-15.
        let events = vec![
            event_on(2025, 6, 9, 8),  // Monday
            event_on(2025, 6, 11, 8), // Wednesday
            event_on(2025, 6, 11, 20),
            event_on(2025, 6, 15, 8), // Sunday
        ];
        let series = bucket_counts(&events, Bucketing::DayOfWeek, reference());
        assert_eq!(series.counts, vec![1, 0, 2, 0, 0, 0, 1]);
    }

    #[test]
    fn weekday_ignores_events_outside_reference_week() {
        let events = vec![event_on(2025, 6, 8, 8), event_on(2025, 6, 16, 8)];
        let series = bucket_counts(&events, Bucketing::DayOfWeek, reference());
        assert_eq!(series.total(), 0);
    }

    // -- week of month --

    #[test]
    fn monthly_series_covers_every_week_touching_the_month() {
        // June 2025 starts on a Sunday; weeks of May 26, Jun 02, 09, 16, 23, 30.
        let series = bucket_counts(&[], Bucketing::WeekOfMonth, reference());
        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.labels[0], "Week of May 26");
        assert_eq!(series.labels[5], "Week of Jun 30");
    }

    #[test]
    fn monthly_counts_partial_first_week() {
        // Jun 1 belongs to the week of May 26.
        let events = vec![event_on(2025, 6, 1, 10), event_on(2025, 6, 10, 10)];
        let series = bucket_counts(&events, Bucketing::WeekOfMonth, reference());
        assert_eq!(series.counts[0], 1);
        assert_eq!(series.counts[2], 1);
        assert_eq!(series.total(), 2);
    }

    #[test]
    fn monthly_ignores_events_from_other_months() {
        let events = vec![event_on(2025, 5, 28, 10), event_on(2025, 7, 1, 10)];
        let series = bucket_counts(&events, Bucketing::WeekOfMonth, reference());
        assert_eq!(series.total(), 0);
    }

    #[test]
    fn monthly_handles_december() {
        let december = Utc.with_ymd_and_hms(2025, 12, 10, 0, 0, 0).unwrap();
        let series = bucket_counts(&[], Bucketing::WeekOfMonth, december);
        assert!(!series.labels.is_empty());
        assert_eq!(series.labels.len(), series.counts.len());
    }
}
