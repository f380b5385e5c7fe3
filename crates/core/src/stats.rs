//! Streak, trigger, and mood statistics over a user's event sequence.
//!
//! Every function takes the event slice ordered newest-first plus any
//! reference instant it needs; nothing here touches a clock or a store.

use serde::Serialize;

use crate::model::{LogEvent, Trigger};
use crate::types::Timestamp;

/// Round to one decimal place, the precision used for all displayed
/// percentages and averages.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Streaks
// ---------------------------------------------------------------------------

/// Current and longest-gap streak figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakInfo {
    /// Whole hours since the most recent event.
    pub current_hours: i64,
    /// Whole days since the most recent event.
    pub current_days: i64,
    /// The longest gap, in whole days, between consecutive events,
    /// including the still-open gap between the latest event and `now`.
    pub longest_gap_days: i64,
    /// Timestamp of the most recent event, if any.
    pub last_event: Option<Timestamp>,
}

impl StreakInfo {
    fn empty() -> Self {
        Self {
            current_hours: 0,
            current_days: 0,
            longest_gap_days: 0,
            last_event: None,
        }
    }
}

/// Compute streak figures for a newest-first event sequence.
///
/// "Now" is treated as a virtual most-recent boundary, so the ongoing
/// abstinence period competes for the longest gap.
pub fn streak_info(events: &[LogEvent], now: Timestamp) -> StreakInfo {
    let Some(last) = events.first() else {
        return StreakInfo::empty();
    };

    let current = now - last.timestamp;

    let mut longest_gap = current;
    for pair in events.windows(2) {
        let gap = pair[0].timestamp - pair[1].timestamp;
        if gap > longest_gap {
            longest_gap = gap;
        }
    }

    StreakInfo {
        current_hours: current.num_hours(),
        current_days: current.num_days(),
        longest_gap_days: longest_gap.num_days(),
        last_event: Some(last.timestamp),
    }
}

// ---------------------------------------------------------------------------
// Trigger distribution
// ---------------------------------------------------------------------------

/// One row of the trigger distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerStat {
    pub trigger: Trigger,
    pub count: usize,
    /// Share of all events, rounded to one decimal.
    pub percentage: f64,
}

/// Count events per trigger, ordered by count descending.
///
/// Ties keep first-encountered order (the sort is stable over the order
/// triggers first appear in the sequence). Empty input yields an empty vec.
pub fn trigger_distribution(events: &[LogEvent]) -> Vec<TriggerStat> {
    let total = events.len();
    if total == 0 {
        return Vec::new();
    }

    // Preserve first-encountered order for stable tie-breaking.
    let mut order: Vec<Trigger> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for event in events {
        match order.iter().position(|t| *t == event.trigger) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(event.trigger);
                counts.push(1);
            }
        }
    }

    let mut stats: Vec<TriggerStat> = order
        .into_iter()
        .zip(counts)
        .map(|(trigger, count)| TriggerStat {
            trigger,
            count,
            percentage: round1(count as f64 / total as f64 * 100.0),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

// ---------------------------------------------------------------------------
// Mood impact
// ---------------------------------------------------------------------------

/// Aggregate mood change across events that recorded both moods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodImpact {
    pub avg_before: f64,
    pub avg_after: f64,
    pub improved_percent: f64,
    pub worsened_percent: f64,
    pub unchanged_percent: f64,
}

/// Summarize mood change over events where both moods are present.
///
/// Returns `None` when no event qualifies. Averages and percentages are
/// rounded to one decimal; the three percentages sum to 100 up to rounding.
pub fn mood_impact(events: &[LogEvent]) -> Option<MoodImpact> {
    let mut total = 0usize;
    let mut sum_before = 0i64;
    let mut sum_after = 0i64;
    let mut improved = 0usize;
    let mut worsened = 0usize;
    let mut unchanged = 0usize;

    for event in events {
        let (Some(before), Some(after)) = (event.mood_before, event.mood_after) else {
            continue;
        };
        total += 1;
        sum_before += before as i64;
        sum_after += after as i64;
        match after.cmp(&before) {
            std::cmp::Ordering::Greater => improved += 1,
            std::cmp::Ordering::Less => worsened += 1,
            std::cmp::Ordering::Equal => unchanged += 1,
        }
    }

    if total == 0 {
        return None;
    }

    let pct = |n: usize| round1(n as f64 / total as f64 * 100.0);
    Some(MoodImpact {
        avg_before: round1(sum_before as f64 / total as f64),
        avg_after: round1(sum_after as f64 / total as f64),
        improved_percent: pct(improved),
        worsened_percent: pct(worsened),
        unchanged_percent: pct(unchanged),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn event_at(hours_ago: i64, trigger: Trigger) -> LogEvent {
        LogEvent {
            id: hours_ago,
            user_id: 1,
            timestamp: now() - Duration::hours(hours_ago),
            trigger,
            mood_before: None,
            mood_after: None,
            note: None,
            user_brand_id: None,
        }
    }

    fn mood_event(before: Option<i16>, after: Option<i16>) -> LogEvent {
        LogEvent {
            mood_before: before,
            mood_after: after,
            ..event_at(1, Trigger::Other)
        }
    }

    // -- streak_info --

    #[test]
    fn streak_empty_input_is_all_zeros() {
        let info = streak_info(&[], now());
        assert_eq!(info, StreakInfo::empty());
        assert!(info.last_event.is_none());
    }

    #[test]
    fn streak_current_from_most_recent_event() {
        let events = vec![event_at(30, Trigger::Other), event_at(70, Trigger::Other)];
        let info = streak_info(&events, now());
        assert_eq!(info.current_hours, 30);
        assert_eq!(info.current_days, 1);
        assert_eq!(info.last_event, Some(events[0].timestamp));
    }

    #[test]
    fn streak_longest_gap_from_history() {
        // Gaps: now->e1 = 2h, e1->e2 = 98h (4 days), e2->e3 = 20h.
        let events = vec![
            event_at(2, Trigger::Other),
            event_at(100, Trigger::Other),
            event_at(120, Trigger::Other),
        ];
        let info = streak_info(&events, now());
        assert_eq!(info.current_hours, 2);
        assert_eq!(info.longest_gap_days, 4);
    }

    #[test]
    fn streak_ongoing_gap_can_be_longest() {
        // Current abstinence (10 days) beats every historical gap.
        let events = vec![
            event_at(240, Trigger::Other),
            event_at(250, Trigger::Other),
        ];
        let info = streak_info(&events, now());
        assert_eq!(info.longest_gap_days, 10);
    }

    #[test]
    fn streak_single_event() {
        let events = vec![event_at(50, Trigger::Other)];
        let info = streak_info(&events, now());
        assert_eq!(info.current_hours, 50);
        assert_eq!(info.current_days, 2);
        assert_eq!(info.longest_gap_days, 2);
    }

    // -- trigger_distribution --

    #[test]
    fn distribution_empty_input() {
        assert!(trigger_distribution(&[]).is_empty());
    }

    #[test]
    fn distribution_counts_and_percentages() {
        let events = vec![
            event_at(1, Trigger::Stress),
            event_at(2, Trigger::Stress),
            event_at(3, Trigger::Stress),
            event_at(4, Trigger::Boredom),
        ];
        let stats = trigger_distribution(&events);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].trigger, Trigger::Stress);
        assert_eq!(stats[0].count, 3);
        assert!((stats[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(stats[1].trigger, Trigger::Boredom);
        assert!((stats[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_ties_keep_first_encountered_order() {
        let events = vec![
            event_at(1, Trigger::Social),
            event_at(2, Trigger::Craving),
            event_at(3, Trigger::Social),
            event_at(4, Trigger::Craving),
        ];
        let stats = trigger_distribution(&events);
        assert_eq!(stats[0].trigger, Trigger::Social);
        assert_eq!(stats[1].trigger, Trigger::Craving);
    }

    #[test]
    fn distribution_percentages_sum_to_100() {
        // 3 triggers over 7 events: rounded shares must sum to ~100.
        let events = vec![
            event_at(1, Trigger::Stress),
            event_at(2, Trigger::Stress),
            event_at(3, Trigger::Stress),
            event_at(4, Trigger::Boredom),
            event_at(5, Trigger::Boredom),
            event_at(6, Trigger::Alcohol),
            event_at(7, Trigger::Alcohol),
        ];
        let total: f64 = trigger_distribution(&events)
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!((total - 100.0).abs() <= 0.1, "sum was {total}");
    }

    // -- mood_impact --

    #[test]
    fn mood_impact_none_without_qualifying_events() {
        assert!(mood_impact(&[]).is_none());
        let events = vec![mood_event(Some(3), None), mood_event(None, Some(4))];
        assert!(mood_impact(&events).is_none());
    }

    #[test]
    fn mood_impact_averages_and_shares() {
        let events = vec![
            mood_event(Some(2), Some(4)), // improved
            mood_event(Some(3), Some(3)), // unchanged
            mood_event(Some(4), Some(2)), // worsened
            mood_event(Some(3), Some(4)), // improved
        ];
        let impact = mood_impact(&events).unwrap();
        assert!((impact.avg_before - 3.0).abs() < 1e-9);
        assert!((impact.avg_after - 3.3).abs() < 1e-9);
        assert!((impact.improved_percent - 50.0).abs() < 1e-9);
        assert!((impact.worsened_percent - 25.0).abs() < 1e-9);
        assert!((impact.unchanged_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn mood_impact_skips_partial_records() {
        let events = vec![
            mood_event(Some(1), Some(5)),
            mood_event(Some(5), None),
            mood_event(None, None),
        ];
        let impact = mood_impact(&events).unwrap();
        // Only the first event qualifies.
        assert!((impact.avg_before - 1.0).abs() < 1e-9);
        assert!((impact.improved_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn mood_impact_percentages_sum_to_100() {
        let events = vec![
            mood_event(Some(2), Some(4)),
            mood_event(Some(3), Some(2)),
            mood_event(Some(3), Some(3)),
        ];
        let impact = mood_impact(&events).unwrap();
        let total = impact.improved_percent + impact.worsened_percent + impact.unchanged_percent;
        assert!((total - 100.0).abs() <= 0.1, "sum was {total}");
    }
}
