//! Achievement criteria evaluation: progress snapshots per criteria type.

use crate::error::CoreError;
use crate::model::{AchievementDef, LogEvent};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Criteria types
// ---------------------------------------------------------------------------

/// Storage key for cumulative-count criteria.
pub const CRITERIA_TOTAL_LOGS: &str = "total_logs";
/// Storage key for elapsed-days-since-last-event criteria.
pub const CRITERIA_STREAK_DAYS: &str = "streak_days";

/// The categories of measurable progress the engine knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaType {
    /// Total number of events ever logged by the user.
    TotalLogs,
    /// Whole days elapsed since the user's most recent event.
    StreakDays,
}

impl CriteriaType {
    /// Parse the stored criteria key. `None` for keys this engine does
    /// not measure (the caller treats those as not-applicable and skips).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            CRITERIA_TOTAL_LOGS => Some(Self::TotalLogs),
            CRITERIA_STREAK_DAYS => Some(Self::StreakDays),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ProgressSnapshot
// ---------------------------------------------------------------------------

/// A read-only progress computation result. Never persisted.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProgressSnapshot {
    pub current: i64,
    pub goal: i64,
    /// Percentage toward the goal, clamped to `[0, 100]`.
    pub percent: f64,
}

impl ProgressSnapshot {
    /// Whether the criteria threshold has been met.
    pub fn complete(&self) -> bool {
        self.current >= self.goal
    }
}

/// Clamp `100 * current / goal` to `[0, 100]`.
///
/// A goal of zero or less is treated as already complete (100%). This
/// preserves a long-standing edge case: misconfigured zero-threshold
/// achievements unlock immediately instead of dividing by zero.
fn percent_toward(current: i64, goal: i64) -> f64 {
    if goal <= 0 {
        return 100.0;
    }
    ((current as f64 / goal as f64) * 100.0).min(100.0)
}

// ---------------------------------------------------------------------------
// Progress evaluation
// ---------------------------------------------------------------------------

/// Compute a user's progress toward one achievement.
///
/// `events` must be the user's full event sequence ordered newest-first.
/// Returns [`CoreError::UnsupportedCriteria`] for criteria types this
/// engine does not measure; callers skip those definitions.
pub fn progress(
    events: &[LogEvent],
    def: &AchievementDef,
    now: Timestamp,
) -> Result<ProgressSnapshot, CoreError> {
    let criteria =
        CriteriaType::parse(&def.criteria_type).ok_or_else(|| CoreError::UnsupportedCriteria {
            criteria_type: def.criteria_type.clone(),
        })?;

    let goal = def.criteria_value;
    let current = match criteria {
        CriteriaType::TotalLogs => events.len() as i64,
        CriteriaType::StreakDays => match events.first() {
            // No events at all: a perfect streak. A brand-new user is not
            // blocked from streak achievements.
            None => goal,
            Some(last) => (now - last.timestamp).num_days(),
        },
    };

    Ok(ProgressSnapshot {
        current,
        goal,
        percent: percent_toward(current, goal),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
