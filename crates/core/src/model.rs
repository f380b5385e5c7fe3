//! Domain structs shared across the engine and store boundaries.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// What prompted a logged event. Mirrors the nine trigger choices users
/// can pick from when logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Stress,
    Boredom,
    Social,
    Habit,
    Craving,
    AfterMeal,
    WorkBreak,
    Alcohol,
    Other,
}

impl Trigger {
    /// Human-readable label for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Stress => "Stress",
            Self::Boredom => "Boredom",
            Self::Social => "Social",
            Self::Habit => "Habit/Routine",
            Self::Craving => "Craving",
            Self::AfterMeal => "After Meal",
            Self::WorkBreak => "Work Break",
            Self::Alcohol => "With Alcohol",
            Self::Other => "Other",
        }
    }

    /// Stable storage key, matching the `smoke_logs.trigger` column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stress => "stress",
            Self::Boredom => "boredom",
            Self::Social => "social",
            Self::Habit => "habit",
            Self::Craving => "craving",
            Self::AfterMeal => "after_meal",
            Self::WorkBreak => "work_break",
            Self::Alcohol => "alcohol",
            Self::Other => "other",
        }
    }

    /// Parse a storage key back into a trigger. Unknown keys map to
    /// [`Trigger::Other`] so old rows never fail to load.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "stress" => Self::Stress,
            "boredom" => Self::Boredom,
            "social" => Self::Social,
            "habit" => Self::Habit,
            "craving" => Self::Craving,
            "after_meal" => Self::AfterMeal,
            "work_break" => Self::WorkBreak,
            "alcohol" => Self::Alcohol,
            _ => Self::Other,
        }
    }
}

// ---------------------------------------------------------------------------
// LogEvent
// ---------------------------------------------------------------------------

/// One recorded occurrence. Immutable once created; sequences of events
/// are always ordered newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: DbId,
    pub user_id: DbId,
    pub timestamp: Timestamp,
    pub trigger: Trigger,
    /// Mood on a 1–5 scale just before the event, when the user recorded it.
    pub mood_before: Option<i16>,
    /// Mood on a 1–5 scale just after the event, when the user recorded it.
    pub mood_after: Option<i16>,
    pub note: Option<String>,
    /// Optional reference to the user's brand entry (cost source).
    pub user_brand_id: Option<DbId>,
}

impl LogEvent {
    /// Difference `mood_after - mood_before` when both were recorded.
    pub fn mood_difference(&self) -> Option<i16> {
        match (self.mood_before, self.mood_after) {
            (Some(before), Some(after)) => Some(after - before),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AchievementDef
// ---------------------------------------------------------------------------

/// An administered achievement definition. Read-only to the engine.
///
/// `criteria_type` is stored as a free string so new criteria can be
/// administered before the engine learns to measure them; the engine
/// skips definitions it cannot parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: DbId,
    /// Display title, also used as the lookup key for hard-wired checks.
    pub title: String,
    pub description: String,
    pub points_reward: i64,
    pub criteria_type: String,
    pub criteria_value: i64,
}

// ---------------------------------------------------------------------------
// AwardRecord / PointsLedger
// ---------------------------------------------------------------------------

/// The durable, one-time record that a user has met an achievement's
/// criteria. At most one exists per `(user_id, achievement_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardRecord {
    pub user_id: DbId,
    pub achievement_id: DbId,
    pub date_earned: Timestamp,
}

/// Per-user points accumulator. Only ever incremented by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsLedger {
    pub user_id: DbId,
    pub points: i64,
    pub last_updated: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
