//! Smoke log entity model.

use serde::Serialize;
use sqlx::FromRow;

use ashtrail_core::model::{LogEvent, Trigger};
use ashtrail_core::types::{DbId, Timestamp};

/// A row from the `smoke_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SmokeLog {
    pub id: DbId,
    pub user_id: DbId,
    pub timestamp: Timestamp,
    /// Trigger storage key; see [`Trigger::as_str`].
    pub trigger: String,
    pub mood_before: Option<i16>,
    pub mood_after: Option<i16>,
    pub note: Option<String>,
    pub user_brand_id: Option<DbId>,
}

impl From<SmokeLog> for LogEvent {
    fn from(row: SmokeLog) -> Self {
        LogEvent {
            id: row.id,
            user_id: row.user_id,
            timestamp: row.timestamp,
            trigger: Trigger::from_str_lossy(&row.trigger),
            mood_before: row.mood_before,
            mood_after: row.mood_after,
            note: row.note,
            user_brand_id: row.user_brand_id,
        }
    }
}

/// Fields for inserting a new smoke log.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewSmokeLog {
    pub user_id: DbId,
    pub trigger: Trigger,
    pub mood_before: Option<i16>,
    pub mood_after: Option<i16>,
    pub note: Option<String>,
    pub user_brand_id: Option<DbId>,
}
