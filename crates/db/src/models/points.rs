//! Points ledger entity model.

use serde::Serialize;
use sqlx::FromRow;

use ashtrail_core::model::PointsLedger;
use ashtrail_core::types::{DbId, Timestamp};

/// A row from the `user_points` table. One per user, created lazily on
/// the first credit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserPoints {
    pub id: DbId,
    pub user_id: DbId,
    pub points: i64,
    pub last_updated: Timestamp,
}

impl From<UserPoints> for PointsLedger {
    fn from(row: UserPoints) -> Self {
        PointsLedger {
            user_id: row.user_id,
            points: row.points,
            last_updated: row.last_updated,
        }
    }
}
