//! Achievement and award entity models.

use serde::Serialize;
use sqlx::FromRow;

use ashtrail_core::model::AchievementDef;
use ashtrail_core::types::{DbId, Timestamp};

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub points_reward: i64,
    pub criteria_type: String,
    pub criteria_value: i64,
}

impl From<Achievement> for AchievementDef {
    fn from(row: Achievement) -> Self {
        AchievementDef {
            id: row.id,
            title: row.title,
            description: row.description,
            points_reward: row.points_reward,
            criteria_type: row.criteria_type,
            criteria_value: row.criteria_value,
        }
    }
}

/// A row from the `user_achievements` table. At most one exists per
/// `(user_id, achievement_id)` pair, enforced by a UNIQUE constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserAchievement {
    pub id: DbId,
    pub user_id: DbId,
    pub achievement_id: DbId,
    pub date_earned: Timestamp,
}
