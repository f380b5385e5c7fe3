//! Repository for the `user_achievements` table.

use sqlx::PgPool;

use ashtrail_core::types::{DbId, Timestamp};

use crate::models::achievement::UserAchievement;

/// Column list for `user_achievements` queries.
const AWARD_COLUMNS: &str = "id, user_id, achievement_id, date_earned";

/// Provides operations for durable award records.
pub struct AwardRepo;

impl AwardRepo {
    /// Ids of every achievement already awarded to the user.
    pub async fn awarded_ids(pool: &PgPool, user_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT achievement_id FROM user_achievements WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All award records for a user, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserAchievement>, sqlx::Error> {
        let query = format!(
            "SELECT {AWARD_COLUMNS} FROM user_achievements \
             WHERE user_id = $1 \
             ORDER BY date_earned DESC"
        );
        sqlx::query_as::<_, UserAchievement>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Create the award record unless it already exists.
    ///
    /// The UNIQUE constraint on `(user_id, achievement_id)` makes this
    /// safe under concurrent callers: the loser of a race simply affects
    /// zero rows. Returns `true` when a new record was created.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        achievement_id: DbId,
        earned_at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_achievements (user_id, achievement_id, date_earned) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, achievement_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(achievement_id)
        .bind(earned_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
