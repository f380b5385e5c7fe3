//! Repository for the `user_points` table.

use sqlx::PgPool;

use ashtrail_core::types::DbId;

use crate::models::points::UserPoints;

/// Column list for `user_points` queries.
const POINTS_COLUMNS: &str = "id, user_id, points, last_updated";

/// Provides operations for the per-user points ledger.
pub struct PointsRepo;

impl PointsRepo {
    /// The user's ledger row, if one exists yet.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<UserPoints>, sqlx::Error> {
        let query = format!("SELECT {POINTS_COLUMNS} FROM user_points WHERE user_id = $1");
        sqlx::query_as::<_, UserPoints>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add `delta` points, creating the ledger lazily.
    ///
    /// The increment happens inside a single UPSERT statement, so two
    /// concurrent credits for the same user can never double-count or
    /// lose an update.
    pub async fn add_points(
        pool: &PgPool,
        user_id: DbId,
        delta: i64,
    ) -> Result<UserPoints, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_points (user_id, points) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 points = user_points.points + EXCLUDED.points, \
                 last_updated = NOW() \
             RETURNING {POINTS_COLUMNS}"
        );
        sqlx::query_as::<_, UserPoints>(&query)
            .bind(user_id)
            .bind(delta)
            .fetch_one(pool)
            .await
    }
}
