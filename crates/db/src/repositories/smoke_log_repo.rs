//! Repository for the `smoke_logs` table.

use sqlx::PgPool;

use ashtrail_core::types::DbId;

use crate::models::smoke_log::{NewSmokeLog, SmokeLog};

/// Column list for `smoke_logs` queries.
const SMOKE_LOG_COLUMNS: &str =
    "id, user_id, timestamp, trigger, mood_before, mood_after, note, user_brand_id";

/// Provides read/write operations for smoke logs.
pub struct SmokeLogRepo;

impl SmokeLogRepo {
    /// All logs for a user, ordered newest-first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<SmokeLog>, sqlx::Error> {
        let query = format!(
            "SELECT {SMOKE_LOG_COLUMNS} FROM smoke_logs \
             WHERE user_id = $1 \
             ORDER BY timestamp DESC, id DESC"
        );
        sqlx::query_as::<_, SmokeLog>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new log row, returning the stored row.
    ///
    /// The timestamp is assigned by the database so ordering follows the
    /// moment of recording.
    pub async fn insert(pool: &PgPool, new: &NewSmokeLog) -> Result<SmokeLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO smoke_logs \
                (user_id, trigger, mood_before, mood_after, note, user_brand_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SMOKE_LOG_COLUMNS}"
        );
        sqlx::query_as::<_, SmokeLog>(&query)
            .bind(new.user_id)
            .bind(new.trigger.as_str())
            .bind(new.mood_before)
            .bind(new.mood_after)
            .bind(new.note.as_deref())
            .bind(new.user_brand_id)
            .fetch_one(pool)
            .await
    }

    /// Total number of logs for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM smoke_logs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Total cost of all logs for a user, from the per-user brand price of
    /// each log's cost source. Logs without a brand reference cost nothing.
    pub async fn total_cost(pool: &PgPool, user_id: DbId) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(ub.price), 0)::float8 \
             FROM smoke_logs sl \
             JOIN user_brands ub ON ub.id = sl.user_brand_id \
             WHERE sl.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
