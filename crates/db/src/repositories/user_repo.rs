//! Repository for the `users` table.

use sqlx::PgPool;

use ashtrail_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const USER_COLUMNS: &str = "id, username, created_at";

/// Provides read operations for user identities.
pub struct UserRepo;

impl UserRepo {
    /// Ids of every user, for the scan fan-out.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM users ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
