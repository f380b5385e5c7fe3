//! Repository for the `achievements` table.

use sqlx::PgPool;

use crate::models::achievement::Achievement;

/// Column list for `achievements` queries.
const ACHIEVEMENT_COLUMNS: &str =
    "id, title, description, points_reward, criteria_type, criteria_value";

/// Provides read operations for administered achievement definitions.
pub struct AchievementRepo;

impl AchievementRepo {
    /// List all achievement definitions ordered by title.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!("SELECT {ACHIEVEMENT_COLUMNS} FROM achievements ORDER BY title");
        sqlx::query_as::<_, Achievement>(&query).fetch_all(pool).await
    }

    /// Find a definition by its title.
    pub async fn find_by_title(
        pool: &PgPool,
        title: &str,
    ) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!("SELECT {ACHIEVEMENT_COLUMNS} FROM achievements WHERE title = $1");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }
}
