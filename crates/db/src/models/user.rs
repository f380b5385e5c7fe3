//! User entity model.

use serde::Serialize;
use sqlx::FromRow;

use ashtrail_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
}
