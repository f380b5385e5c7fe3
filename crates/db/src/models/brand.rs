//! Brand and per-user brand pricing entity models.

use serde::Serialize;
use sqlx::FromRow;

use ashtrail_core::types::{DbId, Timestamp};

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A row from the `user_brands` table: the price a user pays for a brand.
/// Unique per `(user_id, brand_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBrand {
    pub id: DbId,
    pub user_id: DbId,
    pub brand_id: DbId,
    /// Price per pack in the user's currency.
    pub price: f64,
}
