//! Repository for the `brands` and `user_brands` tables.

use sqlx::PgPool;

use ashtrail_core::types::DbId;

use crate::models::brand::{Brand, UserBrand};

/// Column list for `brands` queries.
const BRAND_COLUMNS: &str = "id, name, created_at";

/// Column list for `user_brands` queries.
const USER_BRAND_COLUMNS: &str = "id, user_id, brand_id, price";

/// Provides operations for brands and per-user brand pricing.
pub struct BrandRepo;

impl BrandRepo {
    /// List all brands ordered by name.
    pub async fn list_brands(pool: &PgPool) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {BRAND_COLUMNS} FROM brands ORDER BY name");
        sqlx::query_as::<_, Brand>(&query).fetch_all(pool).await
    }

    /// List the user's priced brands, ordered by brand name.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<UserBrand>, sqlx::Error> {
        let query = "SELECT ub.id, ub.user_id, ub.brand_id, ub.price \
             FROM user_brands ub \
             JOIN brands b ON b.id = ub.brand_id \
             WHERE ub.user_id = $1 \
             ORDER BY b.name";
        sqlx::query_as::<_, UserBrand>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set (or update) the price a user pays for a brand.
    pub async fn set_price(
        pool: &PgPool,
        user_id: DbId,
        brand_id: DbId,
        price: f64,
    ) -> Result<UserBrand, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_brands (user_id, brand_id, price) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, brand_id) DO UPDATE SET price = EXCLUDED.price \
             RETURNING {USER_BRAND_COLUMNS}"
        );
        sqlx::query_as::<_, UserBrand>(&query)
            .bind(user_id)
            .bind(brand_id)
            .bind(price)
            .fetch_one(pool)
            .await
    }
}
