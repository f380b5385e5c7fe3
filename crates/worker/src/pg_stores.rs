//! PostgreSQL-backed implementations of the engine's store traits.
//!
//! One [`PgStores`] value implements all five traits by delegating to the
//! `ashtrail-db` repositories and converting rows into the core domain
//! types at the boundary.

use async_trait::async_trait;

use ashtrail_core::model::{AchievementDef, LogEvent, PointsLedger};
use ashtrail_core::types::{DbId, Timestamp};
use ashtrail_db::repositories::{
    AchievementRepo, AwardRepo, PointsRepo, SmokeLogRepo, UserRepo,
};
use ashtrail_db::DbPool;
use ashtrail_engine::stores::{
    AchievementStore, AwardStore, EventStore, PointsStore, StoreError, UserStore,
};

/// Store handle over a shared connection pool.
#[derive(Clone)]
pub struct PgStores {
    pool: DbPool,
}

impl PgStores {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Database failures are retryable from the engine's point of view.
fn store_err(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl EventStore for PgStores {
    async fn events_for(&self, user_id: DbId) -> Result<Vec<LogEvent>, StoreError> {
        let rows = SmokeLogRepo::list_for_user(&self.pool, user_id)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(LogEvent::from).collect())
    }
}

#[async_trait]
impl AchievementStore for PgStores {
    async fn all(&self) -> Result<Vec<AchievementDef>, StoreError> {
        let rows = AchievementRepo::list_all(&self.pool).await.map_err(store_err)?;
        Ok(rows.into_iter().map(AchievementDef::from).collect())
    }

    async fn by_title(&self, title: &str) -> Result<Option<AchievementDef>, StoreError> {
        let row = AchievementRepo::find_by_title(&self.pool, title)
            .await
            .map_err(store_err)?;
        Ok(row.map(AchievementDef::from))
    }
}

#[async_trait]
impl AwardStore for PgStores {
    async fn awarded_ids(&self, user_id: DbId) -> Result<Vec<DbId>, StoreError> {
        AwardRepo::awarded_ids(&self.pool, user_id)
            .await
            .map_err(store_err)
    }

    async fn create(
        &self,
        user_id: DbId,
        achievement_id: DbId,
        earned_at: Timestamp,
    ) -> Result<bool, StoreError> {
        AwardRepo::create(&self.pool, user_id, achievement_id, earned_at)
            .await
            .map_err(store_err)
    }
}

#[async_trait]
impl PointsStore for PgStores {
    async fn add_points(&self, user_id: DbId, delta: i64) -> Result<PointsLedger, StoreError> {
        let row = PointsRepo::add_points(&self.pool, user_id, delta)
            .await
            .map_err(store_err)?;
        Ok(PointsLedger::from(row))
    }

    async fn get(&self, user_id: DbId) -> Result<Option<PointsLedger>, StoreError> {
        let row = PointsRepo::get(&self.pool, user_id).await.map_err(store_err)?;
        Ok(row.map(PointsLedger::from))
    }
}

#[async_trait]
impl UserStore for PgStores {
    async fn user_ids(&self) -> Result<Vec<DbId>, StoreError> {
        UserRepo::list_ids(&self.pool).await.map_err(store_err)
    }
}
