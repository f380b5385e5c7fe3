//! Store abstractions the engine is evaluated against.
//!
//! Production code backs these with PostgreSQL repositories; tests use
//! in-memory fakes. All methods are scoped to a single user where a user
//! id appears; cross-user operations have no ordering requirement.

use async_trait::async_trait;

use ashtrail_core::model::{AchievementDef, LogEvent, PointsLedger};
use ashtrail_core::types::{DbId, Timestamp};

/// Failure surfaced by a store implementation.
///
/// `Unavailable` is retryable: callers propagate it and the periodic scan
/// picks the user up again on its next scheduled run.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to a user's ordered, append-only event log.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events for a user, ordered newest-first.
    async fn events_for(&self, user_id: DbId) -> Result<Vec<LogEvent>, StoreError>;
}

/// Read access to administered achievement definitions.
#[async_trait]
pub trait AchievementStore: Send + Sync {
    /// Every achievement definition.
    async fn all(&self) -> Result<Vec<AchievementDef>, StoreError>;

    /// Look a definition up by its title. `None` when not yet configured.
    async fn by_title(&self, title: &str) -> Result<Option<AchievementDef>, StoreError>;
}

/// Durable award records, unique per `(user, achievement)`.
#[async_trait]
pub trait AwardStore: Send + Sync {
    /// Ids of all achievements already awarded to the user.
    async fn awarded_ids(&self, user_id: DbId) -> Result<Vec<DbId>, StoreError>;

    /// Create the award record if it does not exist yet.
    ///
    /// Returns `true` when a new record was created, `false` when the
    /// `(user, achievement)` pair was already awarded. A race losing to
    /// the uniqueness constraint is a clean no-op, never an error.
    async fn create(
        &self,
        user_id: DbId,
        achievement_id: DbId,
        earned_at: Timestamp,
    ) -> Result<bool, StoreError>;
}

/// Per-user points ledger.
#[async_trait]
pub trait PointsStore: Send + Sync {
    /// Atomically add `delta` points to the user's ledger, creating it at
    /// zero first if absent. Implementations must apply the increment as a
    /// single read-increment-write scoped to the user.
    async fn add_points(&self, user_id: DbId, delta: i64) -> Result<PointsLedger, StoreError>;

    /// The user's current ledger, if one exists.
    async fn get(&self, user_id: DbId) -> Result<Option<PointsLedger>, StoreError>;
}

/// User enumeration for the periodic scan fan-out.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Ids of every known user.
    async fn user_ids(&self) -> Result<Vec<DbId>, StoreError>;
}
