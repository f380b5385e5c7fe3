//! Periodic re-evaluation of achievement criteria for all users.
//!
//! Time-based criteria (streaks) advance with the wall clock and would
//! never be re-checked without a new event; the scanner closes that gap.

use std::sync::Arc;

use ashtrail_core::types::DbId;

use crate::engine::AchievementEngine;
use crate::stores::{StoreError, UserStore};

/// Outcome of one full scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub users_scanned: usize,
    pub achievements_unlocked: usize,
    pub users_failed: usize,
}

/// Fans the achievement evaluation out over every known user.
pub struct PeriodicScanner {
    engine: Arc<AchievementEngine>,
    users: Arc<dyn UserStore>,
}

impl PeriodicScanner {
    pub fn new(engine: Arc<AchievementEngine>, users: Arc<dyn UserStore>) -> Self {
        Self { engine, users }
    }

    /// Evaluate achievements for every user, independently.
    ///
    /// One user's failure never aborts the rest of the scan; failed users
    /// are counted and picked up again on the next scheduled run. Only a
    /// failure to enumerate users at all is returned as an error.
    pub async fn scan_all(&self) -> Result<ScanSummary, StoreError> {
        let user_ids = self.users.user_ids().await?;
        let mut summary = ScanSummary::default();

        for user_id in user_ids {
            match self.scan_user(user_id).await {
                Ok(unlocked) => {
                    summary.users_scanned += 1;
                    summary.achievements_unlocked += unlocked;
                }
                Err(StoreError::NotFound { entity, id }) => {
                    // The user may have been deleted mid-scan.
                    tracing::debug!(user_id, entity, id, "Skipping missing user");
                }
                Err(e) => {
                    summary.users_failed += 1;
                    tracing::error!(user_id, error = %e, "Achievement scan failed for user");
                }
            }
        }

        tracing::info!(
            users_scanned = summary.users_scanned,
            achievements_unlocked = summary.achievements_unlocked,
            users_failed = summary.users_failed,
            "Achievement scan finished"
        );
        Ok(summary)
    }

    async fn scan_user(&self, user_id: DbId) -> Result<usize, StoreError> {
        let unlocked = self.engine.evaluate(user_id).await?;
        Ok(unlocked.len())
    }
}
