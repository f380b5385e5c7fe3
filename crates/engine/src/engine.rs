//! The achievement evaluation and awarding engine.

use std::sync::Arc;

use chrono::Utc;

use ashtrail_core::criteria::progress;
use ashtrail_core::error::CoreError;
use ashtrail_core::model::{AchievementDef, LogEvent};
use ashtrail_core::rewards::{FIRST_LOG_TITLE, POINTS_PER_LOG};
use ashtrail_core::types::DbId;
use ashtrail_events::bus::{EventBus, TrackerEvent, EVENT_ACHIEVEMENT_UNLOCKED};

use crate::stores::{AchievementStore, AwardStore, EventStore, PointsStore, StoreError};

/// Evaluates achievement criteria against a user's current progress and
/// awards newly satisfied ones.
///
/// Awarding is idempotent: the uniqueness of `(user, achievement)` award
/// records is the sole correctness backstop, so the engine is safe to run
/// concurrently from the event-ingestion path and the periodic scanner.
pub struct AchievementEngine {
    events: Arc<dyn EventStore>,
    achievements: Arc<dyn AchievementStore>,
    awards: Arc<dyn AwardStore>,
    points: Arc<dyn PointsStore>,
    bus: Arc<EventBus>,
}

impl AchievementEngine {
    pub fn new(
        events: Arc<dyn EventStore>,
        achievements: Arc<dyn AchievementStore>,
        awards: Arc<dyn AwardStore>,
        points: Arc<dyn PointsStore>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            events,
            achievements,
            awards,
            points,
            bus,
        }
    }

    /// Re-check every not-yet-awarded achievement for a user and award the
    /// ones whose criteria are now met. Returns the newly unlocked
    /// definitions.
    ///
    /// Definitions with criteria this engine cannot measure are skipped;
    /// store failures propagate as retryable errors.
    pub async fn evaluate(&self, user_id: DbId) -> Result<Vec<AchievementDef>, StoreError> {
        let awarded = self.awards.awarded_ids(user_id).await?;
        let definitions = self.achievements.all().await?;
        let events = self.events.events_for(user_id).await?;
        let now = Utc::now();

        let mut unlocked = Vec::new();
        for def in definitions {
            if awarded.contains(&def.id) {
                continue;
            }
            match progress(&events, &def, now) {
                Ok(snapshot) if snapshot.complete() => {
                    if self.award(user_id, &def).await? {
                        unlocked.push(def);
                    }
                }
                Ok(_) => {}
                Err(CoreError::UnsupportedCriteria { criteria_type }) => {
                    tracing::debug!(
                        achievement = %def.title,
                        criteria_type = %criteria_type,
                        "Skipping achievement with unmeasured criteria"
                    );
                }
            }
        }
        Ok(unlocked)
    }

    /// Award one achievement to a user and credit its points reward.
    ///
    /// Returns `true` only on the first award; a duplicate (including one
    /// racing this call to completion) is a no-op success and credits
    /// nothing a second time.
    pub async fn award(&self, user_id: DbId, def: &AchievementDef) -> Result<bool, StoreError> {
        let created = self.awards.create(user_id, def.id, Utc::now()).await?;
        if !created {
            return Ok(false);
        }

        self.points.add_points(user_id, def.points_reward).await?;
        tracing::info!(
            user_id,
            achievement = %def.title,
            points = def.points_reward,
            "Achievement unlocked"
        );
        self.bus.publish(
            TrackerEvent::new(EVENT_ACHIEVEMENT_UNLOCKED, user_id)
                .with_source(def.id)
                .with_payload(serde_json::json!({
                    "title": def.title,
                    "points_reward": def.points_reward,
                })),
        );
        Ok(true)
    }

    /// Hook invoked for every newly recorded event.
    ///
    /// Credits the fixed per-log reward, checks the by-title "First Log"
    /// achievement (silently skipped when not yet configured), then runs a
    /// full [`evaluate`](Self::evaluate) so count-based achievements can
    /// unlock immediately after the triggering event.
    pub async fn on_event_logged(
        &self,
        event: &LogEvent,
    ) -> Result<Vec<AchievementDef>, StoreError> {
        self.points.add_points(event.user_id, POINTS_PER_LOG).await?;

        let mut unlocked = Vec::new();
        match self.achievements.by_title(FIRST_LOG_TITLE).await? {
            Some(def) => {
                if self.award(event.user_id, &def).await? {
                    unlocked.push(def);
                }
            }
            None => {
                tracing::debug!(
                    title = FIRST_LOG_TITLE,
                    "Achievement not configured, skipping"
                );
            }
        }

        unlocked.extend(self.evaluate(event.user_id).await?);
        Ok(unlocked)
    }
}
