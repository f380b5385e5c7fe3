//! In-memory store fakes shared by the engine integration tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use ashtrail_core::model::{AchievementDef, LogEvent, PointsLedger, Trigger};
use ashtrail_core::types::{DbId, Timestamp};
use ashtrail_engine::stores::{
    AchievementStore, AwardStore, EventStore, PointsStore, StoreError, UserStore,
};
use ashtrail_engine::AchievementEngine;
use ashtrail_events::EventBus;

/// One in-memory backing store implementing all five store traits.
///
/// Failure injection: user ids in `unavailable_users` make `events_for`
/// fail retryably; ids in `missing_users` make it fail with `NotFound`.
#[derive(Default)]
pub struct InMemoryStores {
    pub events: Mutex<HashMap<DbId, Vec<LogEvent>>>,
    pub definitions: Mutex<Vec<AchievementDef>>,
    pub awards: Mutex<Vec<(DbId, DbId, Timestamp)>>,
    pub points: Mutex<HashMap<DbId, i64>>,
    pub users: Mutex<Vec<DbId>>,
    pub unavailable_users: Mutex<HashSet<DbId>>,
    pub missing_users: Mutex<HashSet<DbId>>,
}

impl InMemoryStores {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, user_id: DbId) {
        self.users.lock().unwrap().push(user_id);
    }

    pub fn add_definition(&self, def: AchievementDef) {
        self.definitions.lock().unwrap().push(def);
    }

    /// Insert an event keeping the per-user sequence newest-first.
    pub fn push_event(&self, event: LogEvent) {
        let mut map = self.events.lock().unwrap();
        let list = map.entry(event.user_id).or_default();
        let pos = list
            .iter()
            .position(|e| e.timestamp < event.timestamp)
            .unwrap_or(list.len());
        list.insert(pos, event);
    }

    pub fn award_count(&self, user_id: DbId, achievement_id: DbId) -> usize {
        self.awards
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, a, _)| *u == user_id && *a == achievement_id)
            .count()
    }

    pub fn points_for(&self, user_id: DbId) -> i64 {
        self.points.lock().unwrap().get(&user_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl EventStore for InMemoryStores {
    async fn events_for(&self, user_id: DbId) -> Result<Vec<LogEvent>, StoreError> {
        if self.unavailable_users.lock().unwrap().contains(&user_id) {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        if self.missing_users.lock().unwrap().contains(&user_id) {
            return Err(StoreError::NotFound {
                entity: "user",
                id: user_id,
            });
        }
        Ok(self
            .events
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl AchievementStore for InMemoryStores {
    async fn all(&self) -> Result<Vec<AchievementDef>, StoreError> {
        Ok(self.definitions.lock().unwrap().clone())
    }

    async fn by_title(&self, title: &str) -> Result<Option<AchievementDef>, StoreError> {
        Ok(self
            .definitions
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.title == title)
            .cloned())
    }
}

#[async_trait]
impl AwardStore for InMemoryStores {
    async fn awarded_ids(&self, user_id: DbId) -> Result<Vec<DbId>, StoreError> {
        Ok(self
            .awards
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _, _)| *u == user_id)
            .map(|(_, a, _)| *a)
            .collect())
    }

    async fn create(
        &self,
        user_id: DbId,
        achievement_id: DbId,
        earned_at: Timestamp,
    ) -> Result<bool, StoreError> {
        let mut awards = self.awards.lock().unwrap();
        // The uniqueness constraint: duplicates are a clean no-op.
        if awards.iter().any(|(u, a, _)| *u == user_id && *a == achievement_id) {
            return Ok(false);
        }
        awards.push((user_id, achievement_id, earned_at));
        Ok(true)
    }
}

#[async_trait]
impl PointsStore for InMemoryStores {
    async fn add_points(&self, user_id: DbId, delta: i64) -> Result<PointsLedger, StoreError> {
        let mut points = self.points.lock().unwrap();
        let entry = points.entry(user_id).or_insert(0);
        *entry += delta;
        Ok(PointsLedger {
            user_id,
            points: *entry,
            last_updated: Utc::now(),
        })
    }

    async fn get(&self, user_id: DbId) -> Result<Option<PointsLedger>, StoreError> {
        Ok(self.points.lock().unwrap().get(&user_id).map(|p| PointsLedger {
            user_id,
            points: *p,
            last_updated: Utc::now(),
        }))
    }
}

#[async_trait]
impl UserStore for InMemoryStores {
    async fn user_ids(&self) -> Result<Vec<DbId>, StoreError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Build an engine wired to the given fake stores and a fresh bus.
pub fn build_engine(stores: &Arc<InMemoryStores>) -> (Arc<AchievementEngine>, Arc<EventBus>) {
    let bus = Arc::new(EventBus::default());
    let engine = Arc::new(AchievementEngine::new(
        stores.clone(),
        stores.clone(),
        stores.clone(),
        stores.clone(),
        bus.clone(),
    ));
    (engine, bus)
}

/// A `total_logs` achievement definition.
pub fn total_logs_def(id: DbId, title: &str, goal: i64, reward: i64) -> AchievementDef {
    AchievementDef {
        id,
        title: title.to_string(),
        description: format!("Log {goal} events"),
        points_reward: reward,
        criteria_type: "total_logs".to_string(),
        criteria_value: goal,
    }
}

/// A `streak_days` achievement definition.
pub fn streak_def(id: DbId, title: &str, goal: i64, reward: i64) -> AchievementDef {
    AchievementDef {
        id,
        title: title.to_string(),
        description: format!("Stay clear for {goal} days"),
        points_reward: reward,
        criteria_type: "streak_days".to_string(),
        criteria_value: goal,
    }
}

/// An event logged `hours_ago` hours before now.
pub fn log_event(id: DbId, user_id: DbId, hours_ago: i64) -> LogEvent {
    LogEvent {
        id,
        user_id,
        timestamp: Utc::now() - Duration::hours(hours_ago),
        trigger: Trigger::Habit,
        mood_before: Some(3),
        mood_after: Some(3),
        note: None,
        user_brand_id: None,
    }
}
