//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the hub that decouples event ingestion from the
//! achievement engine: the logging path publishes [`TrackerEvent`]s and
//! the engine-side consumer reacts to them. There is no hidden
//! persistence-side coupling: everything that reacts to a new log does
//! so through an explicit subscription.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use ashtrail_core::types::DbId;

// ---------------------------------------------------------------------------
// Event type names
// ---------------------------------------------------------------------------

/// A new smoke log was recorded for a user.
pub const EVENT_LOG_RECORDED: &str = "log.recorded";

/// An achievement was awarded to a user.
pub const EVENT_ACHIEVEMENT_UNLOCKED: &str = "achievement.unlocked";

// ---------------------------------------------------------------------------
// TrackerEvent
// ---------------------------------------------------------------------------

/// A domain event that occurred in the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerEvent {
    /// Dot-separated event name, e.g. [`EVENT_LOG_RECORDED`].
    pub event_type: String,

    /// The user the event concerns.
    pub user_id: DbId,

    /// Optional id of the row that triggered the event (smoke log id for
    /// `log.recorded`, achievement id for `achievement.unlocked`).
    pub source_id: Option<DbId>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl TrackerEvent {
    /// Create a new event for a user with only the required fields.
    pub fn new(event_type: impl Into<String>, user_id: DbId) -> Self {
        Self {
            event_type: event_type.into(),
            user_id,
            source_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the originating row id.
    pub fn with_source(mut self, source_id: DbId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`TrackerEvent`]. Designed to be
/// shared via `Arc<EventBus>`.
pub struct EventBus {
    sender: broadcast::Sender<TrackerEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: TrackerEvent) {
        // Ignore the SendError, it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
