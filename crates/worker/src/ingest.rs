//! Bus-driven ingestion hook.
//!
//! Subscribes to `log.recorded` events and drives
//! [`AchievementEngine::on_event_logged`] for each one: per-log points
//! plus an immediate achievement re-check.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use ashtrail_core::model::LogEvent;
use ashtrail_engine::AchievementEngine;
use ashtrail_events::bus::{TrackerEvent, EVENT_LOG_RECORDED};

/// Run the ingestion loop until the bus closes or `cancel` fires.
pub async fn run(
    engine: Arc<AchievementEngine>,
    mut receiver: broadcast::Receiver<TrackerEvent>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Ingestion hook stopping");
                break;
            }
            received = receiver.recv() => match received {
                Ok(event) => handle(&engine, event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Missed logs are still caught by the periodic scan.
                    tracing::warn!(skipped = n, "Ingestion hook lagged behind the bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, ingestion hook shutting down");
                    break;
                }
            }
        }
    }
}

async fn handle(engine: &AchievementEngine, event: TrackerEvent) {
    if event.event_type != EVENT_LOG_RECORDED {
        return;
    }

    let log: LogEvent = match serde_json::from_value(event.payload.clone()) {
        Ok(log) => log,
        Err(e) => {
            tracing::error!(error = %e, "Malformed log.recorded payload");
            return;
        }
    };

    match engine.on_event_logged(&log).await {
        Ok(unlocked) if !unlocked.is_empty() => {
            tracing::info!(
                user_id = log.user_id,
                count = unlocked.len(),
                "New log unlocked achievements"
            );
        }
        Ok(_) => {}
        Err(e) => {
            // Retryable: the periodic scan re-evaluates this user later.
            tracing::error!(user_id = log.user_id, error = %e, "Ingestion hook failed");
        }
    }
}
