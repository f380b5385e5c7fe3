//! Scheduled achievement scan loop.
//!
//! Runs [`PeriodicScanner::scan_all`] on a fixed interval so time-based
//! criteria keep advancing for users who stopped logging. A failed scan is
//! not retried immediately; the next tick covers it.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use ashtrail_engine::PeriodicScanner;

/// Run the scan loop until `cancel` is triggered.
pub async fn run(scanner: Arc<PeriodicScanner>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = interval.as_secs(), "Achievement scan loop started");

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Achievement scan loop stopping");
                break;
            }
            _ = ticker.tick() => {
                match scanner.scan_all().await {
                    Ok(summary) => {
                        tracing::debug!(
                            users_scanned = summary.users_scanned,
                            achievements_unlocked = summary.achievements_unlocked,
                            users_failed = summary.users_failed,
                            "Scan pass complete"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Scan pass failed, will retry next tick");
                    }
                }
            }
        }
    }
}
