use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ashtrail_engine::{AchievementEngine, PeriodicScanner};
use ashtrail_events::EventBus;

mod config;
mod ingest;
mod pg_stores;
mod scan_loop;

use config::WorkerConfig;
use pg_stores::PgStores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ashtrail_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WorkerConfig::from_env()?;
    let pool = ashtrail_db::create_pool(&config.database_url).await?;
    ashtrail_db::run_migrations(&pool).await?;

    let bus = Arc::new(EventBus::default());
    let stores = Arc::new(PgStores::new(pool.clone()));
    let engine = Arc::new(AchievementEngine::new(
        stores.clone(),
        stores.clone(),
        stores.clone(),
        stores.clone(),
        bus.clone(),
    ));
    let scanner = Arc::new(PeriodicScanner::new(engine.clone(), stores.clone()));

    let cancel = CancellationToken::new();

    let ingest_task = tokio::spawn(ingest::run(
        engine.clone(),
        bus.subscribe(),
        cancel.clone(),
    ));
    let scan_task = tokio::spawn(scan_loop::run(
        scanner,
        Duration::from_secs(config.scan_interval_secs),
        cancel.clone(),
    ));

    tracing::info!("Worker started");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    cancel.cancel();
    let _ = ingest_task.await;
    let _ = scan_task.await;

    Ok(())
}
