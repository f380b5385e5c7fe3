//! Achievement evaluation and awarding over injected store handles.
//!
//! The engine never reaches for ambient state: every collaborator (the
//! event log, achievement definitions, award records, the points ledger)
//! is an injected trait object, so the whole evaluation path runs
//! deterministically against in-memory fakes under test.

pub mod engine;
pub mod scanner;
pub mod stores;

pub use engine::AchievementEngine;
pub use scanner::{PeriodicScanner, ScanSummary};
pub use stores::{
    AchievementStore, AwardStore, EventStore, PointsStore, StoreError, UserStore,
};
