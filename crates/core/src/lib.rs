//! Pure domain types and statistics for the habit-tracking engine.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the achievement engine, and any future CLI tooling.
//! All functions here are pure: the caller supplies the event slice and
//! the reference instant ("now"), which keeps every computation
//! deterministic under test.

pub mod buckets;
pub mod criteria;
pub mod error;
pub mod model;
pub mod rewards;
pub mod stats;
pub mod types;
