//! In-process domain events for the habit tracker.

pub mod bus;

pub use bus::{EventBus, TrackerEvent};
