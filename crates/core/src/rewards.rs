//! Reward policy constants.

/// Points credited to a user's ledger for every logged event, independent
/// of any achievement.
pub const POINTS_PER_LOG: i64 = 10;

/// Title of the hard-wired achievement checked on every new log. Absence
/// of this definition is not an error, just "not yet configured".
pub const FIRST_LOG_TITLE: &str = "First Log";
