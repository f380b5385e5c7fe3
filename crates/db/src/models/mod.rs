//! Entity models matching database rows.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct per table and,
//! where the engine consumes the data, a conversion into the corresponding
//! `ashtrail-core` domain type.

pub mod achievement;
pub mod brand;
pub mod points;
pub mod smoke_log;
pub mod user;
