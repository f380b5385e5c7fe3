//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod award_repo;
pub mod brand_repo;
pub mod points_repo;
pub mod smoke_log_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use award_repo::AwardRepo;
pub use brand_repo::BrandRepo;
pub use points_repo::PointsRepo;
pub use smoke_log_repo::SmokeLogRepo;
pub use user_repo::UserRepo;
