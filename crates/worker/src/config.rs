/// Worker configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Seconds between full achievement scans (default: `86400`, once daily).
    pub scan_interval_secs: u64,
}

impl WorkerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default   |
    /// |----------------------|-----------|
    /// | `DATABASE_URL`       | required  |
    /// | `SCAN_INTERVAL_SECS` | `86400`   |
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let scan_interval_secs: u64 = std::env::var("SCAN_INTERVAL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .map_err(|_| anyhow::anyhow!("SCAN_INTERVAL_SECS must be a valid u64"))?;

        Ok(Self {
            database_url,
            scan_interval_secs,
        })
    }
}
