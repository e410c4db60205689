mod app_config;
pub mod category;
mod config;
pub mod snapshot;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env};
pub use snapshot::SnapshotId;
pub use types::{
    CategoryStats, ComparisonRecord, ComparisonSeries, GrowthRecord, SnapshotRow, TagCountTable,
};

/// Tags whose newer count is below this floor are left out of growth stats.
pub const MIN_COUNT_THRESHOLD: u64 = 50;

/// Length of every ranked list in a comparison.
pub const TOP_COUNT: usize = 20;

/// Prefix that separates weekly comparison ids from daily ones sharing a date.
pub const WEEKLY_ID_PREFIX: &str = "weekly-";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
