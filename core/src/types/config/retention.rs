use super::HistoryConfig;
use std::time::Duration;

/// Retention window passed to maintenance/prune operations.
#[derive(Clone, Copy)]
pub struct RetentionConfig {
    pub history_ttl: Duration,
}

impl From<&HistoryConfig> for RetentionConfig {
    fn from(config: &HistoryConfig) -> Self {
        Self {
            history_ttl: Duration::from_secs(config.retention_days as u64 * 24 * 60 * 60),
        }
    }
}
