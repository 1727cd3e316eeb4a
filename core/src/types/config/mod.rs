mod app;
mod core;
mod retention;

pub use app::{AppConfig, AppConfigError, GeneralConfig, HistoryConfig, SharingConfig, Theme};
pub use core::Config;
pub use retention::RetentionConfig;
