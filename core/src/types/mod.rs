pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, Config, GeneralConfig, HistoryConfig, RetentionConfig,
    SharingConfig, Theme,
};

pub(crate) mod color;
pub use color::Rgba;

pub(crate) mod profile_id;
pub use profile_id::{MAX_PROFILE_ID_LENGTH, ProfileId, ProfileIdError};

pub(crate) mod profile;
pub use profile::{
    CardAesthetics, CustomLink, MAX_BLUR_LEVEL, MAX_CUSTOM_LINKS, Metadata, Profile,
};

pub(crate) mod history;
pub use history::{ShareChannel, ShareDirection, ShareEvent};

pub(crate) mod history_key;
pub use history_key::HistoryKey;

pub(crate) mod metadata;
