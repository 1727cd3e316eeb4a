use std::path::PathBuf;

/// Core configuration for ProfileStore initialization.
#[derive(Clone)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("cardtap.redb")
    }
}
