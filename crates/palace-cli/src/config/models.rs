use palace::engine::config as core_config;
use std::path::PathBuf;
use std::time::Duration;

pub struct AppConfig {
    pub guestbook_path: PathBuf,
    pub pause: Duration,
    pub core_config: core_config::PalaceConfig,
}
