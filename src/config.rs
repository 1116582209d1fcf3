// Settings file handling
use crate::error::AppResult;
use crate::file_manager::{initialize_json_file, read_json_file_or_default, write_json_file};
use crate::models::Settings;
use crate::ticker::DEFAULT_TICK_INTERVAL;
use crate::utils::get_settings_json_path;
use log::warn;
use std::path::Path;
use std::time::Duration;

impl Settings {
    /// Configured tick cadence; a zero interval falls back to one second
    pub fn tick_interval(&self) -> Duration {
        if self.tick_interval_ms == 0 {
            DEFAULT_TICK_INTERVAL
        } else {
            Duration::from_millis(self.tick_interval_ms)
        }
    }
}

/// Load settings from the data dir, writing defaults on first run
pub fn load_settings() -> Settings {
    load_settings_from(&get_settings_json_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    if let Err(e) = initialize_json_file(path, &Settings::default()) {
        warn!("Failed to initialize settings at {:?}: {}", path, e);
    }
    read_json_file_or_default(path)
}

pub fn save_settings(path: &Path, settings: &Settings) -> AppResult<()> {
    write_json_file(path, settings)
}
