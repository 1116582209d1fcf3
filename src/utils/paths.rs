use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::AppResult;

static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Environment variable that relocates the whole data directory
pub const DATA_DIR_ENV: &str = "AWANKU_DATA_DIR";

pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR
        .get_or_init(|| {
            if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
                return PathBuf::from(dir);
            }
            let base_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("Awanku")
        })
        .clone()
}

pub fn get_data_dir() -> PathBuf {
    get_app_data_dir().join("data")
}

pub fn get_logs_dir() -> PathBuf {
    get_app_data_dir().join("logs")
}

pub fn get_settings_json_path() -> PathBuf {
    get_data_dir().join("settings.json")
}

pub fn initialize_data_directories() -> AppResult<()> {
    let directories = [get_data_dir(), get_logs_dir()];

    for dir in &directories {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            log::debug!("Created directory: {:?}", dir);
        }
    }

    Ok(())
}
