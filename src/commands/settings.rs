// Settings command handlers - backed by settings.json in the data dir
use crate::config::{load_settings_from, save_settings};
use crate::error::AppResult;
use crate::models::Settings;
use log::debug;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsParams {
    pub tick_interval_ms: Option<u64>,
    pub recent_rentals_limit: Option<usize>,
    pub log_level: Option<String>,
    pub log_retention_days: Option<u64>,
}

pub fn get_settings(path: &Path) -> Settings {
    load_settings_from(path)
}

/// Update settings with partial update support
pub fn update_settings(path: &Path, params: UpdateSettingsParams) -> AppResult<Settings> {
    let mut current_settings = load_settings_from(path);

    if let Some(tick_interval_ms) = params.tick_interval_ms {
        current_settings.tick_interval_ms = tick_interval_ms;
    }
    if let Some(recent_rentals_limit) = params.recent_rentals_limit {
        current_settings.recent_rentals_limit = recent_rentals_limit;
    }
    if let Some(log_level) = params.log_level {
        let log_level = log_level.trim().to_lowercase();
        if !log_level.is_empty() {
            current_settings.log_level = log_level;
        }
    }
    if let Some(log_retention_days) = params.log_retention_days {
        current_settings.log_retention_days = log_retention_days;
    }

    save_settings(path, &current_settings)?;
    debug!("Settings updated: {:?}", current_settings);
    Ok(current_settings)
}
