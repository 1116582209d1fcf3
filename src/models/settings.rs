// Settings data models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cadence of the expiry/aggregation pass
    pub tick_interval_ms: u64,
    /// Rows shown in the dashboard's recent rentals table
    pub recent_rentals_limit: usize,
    pub log_level: String,
    pub log_retention_days: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            recent_rentals_limit: 6,
            log_level: String::from("info"),
            log_retention_days: 7,
        }
    }
}
