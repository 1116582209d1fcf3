//! Persistence port.
//!
//! State is written as whole JSON snapshots under three independent keys.
//! The store itself only moves strings; (de)serialisation and the
//! "absent or corrupt means default" policy live in [`load_or_default`].

mod file_store;
mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::error::AppResult;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub const RENTALS_KEY: &str = "rental_dashboard_v2_rentals";
pub const INFOS_KEY: &str = "rental_dashboard_v2_infos";
pub const LOGGED_IN_KEY: &str = "rental_dashboard_v2_logged_in";

/// Opaque named-value store (the browser's localStorage, a directory of
/// files, a map in memory)
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Load `key`, falling back to `T::default()` when it is missing, unreadable
/// or does not parse. Never an error.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", key, e);
            return T::default();
        }
    };

    // A stored JSON `null` reads as the default too
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!("Discarding unparseable {}: {}", key, e);
            T::default()
        }
    }
}

/// Load a JSON array under `key` record by record. Elements that do not
/// parse as `T` are skipped; a value that is not an array at all reads as
/// empty.
pub fn load_list_or_default<T>(store: &dyn KeyValueStore, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let raw: Vec<Value> = load_or_default(store, key);
    let total = raw.len();
    let items: Vec<T> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping unreadable record in {}: {}", key, e);
                None
            }
        })
        .collect();

    if items.len() < total {
        warn!("Kept {} of {} records from {}", items.len(), total, key);
    }
    items
}

pub fn save_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
