// Atomic JSON file operations

use crate::error::{AppError, AppResult};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

lazy_static::lazy_static! {
    static ref FILE_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
}

/// Read a whole file as text. Returns `None` when the file does not exist.
pub fn read_text_file(path: &Path) -> AppResult<Option<String>> {
    let _lock = FILE_LOCK.lock();

    if !path.exists() {
        return Ok(None);
    }

    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(Some(contents))
}

/// Writes text atomically using write-to-temp-then-rename
pub fn write_text_file(path: &Path, contents: &str) -> AppResult<()> {
    let _lock = FILE_LOCK.lock();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.sync_all()?;

    fs::rename(&temp_path, path).map_err(|e| {
        AppError::Storage(format!("Failed to rename temp file to {:?}: {}", path, e))
    })?;

    Ok(())
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = read_text_file(path)?
        .ok_or_else(|| AppError::Storage(format!("File not found: {:?}", path)))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> AppResult<()> {
    let json_string = serde_json::to_string_pretty(data)?;
    write_text_file(path, &json_string)
}

pub fn initialize_json_file<T: Serialize>(path: &Path, default: &T) -> AppResult<()> {
    if !path.exists() {
        debug!("Initializing JSON file: {:?}", path);
        write_json_file(path, default)?;
    }
    Ok(())
}

/// Missing or unparseable files fall back to `T::default()`.
pub fn read_json_file_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match read_text_file(path) {
        Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Discarding unparseable {:?}: {}", path, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            T::default()
        }
    }
}
