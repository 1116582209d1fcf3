use super::KeyValueStore;
use crate::error::AppResult;
use crate::file_manager::{read_text_file, write_text_file};
use std::path::{Path, PathBuf};

/// One `<key>.json` file per key inside a directory, written atomically
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        read_text_file(&self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        write_text_file(&self.path_for(key), value)
    }
}
