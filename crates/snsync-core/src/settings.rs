//! Settings store
//!
//! Flat key-value persistence backing two mappings: instance name to
//! Basic-Auth token, and endpoint-URL fingerprint to baseline content
//! fingerprint. The store is loaded and saved as a whole JSON document.
//! Without a path it stays in memory, which is what tests use.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or persisting the settings store
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    #[error("failed to read settings file: {0}")]
    Read(#[source] io::Error),

    /// Failed to write the settings file
    #[error("failed to write settings file: {0}")]
    Write(#[source] io::Error),

    /// Settings file content is not a JSON string map
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistent key-value settings
#[derive(Debug, Default)]
pub struct Settings {
    values: HashMap<String, String>,
    /// Path to persist to; `None` keeps the store in memory only
    path: Option<PathBuf>,
}

impl Settings {
    /// Create an in-memory settings store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a settings store backed by a file on disk
    ///
    /// Existing content is loaded; a missing file starts empty.
    pub fn with_path(path: PathBuf) -> Result<Self, SettingsError> {
        let mut settings = Self {
            values: HashMap::new(),
            path: Some(path.clone()),
        };

        if path.exists() {
            settings.load()?;
        }

        Ok(settings)
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value (in memory; call [`Settings::persist`] to write it out)
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Write the whole store to disk
    ///
    /// A no-op for in-memory stores.
    pub fn persist(&self) -> Result<(), SettingsError> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&self.values)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SettingsError::Write)?;
        }

        fs::write(path, json).map_err(SettingsError::Write)
    }

    fn load(&mut self) -> Result<(), SettingsError> {
        let Some(ref path) = self.path else {
            return Ok(());
        };

        let json = fs::read_to_string(path).map_err(SettingsError::Read)?;
        self.values = serde_json::from_str(&json)?;
        Ok(())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_store() {
        let mut settings = Settings::new();
        assert!(settings.get("key").is_none());

        settings.set("key", "value");
        assert_eq!(settings.get("key"), Some("value"));

        // Persist is a no-op without a path
        settings.persist().unwrap();
    }

    #[test]
    fn test_set_overwrites() {
        let mut settings = Settings::new();
        settings.set("key", "first");
        settings.set("key", "second");
        assert_eq!(settings.get("key"), Some("second"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_persistence_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        {
            let mut settings = Settings::with_path(path.clone()).unwrap();
            settings.set("dev12345", "dXNlcjpwYXNz");
            settings.persist().unwrap();
        }

        {
            let settings = Settings::with_path(path).unwrap();
            assert_eq!(settings.get("dev12345"), Some("dXNlcjpwYXNz"));
        }
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.json");

        let settings = Settings::with_path(path).unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_persist_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("settings.json");

        let mut settings = Settings::with_path(path.clone()).unwrap();
        settings.set("a", "b");
        settings.persist().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Settings::with_path(path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
