// SPDX-License-Identifier: MPL-2.0
//! Key-value persistence for small pieces of application state.
//!
//! The navbar's display name (and any future per-user state) goes through
//! the [`KeyValueStore`] trait so components never touch the storage medium
//! directly. The production backend is [`FileStore`], a CBOR-encoded string
//! map in the app data directory; [`MemoryStore`] backs tests and ephemeral
//! sessions.
//!
//! Values are stored in CBOR (Concise Binary Object Representation) for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()` with explicit path override
//! 2. Set `PICTOPY_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// String key-value store injected into components that persist state.
///
/// Writes are fire-and-forget: the store never reports failure to the
/// caller, matching the last-writer-wins contract of the stored values.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// CBOR-backed store persisted to `state.cbor` in the app data directory.
pub struct FileStore {
    values: HashMap<String, String>,
    /// Explicit base directory override (tests, portable mode).
    base_dir: Option<PathBuf>,
}

impl FileStore {
    /// Loads the store from the default location.
    ///
    /// Returns a tuple of (store, optional_warning). If loading fails, returns
    /// an empty store with a warning message explaining what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path
    ///   resolution (see [`paths::get_app_data_dir`]).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let empty = |base_dir: Option<PathBuf>| Self {
            values: HashMap::new(),
            base_dir,
        };

        let Some(path) = Self::state_file_path(base_dir.clone()) else {
            return (empty(base_dir), None);
        };

        if !path.exists() {
            return (empty(base_dir), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(values) => (Self { values, base_dir }, None),
                    Err(_) => (
                        empty(base_dir),
                        Some("failed to parse state.cbor, starting empty".to_string()),
                    ),
                }
            }
            Err(_) => (
                empty(base_dir),
                Some("failed to read state.cbor, starting empty".to_string()),
            ),
        }
    }

    /// Returns the full path to the state file for the given override.
    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Writes the current map back to disk.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning message if the write failed.
    fn persist(&self) -> Option<String> {
        let Some(path) = Self::state_file_path(self.base_dir.clone()) else {
            return Some("could not resolve state file path".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("could not create state directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(&self.values, writer).is_err() {
                    return Some("could not write state.cbor".to_string());
                }
                None
            }
            Err(_) => Some("could not create state.cbor".to_string()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(warning) = self.persist() {
            eprintln!("Failed to save state: {}", warning);
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
