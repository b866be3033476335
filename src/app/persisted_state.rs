// SPDX-License-Identifier: MPL-2.0
//! Player state persistence using CBOR format.
//!
//! The only value that survives a session is the last-used volume level.
//! It is stored in CBOR, separate from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`StateFileStore::open_in`]
//! 2. Set `EMBED_PLAYER_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::port::PreferenceStore;
use crate::domain::video::Volume;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Player state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last volume level chosen by the user (0.0–1.0).
    #[serde(default)]
    pub volume: Option<f32>,
}

impl AppState {
    /// Loads state from `base_dir`, or the data directory when `None`.
    ///
    /// Returns the state plus an optional warning key when the file exists
    /// but cannot be read; defaults are used in that case.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves state to `base_dir` (or the data directory), creating it if needed.
    ///
    /// Returns an optional warning key if the save failed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// [`PreferenceStore`] backed by the CBOR state file.
#[derive(Debug, Clone)]
pub struct StateFileStore {
    base_dir: Option<PathBuf>,
    state: AppState,
}

impl StateFileStore {
    /// Opens the store at the default data directory.
    pub fn open() -> Self {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> Self {
        let (state, warning) = AppState::load_from(base_dir.clone());
        if let Some(key) = warning {
            log::warn!("Player state unreadable, using defaults ({key})");
        }
        Self { base_dir, state }
    }
}

impl PreferenceStore for StateFileStore {
    fn load_volume(&self) -> Option<Volume> {
        self.state.volume.map(Volume::new)
    }

    fn save_volume(&mut self, volume: Volume) {
        if self.state.volume == Some(volume.value()) {
            return;
        }
        self.state.volume = Some(volume.value());
        if let Some(key) = self.state.save_to(self.base_dir.clone()) {
            log::warn!("Failed to persist volume ({key})");
        }
    }
}
