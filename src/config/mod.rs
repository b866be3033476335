// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, loaded from a
//! user-editable `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[api]` - Metadata endpoint version and access token
//! - `[player]` - Keyboard seek step and control bar auto-hide delay
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `EMBED_PLAYER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use embed_player::config;
//!
//! let cfg = config::load().unwrap_or_default();
//! let settings = cfg.player_settings();
//! assert!(settings.keyboard_seek_step.value() > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::video::KeyboardSeekStep;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Metadata endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// API version sent with every request.
    #[serde(default = "default_api_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Access token appended to requests when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: default_api_version(),
            access_token: None,
        }
    }
}

/// Playback control settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Seconds skipped by the left/right arrow keys.
    #[serde(
        default = "default_keyboard_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_seek_step_secs: Option<f64>,

    /// Milliseconds of pointer inactivity before the control bar hides.
    #[serde(
        default = "default_controls_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub controls_hide_delay_ms: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            keyboard_seek_step_secs: default_keyboard_seek_step_secs(),
            controls_hide_delay_ms: default_controls_hide_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub player: PlayerConfig,
}

/// Resolved runtime settings handed to the playback controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub keyboard_seek_step: KeyboardSeekStep,
    pub controls_hide_delay: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Config::default().player_settings()
    }
}

impl Config {
    /// Resolves the optional fields into concrete player settings.
    #[must_use]
    pub fn player_settings(&self) -> PlayerSettings {
        PlayerSettings {
            keyboard_seek_step: self
                .player
                .keyboard_seek_step_secs
                .map(KeyboardSeekStep::new)
                .unwrap_or_default(),
            controls_hide_delay: Duration::from_millis(
                self.player
                    .controls_hide_delay_ms
                    .unwrap_or(DEFAULT_CONTROLS_HIDE_DELAY_MS),
            ),
        }
    }

    /// Returns the API version, falling back to the default.
    #[must_use]
    pub fn api_version(&self) -> &str {
        self.api.version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_api_version() -> Option<String> {
    Some(DEFAULT_API_VERSION.to_string())
}

fn default_keyboard_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_KEYBOARD_SEEK_STEP_SECS)
}

fn default_controls_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// A missing file yields the default configuration.
pub fn load() -> Result<Config> {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads configuration from a specific path.
///
/// Content that is not valid TOML is logged and replaced by defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[api]\nversion = \"5.131\"\naccess_token = \"abc\"\n\n[player]\nkeyboard_seek_step_secs = 5.0\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.api_version(), "5.131");
        assert_eq!(loaded.api.access_token.as_deref(), Some("abc"));
        assert_eq!(loaded.player.keyboard_seek_step_secs, Some(5.0));
        // Missing fields keep their defaults
        assert_eq!(
            loaded.player.controls_hide_delay_ms,
            Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
        );
    }

    #[test]
    fn load_from_path_invalid_toml_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("absent.toml");

        match load_from_path(&config_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_with_override(Some(temp_dir.path().to_path_buf()))
            .expect("missing file is not an error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn player_settings_clamp_seek_step() {
        let config = Config {
            player: PlayerConfig {
                keyboard_seek_step_secs: Some(500.0),
                controls_hide_delay_ms: Some(1500),
            },
            ..Config::default()
        };
        let settings = config.player_settings();
        assert_abs_diff_eq!(
            settings.keyboard_seek_step.value(),
            MAX_KEYBOARD_SEEK_STEP_SECS
        );
        assert_eq!(settings.controls_hide_delay, Duration::from_millis(1500));
    }

    #[test]
    fn default_settings_match_constants() {
        let settings = PlayerSettings::default();
        assert_abs_diff_eq!(
            settings.keyboard_seek_step.value(),
            DEFAULT_KEYBOARD_SEEK_STEP_SECS
        );
        assert_eq!(
            settings.controls_hide_delay,
            Duration::from_millis(DEFAULT_CONTROLS_HIDE_DELAY_MS)
        );
    }
}
