// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Playback volume bounds and keyboard step
//! - **Seek**: Keyboard seek step bounds
//! - **Controls**: Control bar auto-hide delay
//! - **Suggestions**: Grid packing constants for the end-of-video panel
//! - **Metadata API**: Remote endpoint defaults

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume used when nothing has been persisted yet.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP: f32 = 0.05;

/// Effective volume below which the "low" icon is shown.
pub const VOLUME_ICON_LOW_THRESHOLD: f32 = 0.33;

/// Effective volume below which the "mid" icon is shown.
pub const VOLUME_ICON_MID_THRESHOLD: f32 = 0.66;

// ==========================================================================
// Video Seek Defaults
// ==========================================================================

/// Default keyboard seek step in seconds (arrow keys).
pub const DEFAULT_KEYBOARD_SEEK_STEP_SECS: f64 = 3.0;

/// Minimum keyboard seek step in seconds.
pub const MIN_KEYBOARD_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum keyboard seek step in seconds.
pub const MAX_KEYBOARD_SEEK_STEP_SECS: f64 = 30.0;

/// Cumulative played time after which the "watched" signal fires.
pub const WATCHED_THRESHOLD_SECS: f64 = 5.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Inactivity delay before the control bar hides during playback.
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u64 = 3000;

/// Player width below which the compact layout is used.
pub const COMPACT_PLAYER_WIDTH: f64 = 400.0;

// ==========================================================================
// Suggestions Grid Defaults
// ==========================================================================

/// Vertical space taken by the header and footer bands of the panel.
pub const SUGGESTIONS_CHROME_HEIGHT: f64 = 95.0;

/// Minimum width of one suggestion column.
pub const SUGGESTION_MIN_CELL_WIDTH: f64 = 200.0;

/// Minimum height of one suggestion row.
pub const SUGGESTION_MIN_CELL_HEIGHT: f64 = 120.0;

/// Preferred width of one suggestion column.
pub const SUGGESTION_CELL_WIDTH: u32 = 320;

/// Preferred height of one suggestion row.
pub const SUGGESTION_CELL_HEIGHT: u32 = 240;

/// Maximum number of suggestion cells on a regular container.
pub const MAX_SUGGESTION_CELLS: u32 = 12;

/// Width above which (together with the height threshold) the fixed grid applies.
pub const LARGE_CONTAINER_WIDTH: f64 = 1000.0;

/// Height above which (together with the width threshold) the fixed grid applies.
pub const LARGE_CONTAINER_HEIGHT: f64 = 500.0;

/// Columns of the fixed grid used on large containers.
pub const LARGE_GRID_COLUMNS: u32 = 4;

/// Rows of the fixed grid used on large containers.
pub const LARGE_GRID_ROWS: u32 = 3;

// ==========================================================================
// Metadata API Defaults
// ==========================================================================

/// Base URL of the metadata endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.vk.com/method/";

/// API version sent with every request.
pub const DEFAULT_API_VERSION: &str = "5.28";

/// Base URL of the public watch page.
pub const WATCH_PAGE_BASE_URL: &str = "https://vk.com/video";
