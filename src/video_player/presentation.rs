// SPDX-License-Identifier: MPL-2.0
//! Display model of the player chrome.
//!
//! Everything the host needs to draw the controls is kept here as plain
//! numbers and strings; the host owns the actual widgets.

use crate::config::{VOLUME_ICON_LOW_THRESHOLD, VOLUME_ICON_MID_THRESHOLD};
use crate::domain::video::{
    format_time, normalize_scale, AuthorDescriptor, LoadedIndicator, QualityLabel,
};

/// Measured widths needed to place the current-time label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressGeometry {
    pub bar_width: f64,
    pub current_label_width: f64,
    pub total_label_width: f64,
}

/// Position of the current-time label along the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeLabelPlacement {
    pub left_percent: f64,
    pub margin_left_px: f64,
}

impl TimeLabelPlacement {
    /// Centres the label on the played edge, pinning it to the start while
    /// it would overflow on the left and to the end (left of the total time
    /// label) while it would overlap the total time.
    #[must_use]
    pub fn resolve(progress: f64, geometry: &ProgressGeometry) -> Self {
        let progress = normalize_scale(progress);
        let half = geometry.current_label_width / 2.0;

        if !(geometry.bar_width > 0.0) || geometry.bar_width * progress < half {
            return Self::default();
        }
        if progress + (geometry.total_label_width + half) / geometry.bar_width > 1.0 {
            return Self {
                left_percent: 100.0,
                margin_left_px: -(geometry.current_label_width + geometry.total_label_width),
            };
        }
        Self {
            left_percent: 100.0 * progress,
            margin_left_px: -half,
        }
    }
}

/// Tooltip shown while hovering the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTip {
    pub text: String,
    pub left_percent: f64,
}

/// Volume button icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeIcon {
    None,
    Low,
    Mid,
    #[default]
    High,
}

impl VolumeIcon {
    /// Icon for an effective (mute-adjusted) level.
    #[must_use]
    pub fn for_level(level: f32) -> Self {
        if level <= 0.0 || level.is_nan() {
            Self::None
        } else if level < VOLUME_ICON_LOW_THRESHOLD {
            Self::Low
        } else if level < VOLUME_ICON_MID_THRESHOLD {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// Everything the host renders, recomputed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub current_time_text: String,
    pub total_time_text: String,
    pub played_percent: f64,
    pub time_label: TimeLabelPlacement,
    pub loaded: LoadedIndicator,
    pub tip: Option<ProgressTip>,

    pub volume_icon: VolumeIcon,
    pub volume_percent: f64,

    pub loader_visible: bool,
    pub big_play_visible: bool,
    pub poster_url: Option<String>,
    pub playing: bool,
    pub fullscreen: bool,
    pub fullscreen_available: bool,
    pub compact: bool,

    pub quality_label: Option<QualityLabel>,
    pub error_text: Option<&'static str>,

    pub title: String,
    pub watch_url: Option<String>,
    pub author: Option<AuthorDescriptor>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            current_time_text: format_time(0.0),
            total_time_text: format_time(0.0),
            played_percent: 0.0,
            time_label: TimeLabelPlacement::default(),
            loaded: LoadedIndicator::Hidden,
            tip: None,
            volume_icon: VolumeIcon::default(),
            volume_percent: 0.0,
            loader_visible: false,
            big_play_visible: true,
            poster_url: None,
            playing: false,
            fullscreen: false,
            fullscreen_available: false,
            compact: false,
            quality_label: None,
            error_text: None,
            title: String::new(),
            watch_url: None,
            author: None,
        }
    }
}

impl Presentation {
    /// Redraws the current-time label and played bar for `progress`.
    pub fn update_position(&mut self, progress: f64, duration_secs: f64, geometry: &ProgressGeometry) {
        let progress = normalize_scale(progress);
        self.current_time_text = format_time(duration_secs * progress);
        self.played_percent = 100.0 * progress;
        self.time_label = TimeLabelPlacement::resolve(progress, geometry);
    }

    /// Re-places the label after the measured widths changed.
    pub fn relayout_time_label(&mut self, geometry: &ProgressGeometry) {
        self.time_label = TimeLabelPlacement::resolve(self.played_percent / 100.0, geometry);
    }

    /// Updates the volume icon and filled bar for an effective level.
    pub fn update_volume(&mut self, level: f32) {
        self.volume_icon = VolumeIcon::for_level(level);
        self.volume_percent = 100.0 * f64::from(level.clamp(0.0, 1.0));
    }
}
