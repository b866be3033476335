// SPDX-License-Identifier: MPL-2.0
//! Media engine port definition.
//!
//! This module defines the [`MediaEngine`] trait: the small capability
//! surface of the black-box component that actually decodes and renders
//! video. The host forwards the engine's notifications to the controller
//! as [`MediaEvent`]s.
//!
//! # Design Notes
//!
//! - Commands never fail synchronously; failures arrive as [`MediaEvent::Error`]
//! - `duration()` is `None` until the engine knows it
//! - Setting a new source drops the engine back to [`ReadyState::HaveNothing`]

use crate::domain::video::TimeRange;

/// MIME type the player requires the engine to support.
pub const MP4_MIME_TYPE: &str = "video/mp4";

/// How much of the media the engine has available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ReadyState {
    /// No data; only a load-time fragment hint can position playback.
    #[default]
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

impl ReadyState {
    /// Returns true if the engine accepts a direct position set.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self != Self::HaveNothing
    }
}

/// Notifications emitted by the media engine.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// More media was buffered.
    Progress,
    /// Playback position advanced.
    TimeUpdate,
    Play,
    Pause,
    Seeking,
    Seeked,
    Ended,
    /// Fatal engine error with a diagnostic message.
    Error(String),
    VolumeChange,
    /// Duration and dimensions are known.
    LoadedMetadata,
    /// The frame at the current position is available.
    LoadedData,
}

/// Port for the media decode/render engine.
///
/// Implementations wrap a platform video element or native pipeline.
/// All methods are called from the single event-handling thread.
pub trait MediaEngine {
    /// Returns true if the engine can play the given MIME type.
    fn can_play_type(&self, mime: &str) -> bool;

    /// Currently assigned source URL.
    fn source(&self) -> Option<&str>;

    /// Assigns a new source URL (may carry a `#t=` fragment hint).
    fn set_source(&mut self, url: &str);

    /// Restarts resource selection for the current source.
    fn load(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Jumps to a position in seconds. Only effective when ready.
    fn set_current_time(&mut self, secs: f64);

    /// Media duration in seconds, if known.
    fn duration(&self) -> Option<f64>;

    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Buffered intervals, ordered and disjoint.
    fn buffered(&self) -> Vec<TimeRange>;

    /// Intervals actually played since the source was assigned.
    fn played(&self) -> Vec<TimeRange>;

    fn ready_state(&self) -> ReadyState;

    /// Sets or removes the poster image shown before the first frame.
    fn set_poster(&mut self, url: Option<&str>);
}
