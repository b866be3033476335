// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scripted media engine.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{MediaEngine, MediaEvent, ReadyState};
use crate::domain::video::TimeRange;

/// In-memory media engine that records state and queues the events a real
/// engine would emit. Tests drain them with [`FakeEngine::take_events`].
#[derive(Debug, Clone)]
pub struct FakeEngine {
    pub supports_mp4: bool,
    /// Start at the `#t=` fragment of the source when loading finishes.
    pub honors_fragment: bool,
    pub buffered: Vec<TimeRange>,
    pub played: Vec<TimeRange>,
    source: Option<String>,
    poster: Option<String>,
    ready: ReadyState,
    paused: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: f32,
    muted: bool,
    loads: usize,
    events: Vec<MediaEvent>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            supports_mp4: true,
            honors_fragment: false,
            buffered: Vec::new(),
            played: Vec::new(),
            source: None,
            poster: None,
            ready: ReadyState::HaveNothing,
            paused: true,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            muted: false,
            loads: 0,
            events: Vec::new(),
        }
    }
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn load_count(&self) -> usize {
        self.loads
    }

    pub fn poster(&self) -> Option<&str> {
        self.poster.as_deref()
    }

    /// Makes the engine ready with a known duration.
    pub fn finish_loading(&mut self, duration: f64) {
        self.duration = Some(duration);
        self.ready = ReadyState::HaveEnoughData;
        if self.honors_fragment {
            if let Some(start) = self.fragment_start() {
                self.current_time = start.clamp(0.0, duration);
            }
        }
        self.events.push(MediaEvent::LoadedMetadata);
        self.events.push(MediaEvent::LoadedData);
    }

    /// Plays from `from` to `to`, recording the played range.
    pub fn play_through(&mut self, from: f64, to: f64) {
        self.played.push(TimeRange::new(from, to));
        self.current_time = to;
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn fragment_start(&self) -> Option<f64> {
        let (_, fragment) = self.source.as_deref()?.split_once('#')?;
        fragment.strip_prefix("t=")?.parse().ok()
    }
}

impl MediaEngine for FakeEngine {
    fn can_play_type(&self, mime: &str) -> bool {
        self.supports_mp4 && mime == crate::application::port::MP4_MIME_TYPE
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.ready = ReadyState::HaveNothing;
        self.current_time = 0.0;
        self.duration = None;
        self.buffered.clear();
    }

    fn load(&mut self) {
        self.loads += 1;
    }

    fn play(&mut self) {
        if self.paused {
            self.paused = false;
            self.events.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        if !self.ready.is_ready() {
            return;
        }
        let end = self.duration.unwrap_or(f64::MAX);
        self.current_time = secs.clamp(0.0, end);
        self.events.push(MediaEvent::Seeking);
        self.events.push(MediaEvent::Seeked);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.events.push(MediaEvent::VolumeChange);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.events.push(MediaEvent::VolumeChange);
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.buffered.clone()
    }

    fn played(&self) -> Vec<TimeRange> {
        self.played.clone()
    }

    fn ready_state(&self) -> ReadyState {
        self.ready
    }

    fn set_poster(&mut self, url: Option<&str>) {
        self.poster = url.map(str::to_string);
    }
}
