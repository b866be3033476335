// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use embed_player::application::port::{
    InMemoryPreferences, MediaEngine, MediaEvent, ReadyState, MP4_MIME_TYPE,
};
use embed_player::config::PlayerSettings;
use embed_player::domain::video::{
    AuthorDescriptor, LoadedVideo, MediaId, QualityLabel, QualityLevels, TimeRange,
    VideoDescriptor,
};
use embed_player::video_player::{FullscreenAdapter, PlaybackController};
use std::time::Instant;

/// Media engine double that behaves like a browser video element closely
/// enough for the controller: events are queued, readiness is scripted.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub honors_fragment: bool,
    pub played: Vec<TimeRange>,
    pub buffered: Vec<TimeRange>,
    pub source_history: Vec<String>,
    source: Option<String>,
    ready: bool,
    playing: bool,
    time: f64,
    duration: Option<f64>,
    volume: f32,
    muted: bool,
    queue: Vec<MediaEvent>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    /// Metadata and first frame are available.
    pub fn become_ready(&mut self, duration: f64) {
        self.ready = true;
        self.duration = Some(duration);
        if self.honors_fragment {
            let hinted = self
                .source
                .as_deref()
                .and_then(|s| s.split_once("#t="))
                .and_then(|(_, t)| t.parse::<f64>().ok());
            if let Some(start) = hinted {
                self.time = start;
            }
        }
        self.queue.push(MediaEvent::LoadedMetadata);
        self.queue.push(MediaEvent::LoadedData);
    }

    /// Playback advanced by `secs`.
    pub fn advance(&mut self, secs: f64) {
        let start = self.time;
        self.time += secs;
        self.played.push(TimeRange::new(start, self.time));
        self.queue.push(MediaEvent::TimeUpdate);
    }

    /// Playback reached the end of the media.
    pub fn finish(&mut self) {
        if let Some(duration) = self.duration {
            self.time = duration;
        }
        self.playing = false;
        self.queue.push(MediaEvent::Pause);
        self.queue.push(MediaEvent::Ended);
    }

    pub fn drain(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.queue)
    }
}

impl MediaEngine for ScriptedEngine {
    fn can_play_type(&self, mime: &str) -> bool {
        mime == MP4_MIME_TYPE
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.source_history.push(url.to_string());
        self.ready = false;
        self.time = 0.0;
        self.duration = None;
    }

    fn load(&mut self) {}

    fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.queue.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.queue.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        !self.playing
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, secs: f64) {
        if self.ready {
            self.time = secs;
            self.queue.push(MediaEvent::Seeking);
            self.queue.push(MediaEvent::Seeked);
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.queue.push(MediaEvent::VolumeChange);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.queue.push(MediaEvent::VolumeChange);
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.buffered.clone()
    }

    fn played(&self) -> Vec<TimeRange> {
        self.played.clone()
    }

    fn ready_state(&self) -> ReadyState {
        if self.ready {
            ReadyState::HaveEnoughData
        } else {
            ReadyState::HaveNothing
        }
    }

    fn set_poster(&mut self, _url: Option<&str>) {}
}

pub type Player = PlaybackController<ScriptedEngine>;

pub fn player() -> Player {
    PlaybackController::new(
        ScriptedEngine::new(),
        Box::new(InMemoryPreferences::default()),
        FullscreenAdapter::unsupported(),
        PlayerSettings::default(),
    )
}

/// Delivers queued engine events until the engine goes quiet.
pub fn pump(player: &mut Player) {
    loop {
        let events = player.engine_mut().drain();
        if events.is_empty() {
            return;
        }
        for event in events {
            player.handle_media_event(event, Instant::now());
        }
    }
}

pub fn sample_video(media_id: MediaId, duration: f64) -> LoadedVideo {
    LoadedVideo {
        video: VideoDescriptor {
            media_id,
            title: format!("Video {media_id}"),
            duration_secs: duration,
            poster_url: None,
            quality_levels: QualityLevels::new()
                .with(QualityLabel::P720, format!("https://cdn.example/{media_id}.720.mp4"))
                .with(QualityLabel::P480, format!("https://cdn.example/{media_id}.480.mp4")),
        },
        author: Some(AuthorDescriptor {
            name: "Owner".to_string(),
            profile_url: "https://vk.com/id1".to_string(),
            is_group: false,
        }),
    }
}

/// Loads `media_id` with a 120 s sample video.
pub fn load(player: &mut Player, media_id: MediaId, autoplay: bool) {
    let ticket = player
        .begin_load(media_id, autoplay)
        .expect("controller enabled");
    player.complete_load(ticket, Ok(sample_video(media_id, 120.0)));
    pump(player);
}
