// SPDX-License-Identifier: MPL-2.0
//! Playback controller.
//!
//! [`PlaybackController`] owns the media engine and every piece of player
//! state. The host feeds it three kinds of input:
//!
//! - engine notifications via [`handle_media_event`](PlaybackController::handle_media_event)
//! - user input (see the `input` methods: keys, drags, clicks, resize)
//! - the clock via [`tick`](PlaybackController::tick)
//!
//! After each call the host redraws from [`presentation`](PlaybackController::presentation)
//! and performs the drained [`PlayerEffect`]s.
//!
//! Lifecycle: `Idle → Loading` on [`begin_load`](PlaybackController::begin_load),
//! `Loading → Playing` on the first `play`, `Playing ↔ Paused`, any launched
//! phase `→ Ended` on completion, and `Ended → Loading` when a suggestion
//! is picked.

use super::controls::ControlsVisibility;
use super::drag::DragId;
use super::fullscreen::FullscreenAdapter;
use super::load::{LoadTicket, LoadToken};
use super::presentation::{Presentation, ProgressGeometry};
use super::quality::QualityMenu;
use super::seek::{SeekCoordinator, SeekOutcome};
use super::suggestions::SuggestionsController;
use crate::application::port::{
    MediaEngine, MediaEvent, MetadataError, PreferenceStore, MP4_MIME_TYPE,
};
use crate::config::{PlayerSettings, WATCHED_THRESHOLD_SECS};
use crate::domain::video::{
    format_time, total_length, AuthorDescriptor, LoadedIndicator, LoadedVideo, MediaId,
    PlaybackFlags, PlayerPhase, QualityLabel, VideoDescriptor, Volume,
};
use crate::error::PlaybackError;
use std::time::Instant;

/// Side effects the host performs on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEffect {
    /// Fetch metadata and hand the result to `complete_load`.
    FetchMetadata(LoadTicket),
    /// Open a URL in a new browsing context.
    OpenUrl(String),
    /// More than five seconds have been played (fires once per load).
    FiveSecondsPlayed,
}

/// Player container size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Top-level playback state machine.
pub struct PlaybackController<E: MediaEngine> {
    pub(super) engine: E,
    pub(super) fullscreen: FullscreenAdapter,
    pub(super) preferences: Box<dyn PreferenceStore>,
    pub(super) settings: PlayerSettings,

    pub(super) phase: PlayerPhase,
    pub(super) flags: PlaybackFlags,
    pub(super) token: LoadToken,
    pub(super) ticket: Option<LoadTicket>,
    pub(super) video: Option<VideoDescriptor>,
    pub(super) author: Option<AuthorDescriptor>,

    pub(super) seek: SeekCoordinator,
    pub(super) quality: QualityMenu,
    pub(super) suggestions: SuggestionsController,
    pub(super) controls: ControlsVisibility,

    pub(super) active_drag: Option<DragId>,
    pub(super) next_drag: u64,

    pub(super) geometry: ProgressGeometry,
    pub(super) viewport: Viewport,
    pub(super) view: Presentation,
    pub(super) error: Option<PlaybackError>,
    /// False for good once the engine turned out unable to play MP4.
    pub(super) enabled: bool,
    /// The loader waits for `loadeddata` rather than `seeked`.
    pub(super) loader_until_data: bool,
    pub(super) effects: Vec<PlayerEffect>,
}

impl<E: MediaEngine> PlaybackController<E> {
    /// Creates a controller around `engine`.
    ///
    /// The persisted volume (or the default) is applied immediately. An
    /// engine that cannot play MP4 leaves the controller permanently
    /// disabled with the unsupported-format overlay.
    pub fn new(
        mut engine: E,
        preferences: Box<dyn PreferenceStore>,
        fullscreen: FullscreenAdapter,
        settings: PlayerSettings,
    ) -> Self {
        let enabled = engine.can_play_type(MP4_MIME_TYPE);
        let volume = preferences.load_volume().unwrap_or_default();

        let mut view = Presentation {
            fullscreen_available: fullscreen.is_available(),
            ..Presentation::default()
        };
        view.update_volume(effective_volume(volume.value(), engine.is_muted()));

        let mut controller = Self {
            controls: ControlsVisibility::new(settings.controls_hide_delay),
            engine,
            fullscreen,
            preferences,
            settings,
            phase: PlayerPhase::Idle,
            flags: PlaybackFlags::default(),
            token: LoadToken::default(),
            ticket: None,
            video: None,
            author: None,
            seek: SeekCoordinator::new(),
            quality: QualityMenu::default(),
            suggestions: SuggestionsController::new(),
            active_drag: None,
            next_drag: 0,
            geometry: ProgressGeometry::default(),
            viewport: Viewport::default(),
            view,
            error: None,
            enabled,
            loader_until_data: false,
            effects: Vec::new(),
        };

        if enabled {
            controller.engine.set_volume(volume.value());
        } else {
            log::warn!("Media engine cannot play {MP4_MIME_TYPE}, controls disabled");
            controller.show_error(PlaybackError::UnsupportedPlaybackFormat);
        }
        controller
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct engine access for the host's own wiring.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn flags(&self) -> &PlaybackFlags {
        &self.flags
    }

    pub fn presentation(&self) -> &Presentation {
        &self.view
    }

    pub fn quality_menu(&self) -> &QualityMenu {
        &self.quality
    }

    pub fn suggestions(&self) -> &SuggestionsController {
        &self.suggestions
    }

    pub fn video(&self) -> Option<&VideoDescriptor> {
        self.video.as_ref()
    }

    pub fn author(&self) -> Option<&AuthorDescriptor> {
        self.author.as_ref()
    }

    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    /// Returns false once the engine was found unable to play MP4.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn controls_hidden(&self) -> bool {
        self.controls.is_hidden()
    }

    pub fn cursor_hidden(&self) -> bool {
        self.controls.cursor_hidden()
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn current_token(&self) -> LoadToken {
        self.token
    }

    /// Drains the pending side effects.
    pub fn take_effects(&mut self) -> Vec<PlayerEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Position the player considers current: the engine's once it is
    /// ready, the requested start position before that.
    pub fn position_secs(&self) -> f64 {
        if self.engine.ready_state().is_ready() {
            self.engine.current_time()
        } else {
            self.flags.start_from
        }
    }

    /// Duration as known by the engine, falling back to the descriptor.
    pub fn duration_secs(&self) -> f64 {
        self.engine
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
            .or_else(|| self.video.as_ref().map(|v| v.duration_secs))
            .unwrap_or(0.0)
    }

    // =========================================================================
    // Load lifecycle
    // =========================================================================

    /// Starts loading `media_id`.
    ///
    /// Everything tied to the previous video is reset and pending deferred
    /// seeks are dropped. Returns the ticket the host must fetch metadata
    /// for (also queued as [`PlayerEffect::FetchMetadata`]), or `None` when
    /// the controller is disabled.
    pub fn begin_load(&mut self, media_id: MediaId, autoplay: bool) -> Option<LoadTicket> {
        if !self.enabled {
            return None;
        }

        self.token = self.token.next();
        self.seek.reset();
        self.flags.reset_for_new_video();
        self.phase = PlayerPhase::Loading;
        self.loader_until_data = false;

        self.view.loaded = LoadedIndicator::Hidden;
        self.view.big_play_visible = true;
        self.update_position(0.0);

        let ticket = LoadTicket {
            token: self.token,
            media_id,
            autoplay,
        };
        self.ticket = Some(ticket);
        self.effects.push(PlayerEffect::FetchMetadata(ticket));
        log::info!("Loading video {media_id} (autoplay: {autoplay})");
        Some(ticket)
    }

    /// Applies the metadata response for `ticket`.
    ///
    /// Responses for anything but the most recent load are ignored.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<LoadedVideo, MetadataError>) {
        if ticket.token != self.token {
            log::debug!(
                "Ignoring metadata for {} from a superseded load",
                ticket.media_id
            );
            return;
        }
        self.ticket = None;

        let loaded = match result {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("Metadata for {} failed: {err}", ticket.media_id);
                self.view.big_play_visible = false;
                self.show_error(PlaybackError::MetadataFetchFailed(err.to_string()));
                return;
            }
        };

        let LoadedVideo { video, author } = loaded;
        self.view.title = video.title.clone();
        self.view.watch_url = Some(video.watch_url());
        self.view.author = author.clone();
        self.view.total_time_text = format_time(video.duration_secs);
        self.view.poster_url = video.poster_url.clone();
        self.engine.set_poster(video.poster_url.as_deref());
        self.quality.rebuild(&video.quality_levels);

        let preferred = video.quality_levels.preferred();
        self.video = Some(video);
        self.author = author;

        match preferred {
            Some(label) => self.switch_quality(label, true),
            None => log::warn!("Video {} offers no MP4 source", ticket.media_id),
        }

        if ticket.autoplay {
            self.engine.load();
            self.engine.play();
            self.view.loader_visible = true;
            self.loader_until_data = true;
        }
    }

    /// Swaps the source to `label`, preserving position unless `initial`.
    pub(super) fn switch_quality(&mut self, label: QualityLabel, initial: bool) {
        let Some(video) = self.video.as_ref() else {
            return;
        };
        let Some(url) = video.quality_levels.get(label).map(str::to_string) else {
            log::warn!("Quality {label} is not offered, ignoring switch");
            return;
        };

        let position = if initial { 0.0 } else { self.position_secs() };
        let duration = self.duration_secs();

        self.engine.set_source(&url);
        if !initial {
            log::info!("Switching quality to {label} at {position:.2}s");
            let progress = if duration > 0.0 { position / duration } else { 0.0 };
            self.seek_to(progress);
        }

        self.quality.activate(label);
        self.view.quality_label = Some(label);
    }

    /// Seeks through the readiness-aware path and redraws the position.
    pub(super) fn seek_to(&mut self, progress: f64) {
        let Some(duration) = self.video.as_ref().map(|v| v.duration_secs) else {
            return;
        };

        match self
            .seek
            .request_seek(&mut self.engine, self.token, duration, progress)
        {
            SeekOutcome::Deferred { start_from } => {
                self.view.big_play_visible = false;
                self.flags.start_from = start_from;
            }
            SeekOutcome::Direct { .. } => {}
        }
        self.update_position(progress);
    }

    pub(super) fn update_position(&mut self, progress: f64) {
        let duration = self.duration_secs();
        self.view.update_position(progress, duration, &self.geometry);
    }

    pub(super) fn show_error(&mut self, error: PlaybackError) {
        if self.error.as_ref().is_some_and(PlaybackError::is_fatal) {
            return;
        }
        self.view.error_text = Some(error.overlay_text());
        self.error = Some(error);
    }

    fn clear_error(&mut self) {
        if self.error.as_ref().is_some_and(PlaybackError::clears_on_play) {
            self.error = None;
            self.view.error_text = None;
        }
    }

    // =========================================================================
    // Engine events
    // =========================================================================

    /// Reacts to one engine notification.
    pub fn handle_media_event(&mut self, event: MediaEvent, now: Instant) {
        if !self.enabled {
            return;
        }

        match event {
            MediaEvent::Progress => {
                self.view.loaded = LoadedIndicator::resolve(
                    &self.engine.buffered(),
                    self.engine.current_time(),
                    self.engine.duration().unwrap_or(0.0),
                );
            }
            MediaEvent::TimeUpdate => self.on_time_update(),
            MediaEvent::Play => self.on_play(now),
            MediaEvent::Pause => {
                self.phase = self.phase.on_pause();
                self.view.playing = false;
                self.controls.show();
            }
            MediaEvent::Seeking => self.view.loader_visible = true,
            MediaEvent::Seeked => {
                if !self.loader_until_data {
                    self.view.loader_visible = false;
                }
            }
            MediaEvent::Ended => {
                self.phase = self.phase.on_ended();
                self.view.playing = false;
                self.suggestions
                    .show(self.viewport.width, self.viewport.height);
            }
            MediaEvent::Error(message) => {
                if self.phase == PlayerPhase::Idle {
                    log::debug!("Ignoring media engine error before any load: {message}");
                    return;
                }
                log::error!("Media engine error: {message}");
                self.show_error(PlaybackError::MediaEngineError(message));
                self.view.loader_visible = false;
                self.loader_until_data = false;
                self.engine.pause();
            }
            MediaEvent::VolumeChange => {
                let volume = self.engine.volume();
                self.view
                    .update_volume(effective_volume(volume, self.engine.is_muted()));
                self.preferences.save_volume(Volume::new(volume));
            }
            MediaEvent::LoadedMetadata => {
                if let Some(progress) = self.seek.on_metadata_loaded(&mut self.engine, self.token) {
                    self.update_position(progress);
                }
            }
            MediaEvent::LoadedData => {
                if self.loader_until_data {
                    self.loader_until_data = false;
                    self.view.loader_visible = false;
                }
            }
        }
    }

    fn on_time_update(&mut self) {
        let duration = self.duration_secs();
        let progress = |secs: f64| if duration > 0.0 { secs / duration } else { 0.0 };

        if !self.engine.ready_state().is_ready() {
            self.update_position(progress(self.flags.start_from));
        } else if !self.flags.seeking {
            self.update_position(progress(self.engine.current_time()));
        }

        if !self.flags.five_seconds_played
            && total_length(&self.engine.played()) > WATCHED_THRESHOLD_SECS
        {
            self.flags.five_seconds_played = true;
            self.effects.push(PlayerEffect::FiveSecondsPlayed);
            log::info!("Five seconds played");
        }
    }

    fn on_play(&mut self, now: Instant) {
        if !self.flags.launched {
            self.flags.launched = true;
            self.view.big_play_visible = false;
            if !self.engine.ready_state().is_ready() {
                self.view.loader_visible = true;
                self.loader_until_data = true;
            }
        }
        self.phase = self.phase.on_play();
        self.engine.set_poster(None);
        self.view.poster_url = None;
        self.view.playing = true;
        self.clear_error();
        self.suggestions.hide();
        self.controls.arm(now);
    }

    /// Advances timers. Returns true if the controls were just hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controls.poll(now)
    }
}

fn effective_volume(volume: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        volume
    }
}
