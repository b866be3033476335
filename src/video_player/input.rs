// SPDX-License-Identifier: MPL-2.0
//! User input handling for [`PlaybackController`].
//!
//! Every entry point is a no-op once the controller is disabled.

use super::drag::{BarGeometry, DragId, DragSession, DragTarget};
use super::keyboard::{Direction, Key, KeyCommand};
use super::load::LoadTicket;
use super::presentation::{ProgressGeometry, ProgressTip};
use super::state::{PlaybackController, PlayerEffect, Viewport};
use super::suggestions::Suggestion;
use crate::application::port::MediaEngine;
use crate::config::COMPACT_PLAYER_WIDTH;
use crate::domain::video::{format_time, normalize_scale, QualityLabel, Volume};
use std::time::Instant;

impl<E: MediaEngine> PlaybackController<E> {
    /// Plays when paused, pauses when playing.
    pub fn toggle_play(&mut self) {
        if !self.enabled {
            return;
        }
        if self.engine.is_paused() {
            self.engine.play();
        } else {
            self.engine.pause();
        }
    }

    /// Seeks to a fraction of the duration.
    pub fn seek(&mut self, progress: f64) {
        if self.enabled {
            self.seek_to(progress);
        }
    }

    /// Sets the engine volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, level: f64) {
        if self.enabled {
            self.engine
                .set_volume(Volume::new(normalize_scale(level) as f32).value());
        }
    }

    pub fn toggle_mute(&mut self) {
        if self.enabled {
            let muted = self.engine.is_muted();
            self.engine.set_muted(!muted);
        }
    }

    /// Handles a shortcut. Returns true if the key was consumed.
    pub fn key(&mut self, key: Key) -> bool {
        if !self.enabled {
            return false;
        }
        match key.command() {
            KeyCommand::TogglePlay => self.toggle_play(),
            KeyCommand::Volume(direction) => {
                let current = Volume::new(self.engine.volume());
                let next = match direction {
                    Direction::Forward => current.increase(),
                    Direction::Backward => current.decrease(),
                };
                self.engine.set_volume(next.value());
            }
            KeyCommand::Seek(direction) => {
                let duration = self.duration_secs();
                if duration > 0.0 {
                    let step = self.settings.keyboard_seek_step.value() * direction.sign();
                    self.seek_to((self.position_secs() + step) / duration);
                }
            }
        }
        true
    }

    // =========================================================================
    // Drag gestures
    // =========================================================================

    /// Starts a drag on `target` at pointer position `x`.
    ///
    /// A progress drag marks the player as seeking until the session ends,
    /// so engine time updates do not fight the pointer. A volume drag
    /// unmutes first.
    pub fn begin_drag(
        &mut self,
        target: DragTarget,
        bar: BarGeometry,
        x: f64,
    ) -> Option<DragSession> {
        if !self.enabled {
            return None;
        }
        self.next_drag += 1;
        let session = DragSession::new(DragId(self.next_drag), target, bar);
        self.active_drag = Some(session.id());
        // Only the active session may hold the scrub flag.
        self.flags.seeking = target == DragTarget::Progress;

        match target {
            DragTarget::Progress => {
                self.view.tip = None;
                self.seek_to(session.fraction_at(x));
            }
            DragTarget::Volume => {
                self.engine.set_muted(false);
                self.set_volume(session.fraction_at(x));
            }
        }
        Some(session)
    }

    /// Pointer moved during `session`. Samples of a superseded session are ignored.
    pub fn drag_to(&mut self, session: &DragSession, x: f64) {
        if self.active_drag != Some(session.id()) {
            return;
        }
        self.apply_drag(session, x);
    }

    /// Pointer released; ends `session` wherever the pointer is.
    pub fn end_drag(&mut self, session: DragSession, x: f64) {
        if self.active_drag != Some(session.id()) {
            return;
        }
        self.active_drag = None;
        if session.target() == DragTarget::Progress {
            self.flags.seeking = false;
        }
        self.apply_drag(&session, x);
    }

    fn apply_drag(&mut self, session: &DragSession, x: f64) {
        let fraction = session.fraction_at(x);
        match session.target() {
            DragTarget::Progress => self.seek_to(fraction),
            DragTarget::Volume => self.set_volume(fraction),
        }
    }

    /// Returns true while a progress scrub is in progress.
    pub fn is_seeking(&self) -> bool {
        self.flags.seeking
    }

    // =========================================================================
    // Hover tip
    // =========================================================================

    /// Pointer hovers the progress bar at `x`.
    pub fn progress_hover(&mut self, bar: BarGeometry, x: f64) {
        if !self.enabled || self.flags.seeking {
            return;
        }
        let Some(duration) = self.video.as_ref().map(|v| v.duration_secs) else {
            return;
        };
        let fraction = bar.fraction_at(x);
        self.view.tip = Some(ProgressTip {
            text: format_time(duration * fraction),
            left_percent: 100.0 * fraction,
        });
    }

    pub fn progress_hover_end(&mut self) {
        self.view.tip = None;
    }

    // =========================================================================
    // Quality
    // =========================================================================

    /// Switches to `label`, keeping the playback position.
    pub fn select_quality(&mut self, label: QualityLabel) {
        if !self.enabled {
            return;
        }
        self.switch_quality(label, false);
        self.quality.close();
    }

    pub fn show_quality_menu(&mut self) {
        if self.enabled && self.video.is_some() {
            self.quality.open();
        }
    }

    pub fn hide_quality_menu(&mut self) {
        self.quality.close();
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    pub fn toggle_fullscreen(&mut self) {
        if self.enabled {
            self.fullscreen.toggle();
        }
    }

    /// The platform reported a fullscreen change.
    pub fn fullscreen_changed(&mut self) {
        self.fullscreen.on_change();
        self.view.fullscreen = self.fullscreen.is_active();
    }

    // =========================================================================
    // Control bar visibility
    // =========================================================================

    /// Pointer moved over the player.
    pub fn pointer_activity(&mut self, now: Instant) {
        self.controls.show();
        if !self.engine.is_paused() && !self.flags.seeking {
            self.controls.arm(now);
        }
    }

    /// Pointer entered the control bar itself.
    pub fn pointer_enter_controls(&mut self) {
        self.controls.cancel();
    }

    /// Pointer left the player.
    pub fn pointer_leave_player(&mut self) {
        if !self.engine.is_paused() && !self.flags.seeking {
            self.controls.hide();
        }
    }

    // =========================================================================
    // Layout and navigation
    // =========================================================================

    /// The player container was resized.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
        self.view.compact = width < COMPACT_PLAYER_WIDTH;

        if self.flags.launched {
            let duration = self.duration_secs();
            if duration > 0.0 {
                self.update_position(self.position_secs() / duration);
            }
        }
        self.suggestions.resize(width, height);
    }

    /// Measured widths of the progress bar and time labels changed.
    pub fn set_progress_geometry(&mut self, geometry: ProgressGeometry) {
        self.geometry = geometry;
        self.view.relayout_time_label(&geometry);
    }

    /// Replaces the list offered when playback ends.
    pub fn set_suggestions(&mut self, items: Vec<Suggestion>) {
        self.suggestions.set_items(items);
    }

    /// Loads the clicked suggestion with autoplay.
    pub fn click_suggestion(&mut self, index: usize) -> Option<LoadTicket> {
        if !self.enabled {
            return None;
        }
        let media_id = self.suggestions.click(index)?;
        self.begin_load(media_id, true)
    }

    /// Requests the video's page on the hosting service.
    pub fn open_watch_page(&mut self) {
        if let Some(url) = self.video.as_ref().map(|v| v.watch_url()) {
            self.effects.push(PlayerEffect::OpenUrl(url));
        }
    }
}
