// SPDX-License-Identifier: MPL-2.0
//! Playback lifecycle phases and per-video flags.

/// Lifecycle phase of the current video.
///
/// - `Idle`: nothing requested yet
/// - `Loading`: metadata requested or received, not yet played
/// - `Playing` / `Paused`: launched, toggled by play/pause events
/// - `Ended`: playback completed, suggestions on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    #[default]
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
}

impl PlayerPhase {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true once the first play happened for the current video.
    #[must_use]
    pub fn is_launched(self) -> bool {
        matches!(self, Self::Playing | Self::Paused | Self::Ended)
    }

    /// Phase after the engine reported a successful `play`.
    #[must_use]
    pub fn on_play(self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            _ => Self::Playing,
        }
    }

    /// Phase after the engine reported `pause`.
    #[must_use]
    pub fn on_pause(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            other => other,
        }
    }

    /// Phase after the engine reported the end of the media.
    #[must_use]
    pub fn on_ended(self) -> Self {
        if self.is_launched() {
            Self::Ended
        } else {
            self
        }
    }
}

/// Mutable flags scoped to the current video.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackFlags {
    /// First play has been initiated for the current video.
    pub launched: bool,
    /// A pointer scrub is in progress; its position is authoritative.
    pub seeking: bool,
    /// One-shot latch: more than five seconds have been played.
    pub five_seconds_played: bool,
    /// Position shown (and seeked to) while the engine is not ready.
    pub start_from: f64,
}

impl PlaybackFlags {
    /// Resets everything tied to the previous video.
    ///
    /// A scrub in progress survives: its release still has to clear `seeking`.
    pub fn reset_for_new_video(&mut self) {
        *self = Self {
            seeking: self.seeking,
            ..Self::default()
        };
    }
}
