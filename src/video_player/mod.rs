// SPDX-License-Identifier: MPL-2.0
//! Playback control surface for an embedded video player.
//!
//! This module keeps the player chrome (progress bar, time labels, volume,
//! quality selector, fullscreen, suggestions) consistent with an opaque
//! [`MediaEngine`](crate::application::port::MediaEngine) in both directions.

pub mod controls;
pub mod drag;
pub mod fullscreen;
mod input;
pub mod keyboard;
pub mod load;
pub mod presentation;
pub mod quality;
pub mod seek;
mod state;
pub mod suggestions;

pub use controls::{ControlsVisibility, InactivityTimer};
pub use drag::{BarGeometry, DragSession, DragTarget};
pub use fullscreen::FullscreenAdapter;
pub use keyboard::{Direction, Key, KeyCommand};
pub use load::{LoadTicket, LoadToken};
pub use presentation::{Presentation, ProgressGeometry, ProgressTip, TimeLabelPlacement, VolumeIcon};
pub use quality::{QualityEntry, QualityMenu};
pub use seek::{with_start_hint, SeekCoordinator, SeekOutcome};
pub use state::{PlaybackController, PlayerEffect, Viewport};
pub use suggestions::{Suggestion, SuggestionsController};
