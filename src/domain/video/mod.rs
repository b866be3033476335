// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod buffer;
pub mod descriptor;
pub mod newtypes;
pub mod playback;
pub mod time;

// Re-export commonly used types
pub use buffer::{enclosing_range, total_length, LoadedIndicator, TimeRange};
pub use descriptor::{
    AuthorDescriptor, LoadedVideo, MediaId, ParseMediaIdError, QualityLabel, QualityLevels,
    VideoDescriptor,
};
pub use newtypes::{normalize_scale, KeyboardSeekStep, Volume};
pub use playback::{PlaybackFlags, PlayerPhase};
pub use time::format_time;
