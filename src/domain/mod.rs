// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure playback types and rules.
//!
//! This module contains value objects and business rules with no I/O and
//! no knowledge of the media engine or the host UI.
//!
//! # Modules
//!
//! - [`layout`]: Suggestions grid packing ([`GridLayout`](layout::GridLayout))
//! - [`video`]: Video playback types ([`PlayerPhase`](video::PlayerPhase),
//!   [`Volume`](video::Volume), [`VideoDescriptor`](video::VideoDescriptor),
//!   [`TimeRange`](video::TimeRange), [`format_time`](video::format_time))

pub mod layout;
pub mod video;
