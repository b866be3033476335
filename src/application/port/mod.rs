// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that the host environment and
//! infrastructure adapters implement. These traits use only domain types,
//! keeping the playback controller independent of any concrete engine.
//!
//! # Available Ports
//!
//! - [`media_engine`]: The decode/render engine and its events
//! - [`metadata`]: Remote video metadata retrieval
//! - [`fullscreen`]: Platform fullscreen capability
//! - [`preferences`]: The persisted volume preference
//!
//! # Design Notes
//!
//! - The controller is single-threaded; ports are not required to be `Send`
//! - Engine commands are fire-and-forget; outcomes come back as [`MediaEvent`]s

pub mod fullscreen;
pub mod media_engine;
pub mod metadata;
pub mod preferences;

// Re-export main types for convenience
pub use fullscreen::{FullscreenPlatform, NoFullscreen};
pub use media_engine::{MediaEngine, MediaEvent, ReadyState, MP4_MIME_TYPE};
pub use metadata::{MetadataError, MetadataSource};
pub use preferences::{InMemoryPreferences, PreferenceStore};
