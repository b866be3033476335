// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that talk to the outside world.
//!
//! # Available Adapters
//!
//! - [`vk_api`]: Video metadata over HTTPS (implements [`MetadataSource`])
//!
//! Preference persistence lives in [`crate::app::persisted_state`] next to
//! the directory resolution it depends on.
//!
//! [`MetadataSource`]: crate::application::port::MetadataSource

pub mod vk_api;

pub use vk_api::{parse_video_get, VkApiClient};
