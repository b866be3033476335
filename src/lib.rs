// SPDX-License-Identifier: MPL-2.0
//! `embed_player` is the control core of an embeddable video player.
//!
//! It drives an opaque media engine through the [`MediaEngine`] port and
//! keeps the player chrome consistent with it: readiness-aware seeking,
//! quality switching that preserves position, buffered-range display,
//! auto-hiding controls and the end-of-video suggestions grid.
//!
//! [`MediaEngine`]: application::port::MediaEngine

#![doc(html_root_url = "https://docs.rs/embed_player/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod video_player;

#[cfg(test)]
mod test_utils;
