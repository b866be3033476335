// SPDX-License-Identifier: MPL-2.0
//! Remote metadata port definition.
//!
//! One request is made per video load, keyed by the `ownerId_id` media id.
//! The response resolves to a [`LoadedVideo`]: the video descriptor plus
//! its author, if any. Retrying is the caller's business; the controller
//! never retries.

use crate::domain::video::{LoadedVideo, MediaId};
use std::fmt;
use std::future::Future;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur while retrieving video metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// The request did not complete (network, TLS, HTTP status).
    Transport(String),

    /// The endpoint answered with an error object.
    Api { code: i64, message: String },

    /// The response body could not be decoded.
    Malformed(String),

    /// The response listed no video for the requested id.
    EmptyResponse,
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Transport(msg) => write!(f, "Request failed: {msg}"),
            MetadataError::Api { code, message } => write!(f, "API error {code}: {message}"),
            MetadataError::Malformed(msg) => write!(f, "Malformed response: {msg}"),
            MetadataError::EmptyResponse => write!(f, "No video in response"),
        }
    }
}

impl std::error::Error for MetadataError {}

// =============================================================================
// MetadataSource Trait
// =============================================================================

/// Port for retrieving video descriptors.
pub trait MetadataSource {
    /// Fetches the descriptor and author for `media_id`.
    fn fetch(
        &self,
        media_id: MediaId,
    ) -> impl Future<Output = Result<LoadedVideo, MetadataError>>;
}
