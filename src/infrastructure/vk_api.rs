// SPDX-License-Identifier: MPL-2.0
//! Metadata client for the hosting service's `video.get` method.
//!
//! The request is a plain HTTPS GET; the JSON envelope carries either a
//! `response` object (`items`, `profiles`, `groups`) or an `error` object.

use crate::application::port::{MetadataError, MetadataSource};
use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_API_VERSION};
use crate::domain::video::{
    AuthorDescriptor, LoadedVideo, MediaId, QualityLabel, QualityLevels, VideoDescriptor,
};
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Prefix of the `files` keys holding progressive MP4 sources.
const MP4_FILE_PREFIX: &str = "mp4_";

const USER_PROFILE_BASE_URL: &str = "https://vk.com/id";
const GROUP_PROFILE_BASE_URL: &str = "https://vk.com/club";

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct Envelope {
    response: Option<VideoGetResponse>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

#[derive(Debug, Deserialize)]
struct VideoGetResponse {
    #[serde(default)]
    items: Vec<RawVideo>,
    #[serde(default)]
    profiles: Vec<RawProfile>,
    #[serde(default)]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    id: i64,
    owner_id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    duration: f64,
    photo_130: Option<String>,
    photo_320: Option<String>,
    photo_640: Option<String>,
    #[serde(default)]
    files: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    id: i64,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    id: i64,
    #[serde(default)]
    name: String,
}

impl RawVideo {
    fn poster(&self) -> Option<String> {
        [&self.photo_640, &self.photo_320, &self.photo_130]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .cloned()
    }

    fn quality_levels(&self) -> QualityLevels {
        let mut levels = QualityLevels::new();
        for (key, value) in &self.files {
            let Some(label) = key
                .strip_prefix(MP4_FILE_PREFIX)
                .and_then(QualityLabel::from_label)
            else {
                continue;
            };
            let Some(raw_url) = value.as_str() else {
                continue;
            };
            match Url::parse(raw_url) {
                Ok(url) => levels.insert(label, url.as_str()),
                Err(err) => log::warn!("Skipping {key} source {raw_url:?}: {err}"),
            }
        }
        levels
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Decodes a `video.get` response body.
///
/// The first item is the requested video. Author resolution prefers the
/// first profile, then the first group.
///
/// # Errors
///
/// Returns [`MetadataError::Api`] for an error envelope,
/// [`MetadataError::Malformed`] for undecodable JSON and
/// [`MetadataError::EmptyResponse`] when no item is listed.
pub fn parse_video_get(body: &str) -> Result<LoadedVideo, MetadataError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| MetadataError::Malformed(e.to_string()))?;

    if let Some(err) = envelope.error {
        return Err(MetadataError::Api {
            code: err.error_code,
            message: err.error_msg,
        });
    }

    let response = envelope
        .response
        .ok_or_else(|| MetadataError::Malformed("missing response".to_string()))?;

    let raw = response
        .items
        .into_iter()
        .next()
        .ok_or(MetadataError::EmptyResponse)?;

    let author = response
        .profiles
        .into_iter()
        .next()
        .map(|p| AuthorDescriptor {
            name: format!("{} {}", p.first_name, p.last_name).trim().to_string(),
            profile_url: format!("{USER_PROFILE_BASE_URL}{}", p.id),
            is_group: false,
        })
        .or_else(|| {
            response.groups.into_iter().next().map(|g| AuthorDescriptor {
                name: g.name,
                profile_url: format!("{GROUP_PROFILE_BASE_URL}{}", g.id),
                is_group: true,
            })
        });

    let video = VideoDescriptor {
        media_id: MediaId::new(raw.owner_id, raw.id),
        poster_url: raw.poster(),
        quality_levels: raw.quality_levels(),
        duration_secs: raw.duration.max(0.0),
        title: raw.title,
    };

    Ok(LoadedVideo { video, author })
}

// =============================================================================
// Client
// =============================================================================

/// HTTP client for `video.get`.
#[derive(Debug, Clone)]
pub struct VkApiClient {
    http: reqwest::Client,
    base_url: Url,
    version: String,
    access_token: Option<String>,
}

impl VkApiClient {
    /// Creates a client against the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Transport`] if the HTTP client cannot be built.
    pub fn new(version: Option<&str>, access_token: Option<&str>) -> Result<Self, MetadataError> {
        let base_url =
            Url::parse(DEFAULT_API_BASE_URL).map_err(|e| MetadataError::Transport(e.to_string()))?;
        Self::with_base_url(base_url, version, access_token)
    }

    /// Creates a client against an arbitrary endpoint root (ending in `/`).
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Transport`] if the HTTP client cannot be built.
    pub fn with_base_url(
        base_url: Url,
        version: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Self, MetadataError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("EmbedPlayer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MetadataError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            version: version.unwrap_or(DEFAULT_API_VERSION).to_string(),
            access_token: access_token
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        })
    }

    /// Builds the request URL for `media_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Transport`] if the base URL cannot be extended.
    pub fn request_url(&self, media_id: MediaId) -> Result<Url, MetadataError> {
        let mut url = self
            .base_url
            .join("video.get")
            .map_err(|e| MetadataError::Transport(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("videos", &media_id.to_string())
                .append_pair("extended", "1")
                .append_pair("v", &self.version);
            if let Some(token) = &self.access_token {
                query.append_pair("access_token", token);
            }
        }
        Ok(url)
    }

    async fn fetch_body(&self, url: Url) -> Result<String, MetadataError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MetadataError::Transport(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| MetadataError::Transport(e.to_string()))
    }
}

impl MetadataSource for VkApiClient {
    async fn fetch(&self, media_id: MediaId) -> Result<LoadedVideo, MetadataError> {
        let url = self.request_url(media_id)?;
        log::debug!("Requesting metadata for {media_id}");
        let body = self.fetch_body(url).await?;
        parse_video_get(&body)
    }
}
