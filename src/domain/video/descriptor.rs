// SPDX-License-Identifier: MPL-2.0
//! Immutable snapshots describing the loaded video and its author.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// MediaId
// =============================================================================

/// Identity of a video on the hosting service, rendered as `ownerId_id`.
///
/// Owner ids are negative for community-owned videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId {
    pub owner_id: i64,
    pub id: i64,
}

impl MediaId {
    #[must_use]
    pub fn new(owner_id: i64, id: i64) -> Self {
        Self { owner_id, id }
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.owner_id, self.id)
    }
}

/// Error returned when a string is not of the form `ownerId_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMediaIdError(pub String);

impl fmt::Display for ParseMediaIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid media id: {:?}", self.0)
    }
}

impl std::error::Error for ParseMediaIdError {}

impl FromStr for MediaId {
    type Err = ParseMediaIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMediaIdError(s.to_string());
        // Owner ids may carry a leading '-', so split on the last underscore.
        let (owner, id) = s.rsplit_once('_').ok_or_else(err)?;
        Ok(Self {
            owner_id: owner.parse().map_err(|_| err())?,
            id: id.parse().map_err(|_| err())?,
        })
    }
}

// =============================================================================
// Quality levels
// =============================================================================

/// Encoded resolution offered by the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityLabel {
    P720,
    P480,
    P360,
    P240,
}

impl QualityLabel {
    /// All labels, most preferred first.
    pub const PREFERENCE: [QualityLabel; 4] = [Self::P720, Self::P480, Self::P360, Self::P240];

    /// Label as shown in the quality selector.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P720 => "720",
            Self::P480 => "480",
            Self::P360 => "360",
            Self::P240 => "240",
        }
    }

    /// Parses a selector label such as `"480"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::PREFERENCE.into_iter().find(|q| q.as_str() == label)
    }

    fn rank(self) -> usize {
        Self::PREFERENCE
            .iter()
            .position(|q| *q == self)
            .unwrap_or(Self::PREFERENCE.len())
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of quality label to source URL, kept in preference order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QualityLevels {
    entries: Vec<(QualityLabel, String)>,
}

impl QualityLevels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the source for `label`, keeping preference order.
    pub fn insert(&mut self, label: QualityLabel, url: impl Into<String>) {
        let url = url.into();
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = url;
            return;
        }
        let at = self
            .entries
            .iter()
            .position(|(l, _)| l.rank() > label.rank())
            .unwrap_or(self.entries.len());
        self.entries.insert(at, (label, url));
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, label: QualityLabel, url: impl Into<String>) -> Self {
        self.insert(label, url);
        self
    }

    /// Source URL for `label`, if offered.
    #[must_use]
    pub fn get(&self, label: QualityLabel) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, url)| url.as_str())
    }

    /// Most preferred label present.
    #[must_use]
    pub fn preferred(&self) -> Option<QualityLabel> {
        self.entries.first().map(|(l, _)| *l)
    }

    /// Labels present, in preference order.
    pub fn labels(&self) -> impl Iterator<Item = QualityLabel> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Descriptors
// =============================================================================

/// Snapshot of the currently loaded video, replaced wholesale on each load.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDescriptor {
    pub media_id: MediaId,
    pub title: String,
    pub duration_secs: f64,
    pub poster_url: Option<String>,
    pub quality_levels: QualityLevels,
}

impl VideoDescriptor {
    /// Public watch page of this video on the hosting service.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{}{}", crate::config::WATCH_PAGE_BASE_URL, self.media_id)
    }
}

/// Owner of the video: a user profile or a community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDescriptor {
    pub name: String,
    pub profile_url: String,
    pub is_group: bool,
}

/// Result of one metadata request.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedVideo {
    pub video: VideoDescriptor,
    pub author: Option<AuthorDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_id_round_trips_through_display() {
        let id: MediaId = "-12345_678".parse().expect("valid id");
        assert_eq!(id, MediaId::new(-12345, 678));
        assert_eq!(id.to_string(), "-12345_678");
    }

    #[test]
    fn media_id_rejects_garbage() {
        assert!("12345".parse::<MediaId>().is_err());
        assert!("a_b".parse::<MediaId>().is_err());
        assert!("1_".parse::<MediaId>().is_err());
    }

    #[test]
    fn quality_levels_keep_preference_order() {
        let levels = QualityLevels::new()
            .with(QualityLabel::P240, "u240")
            .with(QualityLabel::P720, "u720")
            .with(QualityLabel::P360, "u360");

        let labels: Vec<_> = levels.labels().collect();
        assert_eq!(
            labels,
            vec![QualityLabel::P720, QualityLabel::P360, QualityLabel::P240]
        );
        assert_eq!(levels.preferred(), Some(QualityLabel::P720));
        assert_eq!(levels.get(QualityLabel::P360), Some("u360"));
        assert_eq!(levels.get(QualityLabel::P480), None);
    }

    #[test]
    fn quality_levels_replace_existing_label() {
        let levels = QualityLevels::new()
            .with(QualityLabel::P480, "old")
            .with(QualityLabel::P480, "new");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels.get(QualityLabel::P480), Some("new"));
    }

    #[test]
    fn quality_label_parses_selector_values() {
        assert_eq!(QualityLabel::from_label("480"), Some(QualityLabel::P480));
        assert_eq!(QualityLabel::from_label("1080"), None);
        assert_eq!(QualityLabel::P240.to_string(), "240");
    }

    #[test]
    fn watch_url_uses_media_id() {
        let video = VideoDescriptor {
            media_id: MediaId::new(1, 2),
            title: String::new(),
            duration_secs: 10.0,
            poster_url: None,
            quality_levels: QualityLevels::new(),
        };
        assert_eq!(video.watch_url(), "https://vk.com/video1_2");
    }
}
