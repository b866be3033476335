// SPDX-License-Identifier: MPL-2.0
use crate::application::port::MetadataError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Metadata(MetadataError),
}

/// Failures surfaced to the viewer as an overlay (or, for layout, absorbed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The media engine cannot play MP4 at all; controls are disabled for good.
    UnsupportedPlaybackFormat,

    /// Metadata for the requested video could not be retrieved.
    MetadataFetchFailed(String),

    /// The media engine reported an error during playback.
    MediaEngineError(String),

    /// The suggestions container is smaller than a single cell.
    /// Logged, never shown: the grid falls back to 1x1.
    LayoutDegenerate,
}

impl PlaybackError {
    /// Text shown in the error overlay.
    pub fn overlay_text(&self) -> &'static str {
        match self {
            PlaybackError::UnsupportedPlaybackFormat => {
                "Your browser does not support html5 video :("
            }
            PlaybackError::MetadataFetchFailed(_)
            | PlaybackError::MediaEngineError(_)
            | PlaybackError::LayoutDegenerate => "Something went wrong :(",
        }
    }

    /// Returns true if the error can only be cleared by reloading the player.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlaybackError::UnsupportedPlaybackFormat)
    }

    /// Returns true if the next successful `play` clears this error.
    pub fn clears_on_play(&self) -> bool {
        matches!(
            self,
            PlaybackError::MetadataFetchFailed(_) | PlaybackError::MediaEngineError(_)
        )
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::UnsupportedPlaybackFormat => {
                write!(f, "Media engine cannot play video/mp4")
            }
            PlaybackError::MetadataFetchFailed(msg) => {
                write!(f, "Failed to fetch video metadata: {}", msg)
            }
            PlaybackError::MediaEngineError(msg) => write!(f, "Media engine error: {}", msg),
            PlaybackError::LayoutDegenerate => write!(f, "Container too small for suggestions"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Metadata(e) => write!(f, "Metadata Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MetadataError> for Error {
    fn from(err: MetadataError) -> Self {
        Error::Metadata(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn overlay_texts() {
        assert_eq!(
            PlaybackError::UnsupportedPlaybackFormat.overlay_text(),
            "Your browser does not support html5 video :("
        );
        assert_eq!(
            PlaybackError::MediaEngineError("decode".into()).overlay_text(),
            "Something went wrong :("
        );
        assert_eq!(
            PlaybackError::MetadataFetchFailed("timeout".into()).overlay_text(),
            "Something went wrong :("
        );
    }

    #[test]
    fn only_unsupported_format_is_fatal() {
        assert!(PlaybackError::UnsupportedPlaybackFormat.is_fatal());
        assert!(!PlaybackError::MediaEngineError(String::new()).is_fatal());
        assert!(!PlaybackError::UnsupportedPlaybackFormat.clears_on_play());
        assert!(PlaybackError::MetadataFetchFailed(String::new()).clears_on_play());
    }

    #[test]
    fn metadata_error_converts_into_error() {
        let err: Error = MetadataError::EmptyResponse.into();
        assert_eq!(format!("{}", err), "Metadata Error: No video in response");
    }
}
