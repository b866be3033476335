// SPDX-License-Identifier: MPL-2.0
//! Readiness-aware seeking.
//!
//! An engine that has no data yet cannot accept a position. In that case
//! the seek is issued twice:
//!
//! 1. as a `#t=<secs>` fragment on the source URL, which some engines honor
//!    while loading, and
//! 2. as a deferred correction applied when the engine reports
//!    [`MediaEvent::LoadedMetadata`](crate::application::port::MediaEvent),
//!    for engines that ignore the fragment.
//!
//! Only the latest deferred seek of the current load is kept, so rapid
//! scrubbing converges on the last requested position.

use super::load::LoadToken;
use crate::application::port::MediaEngine;
use crate::domain::video::normalize_scale;
use url::Url;

/// How a seek request was carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekOutcome {
    /// The engine was ready and jumped directly.
    Direct { position_secs: f64 },
    /// The engine was not ready; the position was hinted and a correction
    /// is pending. `start_from` is the position to display meanwhile.
    Deferred { start_from: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DeferredSeek {
    token: LoadToken,
    progress: f64,
}

/// Coordinates seeks against the engine's readiness.
#[derive(Debug, Clone, Default)]
pub struct SeekCoordinator {
    pending: Option<DeferredSeek>,
}

impl SeekCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeks to `progress` (a fraction of the duration, clamped to `[0, 1]`).
    ///
    /// `duration_secs` is the descriptor duration, used for the fragment hint
    /// because the engine does not know its own duration before it is ready.
    pub fn request_seek<E: MediaEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        token: LoadToken,
        duration_secs: f64,
        progress: f64,
    ) -> SeekOutcome {
        let progress = normalize_scale(progress);

        if engine.ready_state().is_ready() {
            let duration = engine
                .duration()
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or(duration_secs);
            let position_secs = duration * progress;
            engine.set_current_time(position_secs);
            self.pending = None;
            return SeekOutcome::Direct { position_secs };
        }

        let start_from = duration_secs * progress;
        if let Some(source) = engine.source().map(|s| with_start_hint(s, start_from)) {
            engine.set_source(&source);
        }
        engine.load();
        engine.play();
        self.pending = Some(DeferredSeek { token, progress });
        log::debug!("Engine not ready, deferring seek to {start_from:.2}s");

        SeekOutcome::Deferred { start_from }
    }

    /// Applies the deferred correction once the engine knows its metadata.
    ///
    /// Returns the progress fraction that was applied, or `None` when there
    /// was nothing pending for `token`.
    pub fn on_metadata_loaded<E: MediaEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        token: LoadToken,
    ) -> Option<f64> {
        let pending = self.pending.take()?;
        if pending.token != token {
            log::debug!("Dropping deferred seek from a previous load");
            return None;
        }

        let Some(duration) = engine.duration().filter(|d| d.is_finite() && *d > 0.0) else {
            log::warn!("Metadata loaded without a duration, deferred seek skipped");
            return None;
        };
        engine.set_current_time(pending.progress * duration);
        engine.play();
        log::debug!(
            "Applied deferred seek to {:.2}s",
            pending.progress * duration
        );
        Some(pending.progress)
    }

    /// Returns true if a correction is waiting for the metadata signal.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending correction.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

/// Replaces the fragment of `source` with a `t=<secs>` start-time hint.
#[must_use]
pub fn with_start_hint(source: &str, secs: f64) -> String {
    let fragment = format!("t={secs}");
    match Url::parse(source) {
        Ok(mut url) => {
            url.set_fragment(Some(&fragment));
            url.into()
        }
        Err(_) => {
            let base = source.split('#').next().unwrap_or(source);
            format!("{base}#{fragment}")
        }
    }
}
