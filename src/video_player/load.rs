// SPDX-License-Identifier: MPL-2.0
//! Load identity.
//!
//! Every video load gets a fresh [`LoadToken`]. Anything scoped to a load
//! (metadata responses, deferred seek corrections) carries the token it was
//! created under and is discarded once a newer load has started.

use crate::domain::video::MediaId;

/// Monotonic identity of one video load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoadToken(u64);

impl LoadToken {
    /// Token of the load following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A metadata request the host must perform and hand back via
/// `PlaybackController::complete_load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub token: LoadToken,
    pub media_id: MediaId,
    pub autoplay: bool,
}
