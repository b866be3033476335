// SPDX-License-Identifier: MPL-2.0
//! Persisted preference port.
//!
//! The player persists exactly one value across sessions: the volume.

use crate::domain::video::Volume;

/// Port for the persisted volume preference.
pub trait PreferenceStore {
    /// Last saved volume, if any.
    fn load_volume(&self) -> Option<Volume>;

    /// Records the current volume. Failures are handled by the store.
    fn save_volume(&mut self, volume: Volume);
}

/// Store that keeps the preference for the lifetime of the process only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryPreferences {
    volume: Option<Volume>,
}

impl InMemoryPreferences {
    #[must_use]
    pub fn with_volume(volume: Volume) -> Self {
        Self {
            volume: Some(volume),
        }
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn load_volume(&self) -> Option<Volume> {
        self.volume
    }

    fn save_volume(&mut self, volume: Volume) {
        self.volume = Some(volume);
    }
}
