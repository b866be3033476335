// SPDX-License-Identifier: MPL-2.0
//! Fullscreen toggle on top of the platform capability.

use crate::application::port::FullscreenPlatform;
use std::fmt;

/// Wraps the platform fullscreen API chosen at startup.
///
/// Without a supported platform the affordance is simply not offered.
#[derive(Default)]
pub struct FullscreenAdapter {
    platform: Option<Box<dyn FullscreenPlatform>>,
    active: bool,
}

impl fmt::Debug for FullscreenAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullscreenAdapter")
            .field("available", &self.is_available())
            .field("active", &self.active)
            .finish()
    }
}

impl FullscreenAdapter {
    #[must_use]
    pub fn new(platform: Box<dyn FullscreenPlatform>) -> Self {
        Self {
            platform: Some(platform),
            active: false,
        }
    }

    /// Adapter for hosts without fullscreen support.
    #[must_use]
    pub fn unsupported() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.platform.as_ref().is_some_and(|p| p.is_supported())
    }

    /// Enters or leaves fullscreen depending on the platform's current state.
    pub fn toggle(&mut self) {
        let Some(platform) = self.platform.as_mut() else {
            return;
        };
        if !platform.is_supported() {
            return;
        }
        if platform.is_fullscreen() {
            platform.exit();
        } else {
            platform.enter();
        }
    }

    /// Flips the presentation flag on a platform change notification.
    pub fn on_change(&mut self) {
        self.active = !self.active;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::fullscreen::NoFullscreen;
    use std::cell::Cell;
    use std::rc::Rc;

    struct MockPlatform {
        fullscreen: Rc<Cell<bool>>,
    }

    impl FullscreenPlatform for MockPlatform {
        fn is_supported(&self) -> bool {
            true
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }

        fn enter(&mut self) {
            self.fullscreen.set(true);
        }

        fn exit(&mut self) {
            self.fullscreen.set(false);
        }
    }

    #[test]
    fn toggle_enters_then_exits() {
        let state = Rc::new(Cell::new(false));
        let mut adapter = FullscreenAdapter::new(Box::new(MockPlatform {
            fullscreen: Rc::clone(&state),
        }));

        assert!(adapter.is_available());
        adapter.toggle();
        assert!(state.get());
        adapter.toggle();
        assert!(!state.get());
    }

    #[test]
    fn change_notifications_flip_active_flag() {
        let mut adapter = FullscreenAdapter::unsupported();
        adapter.on_change();
        assert!(adapter.is_active());
        adapter.on_change();
        assert!(!adapter.is_active());
    }

    #[test]
    fn unsupported_platform_is_not_offered() {
        let mut adapter = FullscreenAdapter::new(Box::new(NoFullscreen));
        assert!(!adapter.is_available());
        adapter.toggle();
        assert!(!FullscreenAdapter::unsupported().is_available());
    }
}
