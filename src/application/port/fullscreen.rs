// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability port.
//!
//! Platforms expose fullscreen under different names; the host picks one
//! implementation at startup and the player only sees this trait.

/// Port for the platform fullscreen API.
pub trait FullscreenPlatform {
    /// Returns true if the platform can enter fullscreen at all.
    fn is_supported(&self) -> bool;

    /// Returns true if the player is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Requests fullscreen for the player. Failures are not reported.
    fn enter(&mut self);

    /// Leaves fullscreen. Failures are not reported.
    fn exit(&mut self);
}

/// Platform without any fullscreen support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFullscreen;

impl FullscreenPlatform for NoFullscreen {
    fn is_supported(&self) -> bool {
        false
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn enter(&mut self) {}

    fn exit(&mut self) {}
}
