// SPDX-License-Identifier: MPL-2.0
//! Control bar auto-hide.
//!
//! The host polls with the current [`Instant`]; nothing here reads the clock.

use std::time::{Duration, Instant};

/// One-shot inactivity timer.
///
/// Arming an armed timer restarts it; cancelling an idle timer is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl InactivityTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Visibility of the control bar and the pointer cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsVisibility {
    hidden: bool,
    timer: InactivityTimer,
}

impl ControlsVisibility {
    #[must_use]
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            hidden: false,
            timer: InactivityTimer::new(hide_delay),
        }
    }

    /// Shows the controls and cancels a pending auto-hide.
    pub fn show(&mut self) {
        self.hidden = false;
        self.timer.cancel();
    }

    pub fn hide(&mut self) {
        self.hidden = true;
        self.timer.cancel();
    }

    /// (Re)starts the auto-hide countdown.
    pub fn arm(&mut self, now: Instant) {
        self.timer.arm(now);
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Hides the controls if the countdown elapsed. Returns true if it did.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.hidden = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The cursor follows the controls.
    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn timer(&self) -> &InactivityTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(3);

    #[test]
    fn timer_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = InactivityTimer::new(DELAY);
        timer.arm(start);

        assert!(!timer.poll(start + Duration::from_millis(2999)));
        assert!(timer.poll(start + DELAY));
        assert!(!timer.poll(start + DELAY * 2));
    }

    #[test]
    fn rearming_pushes_deadline() {
        let start = Instant::now();
        let mut timer = InactivityTimer::new(DELAY);
        timer.arm(start);
        timer.arm(start + Duration::from_secs(2));

        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(timer.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = InactivityTimer::new(DELAY);
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.poll(Instant::now() + DELAY));
    }

    #[test]
    fn controls_hide_with_cursor_when_timer_elapses() {
        let start = Instant::now();
        let mut controls = ControlsVisibility::new(DELAY);
        controls.arm(start);

        assert!(controls.poll(start + DELAY));
        assert!(controls.is_hidden());
        assert!(controls.cursor_hidden());
    }

    #[test]
    fn show_cancels_pending_hide() {
        let start = Instant::now();
        let mut controls = ControlsVisibility::new(DELAY);
        controls.arm(start);
        controls.show();

        assert!(!controls.poll(start + DELAY));
        assert!(!controls.is_hidden());
    }
}
