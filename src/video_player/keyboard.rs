// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts.

/// Keys the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Maps a DOM-style key code; unknown codes are not handled.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            32 => Some(Self::Space),
            37 => Some(Self::ArrowLeft),
            38 => Some(Self::ArrowUp),
            39 => Some(Self::ArrowRight),
            40 => Some(Self::ArrowDown),
            _ => None,
        }
    }

    #[must_use]
    pub fn command(self) -> KeyCommand {
        match self {
            Self::Space => KeyCommand::TogglePlay,
            Self::ArrowUp => KeyCommand::Volume(Direction::Forward),
            Self::ArrowDown => KeyCommand::Volume(Direction::Backward),
            Self::ArrowRight => KeyCommand::Seek(Direction::Forward),
            Self::ArrowLeft => KeyCommand::Seek(Direction::Backward),
        }
    }
}

/// Sign of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlay,
    /// One volume step up or down.
    Volume(Direction),
    /// One keyboard seek step forward or back.
    Seek(Direction),
}
