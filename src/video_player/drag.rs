// SPDX-License-Identifier: MPL-2.0
//! Pointer drag gestures on the progress and volume bars.
//!
//! A [`DragSession`] is created on pointer-down and consumed on release.
//! Between the two, every pointer-move sample is mapped through the bar
//! geometry captured when the session started.

use crate::domain::video::normalize_scale;

/// Horizontal placement of a bar in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the bar under pointer position `x`, clamped to `[0, 1]`.
    ///
    /// A bar without width maps every position to `0.0`.
    #[must_use]
    pub fn fraction_at(&self, x: f64) -> f64 {
        if !(self.width > 0.0) {
            return 0.0;
        }
        normalize_scale((x - self.left) / self.width)
    }
}

/// Which bar a drag manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Progress,
    Volume,
}

/// Identity of one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragId(pub(crate) u64);

/// A drag gesture in progress.
#[derive(Debug, PartialEq)]
pub struct DragSession {
    id: DragId,
    target: DragTarget,
    bar: BarGeometry,
}

impl DragSession {
    pub(crate) fn new(id: DragId, target: DragTarget, bar: BarGeometry) -> Self {
        Self { id, target, bar }
    }

    #[must_use]
    pub fn id(&self) -> DragId {
        self.id
    }

    #[must_use]
    pub fn target(&self) -> DragTarget {
        self.target
    }

    #[must_use]
    pub fn fraction_at(&self, x: f64) -> f64 {
        self.bar.fraction_at(x)
    }
}
