// SPDX-License-Identifier: MPL-2.0
//! End-of-video suggestions panel.
//!
//! The host supplies the candidate list; the panel shows as many entries as
//! the solved grid has cells.

use crate::domain::layout::GridLayout;
use crate::domain::video::MediaId;
use crate::error::PlaybackError;

/// A video offered once playback ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub media_id: MediaId,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: f64,
}

/// Visibility, layout and hit-testing of the suggestions grid.
#[derive(Debug, Clone, Default)]
pub struct SuggestionsController {
    items: Vec<Suggestion>,
    visible: bool,
    layout: Option<GridLayout>,
}

impl SuggestionsController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<Suggestion>) {
        self.items = items;
    }

    /// Shows the panel with a layout solved for the container size.
    pub fn show(&mut self, container_width: f64, container_height: f64) -> GridLayout {
        let layout = solve(container_width, container_height);
        self.layout = Some(layout);
        self.visible = true;
        log::debug!(
            "Showing suggestions in a {}x{} grid",
            layout.columns,
            layout.rows
        );
        layout
    }

    /// Re-solves the layout; ignored while hidden.
    pub fn resize(&mut self, container_width: f64, container_height: f64) {
        if self.visible {
            self.layout = Some(solve(container_width, container_height));
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Entries that fit in the current grid.
    #[must_use]
    pub fn visible_items(&self) -> &[Suggestion] {
        if !self.visible {
            return &[];
        }
        let cells = self.layout.map_or(0, |l| l.cells() as usize);
        &self.items[..cells.min(self.items.len())]
    }

    /// Media id of the clicked entry, if the panel shows one at `index`.
    #[must_use]
    pub fn click(&self, index: usize) -> Option<MediaId> {
        self.visible_items().get(index).map(|s| s.media_id)
    }
}

fn solve(container_width: f64, container_height: f64) -> GridLayout {
    let layout = GridLayout::solve_for_container(container_width, container_height);
    if layout.degenerate {
        log::warn!(
            "{} ({container_width}x{container_height}), using a 1x1 grid",
            PlaybackError::LayoutDegenerate
        );
    }
    layout
}
