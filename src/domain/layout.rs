// SPDX-License-Identifier: MPL-2.0
//! Grid packing for the end-of-video suggestions panel.
//!
//! The solver picks a column/row count for the available area, caps the
//! number of cells at twelve (keeping the grid close to 4:3), and decides
//! whether the grid box gets a fixed pixel size or fills the container.

use crate::config::{
    LARGE_CONTAINER_HEIGHT, LARGE_CONTAINER_WIDTH, LARGE_GRID_COLUMNS, LARGE_GRID_ROWS,
    MAX_SUGGESTION_CELLS, SUGGESTIONS_CHROME_HEIGHT, SUGGESTION_CELL_HEIGHT,
    SUGGESTION_CELL_WIDTH, SUGGESTION_MIN_CELL_HEIGHT, SUGGESTION_MIN_CELL_WIDTH,
};

/// Size of the grid box along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellExtent {
    /// Fixed size in pixels.
    Pixels(u32),
    /// Fill the container.
    Auto,
}

/// Result of packing the suggestions grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub box_width: CellExtent,
    pub box_height: CellExtent,
    /// The container cannot fit even one minimum-size cell.
    pub degenerate: bool,
}

impl GridLayout {
    /// Number of cells in the grid.
    #[must_use]
    pub fn cells(&self) -> u32 {
        self.columns * self.rows
    }

    /// Packs the grid for an area whose height already excludes the panel chrome.
    #[must_use]
    pub fn solve(width: f64, height: f64) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);

        let (columns, rows) = if width > LARGE_CONTAINER_WIDTH && height > LARGE_CONTAINER_HEIGHT {
            (LARGE_GRID_COLUMNS, LARGE_GRID_ROWS)
        } else {
            reduce(
                cell_count(width, SUGGESTION_MIN_CELL_WIDTH),
                cell_count(height, SUGGESTION_MIN_CELL_HEIGHT),
                width,
                height,
            )
        };

        let degenerate = width < SUGGESTION_MIN_CELL_WIDTH || height < SUGGESTION_MIN_CELL_HEIGHT;

        Self {
            columns,
            rows,
            box_width: extent(columns, SUGGESTION_CELL_WIDTH, width),
            box_height: extent(rows, SUGGESTION_CELL_HEIGHT, height),
            degenerate,
        }
    }

    /// Packs the grid for the full panel size, subtracting the header/footer bands.
    #[must_use]
    pub fn solve_for_container(container_width: f64, container_height: f64) -> Self {
        Self::solve(
            container_width,
            sanitize(container_height) - SUGGESTIONS_CHROME_HEIGHT,
        )
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Cells that fit along one axis, at least one and never more than the cap.
///
/// A single axis above the cap always gets trimmed down to it, so clamping
/// here does not change the reduced result.
fn cell_count(available: f64, min_cell: f64) -> u32 {
    ((available / min_cell).floor() as u32).clamp(1, MAX_SUGGESTION_CELLS)
}

/// Shrinks the grid until it has at most [`MAX_SUGGESTION_CELLS`] cells.
///
/// Every iteration removes one row or column and neither drops below one.
fn reduce(mut columns: u32, mut rows: u32, width: f64, height: f64) -> (u32, u32) {
    while columns * rows > MAX_SUGGESTION_CELLS {
        let drop_column = if rows == 1 {
            true
        } else if columns == 1 {
            false
        } else {
            rows <= columns && width * 0.75 < height
        };
        if drop_column {
            columns -= 1;
        } else {
            rows -= 1;
        }
    }
    (columns, rows)
}

fn extent(count: u32, cell: u32, available: f64) -> CellExtent {
    let size = count * cell;
    if f64::from(size) < available {
        CellExtent::Pixels(size)
    } else {
        CellExtent::Auto
    }
}
