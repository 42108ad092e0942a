//! Dirty cell tracking for incremental rendering.
//!
//! Collects grid cells that need repainting between renders.

use std::collections::BTreeSet;

/// Tracks dirty cells accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    cells: BTreeSet<(usize, usize)>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire grid as dirty. Clears any accumulated cells.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.cells.clear();
    }

    /// Adds a dirty cell if the tracker is not already full.
    pub fn mark_cell(&mut self, row: usize, col: usize) {
        if self.force_full {
            return;
        }
        self.cells.insert((row, col));
    }

    pub fn is_clean(&self) -> bool {
        !self.force_full && self.cells.is_empty()
    }

    /// Drains the dirty cells gathered so far, in row-major order.
    ///
    /// When the full grid is marked, returns every cell of a `size x size`
    /// grid; otherwise returns the accumulated cells that lie inside it.
    pub fn take_cells(&mut self, size: usize) -> Vec<(usize, usize)> {
        if self.force_full {
            self.force_full = false;
            self.cells.clear();
            (0..size)
                .flat_map(|row| (0..size).map(move |col| (row, col)))
                .collect()
        } else {
            std::mem::take(&mut self.cells)
                .into_iter()
                .filter(|&(row, col)| row < size && col < size)
                .collect()
        }
    }
}
