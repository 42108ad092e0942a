use crate::grid::{Color, Palette};

use super::EditorState;

impl EditorState {
    /// Color to display for a cell.
    ///
    /// # Returns
    /// - `None` for empty cells, off-grid coordinates, and values that point
    ///   past the end of the active palette (left over from a palette switch)
    /// - `Some(Color)` otherwise
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        let value = self.grid.get(row, col)?;
        self.active_palette()?.color_for_cell(value)
    }

    /// Whether a cell holds a value the active palette cannot display.
    pub fn is_out_of_range(&self, row: usize, col: usize) -> bool {
        match self.grid.get(row, col) {
            Some(0) | None => false,
            Some(_) => self.color_at(row, col).is_none(),
        }
    }

    /// The selected color, if the index is valid for the active palette.
    pub fn active_color(&self) -> Option<Color> {
        self.active_palette()?.get(self.active_color_index)
    }

    /// One-line summary of the tool state for status displays.
    pub fn status_line(&self) -> String {
        let palette_len = self.active_palette().map_or(0, Palette::len);
        let color = self
            .active_color()
            .map_or_else(|| "none".to_string(), |c| c.to_hex());
        format!(
            "{size}x{size} | palette {} | color {}/{} ({}) | {}{}",
            self.active_palette_name,
            self.active_color_index + 1,
            palette_len,
            color,
            self.drawing_mode,
            if self.drag.is_active() { " | stroking" } else { "" },
            size = self.grid.size(),
        )
    }
}
