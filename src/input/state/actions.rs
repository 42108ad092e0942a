use crate::error::EditorError;
use crate::grid::{Grid, GridSnapshot, Palette};
use crate::input::tool::DrawingMode;
use log::{debug, info, warn};

use super::{EditorState, StateChange};

impl EditorState {
    /// Selects the palette color used by the next stroke.
    ///
    /// Does not touch the grid.
    ///
    /// # Errors
    /// [`EditorError::InvalidColorIndex`] when `index` is beyond the active
    /// palette.
    pub fn set_active_color(&mut self, index: usize) -> Result<(), EditorError> {
        let len = self.active_palette().map_or(0, Palette::len);
        if index >= len {
            return Err(EditorError::InvalidColorIndex {
                index,
                palette: self.active_palette_name.clone(),
                len,
            });
        }

        if self.active_color_index != index {
            self.active_color_index = index;
            self.needs_redraw = true;
            self.notify(StateChange::ColorSelected { index });
        }
        Ok(())
    }

    /// Switches between normal and mirrored drawing.
    ///
    /// Applies to subsequent paints only; existing content is not mirrored.
    pub fn set_drawing_mode(&mut self, mode: DrawingMode) {
        if self.drawing_mode == mode {
            return;
        }
        self.drawing_mode = mode;
        self.needs_redraw = true;
        debug!("Drawing mode set to {mode}");
        self.notify(StateChange::DrawingModeChanged { mode });
    }

    /// Switches the active palette.
    ///
    /// Stored cell values are kept as they are, even when they now point past
    /// the end of the new palette, and the selected color index is not
    /// adjusted. Rendering treats such values as unknown until repainted.
    ///
    /// # Errors
    /// [`EditorError::UnknownPalette`] when no palette has this name; the
    /// editor is left unchanged.
    pub fn set_palette(&mut self, name: &str) -> Result<(), EditorError> {
        let Some(palette) = self.palettes.get(name) else {
            return Err(EditorError::UnknownPalette(name.to_string()));
        };

        if self.grid.max_value() as usize > palette.len() {
            warn!(
                "Palette '{name}' has {} colors; some painted cells now reference missing colors",
                palette.len()
            );
        }

        if self.active_palette_name != name {
            self.active_palette_name = name.to_string();
            self.dirty_tracker.mark_full();
            self.needs_redraw = true;
            info!("Switched to palette '{name}'");
            self.notify(StateChange::PaletteChanged {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Replaces the grid with an empty `size x size` grid.
    ///
    /// All content is discarded; nothing is scaled or cropped.
    ///
    /// # Errors
    /// [`EditorError::UnsupportedGridSize`] when `size` is not one of the
    /// configured sizes.
    pub fn resize_grid(&mut self, size: usize) -> Result<(), EditorError> {
        if !self.allowed_sizes.contains(&size) {
            return Err(EditorError::UnsupportedGridSize {
                size,
                allowed: self.allowed_sizes.clone(),
            });
        }

        self.replace_grid(Grid::new(size));
        info!("Grid resized to {size}x{size}");
        Ok(())
    }

    /// Erases every cell, keeping the current size.
    pub fn clear_all(&mut self) {
        let size = self.grid.size();
        self.replace_grid(Grid::new(size));
        debug!("Grid cleared");
    }

    /// Replaces the editor's grid and palette with a saved snapshot.
    ///
    /// A palette name that is not configured is kept as-is so the snapshot
    /// round-trips; rendering falls back to the default palette meanwhile.
    ///
    /// # Errors
    /// [`EditorError::ShapeMismatch`] (or [`EditorError::InvalidGridSize`])
    /// when the data does not match the declared size. Nothing is applied in
    /// that case.
    pub fn load_grid(&mut self, snapshot: GridSnapshot) -> Result<(), EditorError> {
        let GridSnapshot {
            grid_data,
            grid_size,
            palette_name,
        } = snapshot;
        let grid = Grid::from_rows(grid_size, grid_data)?;

        if !self.palettes.contains(&palette_name) {
            warn!("Drawing uses unknown palette '{palette_name}'; rendering with the default");
        }

        self.replace_grid(grid);
        if self.active_palette_name != palette_name {
            self.active_palette_name = palette_name.clone();
            self.notify(StateChange::PaletteChanged { name: palette_name });
        }
        info!(
            "Loaded {size}x{size} grid using palette '{}'",
            self.active_palette_name,
            size = grid_size
        );
        Ok(())
    }

    /// Returns an independent copy of the grid, its size and palette name.
    pub fn export_snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(&self.grid, &self.active_palette_name)
    }

    /// Swaps in a new grid, ending any open stroke.
    fn replace_grid(&mut self, grid: Grid) {
        self.end_stroke();
        let size = grid.size();
        self.grid = grid;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        self.notify(StateChange::GridReplaced { size });
    }
}
