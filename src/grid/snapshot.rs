//! Serializable grid state exchanged with the gallery.

use super::canvas::Grid;
use crate::error::EditorError;
use serde::{Deserialize, Serialize};

/// The `{grid_data, grid_size, palette_name}` triple used for save/load.
///
/// A snapshot owns its data: mutating it never affects the editor it was
/// exported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub grid_data: Vec<Vec<u32>>,
    pub grid_size: usize,
    pub palette_name: String,
}

impl GridSnapshot {
    pub fn new(grid: &Grid, palette_name: &str) -> Self {
        Self {
            grid_data: grid.to_rows(),
            grid_size: grid.size(),
            palette_name: palette_name.to_string(),
        }
    }

    /// Converts the snapshot into a grid, validating its shape.
    pub fn to_grid(&self) -> Result<Grid, EditorError> {
        Grid::from_rows(self.grid_size, self.grid_data.clone())
    }
}
