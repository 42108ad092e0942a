//! Configuration type definitions.

use super::enums::GalleryStorageMode;
use crate::grid::{DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZES, DEFAULT_PALETTE};
use crate::input::DrawingMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Editor defaults applied when a new drawing is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Size of the grid for new drawings (should be one of `grid.allowed_sizes`)
    #[serde(default = "default_grid_size")]
    pub default_grid_size: usize,

    /// Palette selected at startup
    #[serde(default = "default_palette")]
    pub default_palette: String,

    /// Zero-based palette index selected at startup
    #[serde(default)]
    pub default_color_index: usize,

    /// Drawing mode at startup: "normal" or "mirror"
    #[serde(default)]
    pub default_mode: DrawingMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_grid_size: default_grid_size(),
            default_palette: default_palette(),
            default_color_index: 0,
            default_mode: DrawingMode::Normal,
        }
    }
}

/// Grid size options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Sizes offered by the size selector (each 1 - 128)
    #[serde(default = "default_allowed_sizes")]
    pub allowed_sizes: Vec<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            allowed_sizes: default_allowed_sizes(),
        }
    }
}

/// Drawing gallery storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GalleryConfig {
    /// Storage location: "auto", "config" or "custom"
    #[serde(default)]
    pub storage: GalleryStorageMode,

    /// Directory used when `storage = "custom"`; `~/` is expanded
    #[serde(default)]
    pub custom_directory: Option<String>,

    /// Keep the previous gallery file as `gallery.json.bak` (0 disables)
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,

    /// Maximum number of stored drawings; the oldest non-permanent drawing is
    /// evicted when full (0 = unlimited)
    #[serde(default)]
    pub max_drawings: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage: GalleryStorageMode::Auto,
            custom_directory: None,
            backup_retention: default_backup_retention(),
            max_drawings: 0,
        }
    }
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

fn default_palette() -> String {
    DEFAULT_PALETTE.to_string()
}

pub(super) fn default_allowed_sizes() -> Vec<usize> {
    DEFAULT_GRID_SIZES.to_vec()
}

fn default_backup_retention() -> usize {
    1
}
