//! Grid data model: cells, palettes, snapshots.
//!
//! This module defines the core data types of a drawing:
//! - [`Grid`]: square matrix of palette indices (`0` = empty)
//! - [`Palette`] / [`PaletteSet`]: named color lists resolved by name
//! - [`GridSnapshot`]: the serializable triple exchanged with the gallery
//! - [`DirtyTracker`]: cells awaiting repaint

pub mod canvas;
pub mod color;
pub mod dirty;
pub mod palette;
pub mod snapshot;

pub use canvas::Grid;
pub use color::Color;
pub use dirty::DirtyTracker;
pub use palette::{DEFAULT_PALETTE, Palette, PaletteSet};
pub use snapshot::GridSnapshot;

/// Grid sizes offered when none are configured.
pub const DEFAULT_GRID_SIZES: [usize; 4] = [8, 16, 24, 32];

/// Grid size used for new drawings when none is configured.
pub const DEFAULT_GRID_SIZE: usize = 16;

/// Largest grid size accepted from configuration.
pub const MAX_GRID_SIZE: usize = 128;
