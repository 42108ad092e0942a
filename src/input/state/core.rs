//! Editor state container and drag state machine.

use crate::config::Config;
use crate::grid::{
    DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZES, DEFAULT_PALETTE, DirtyTracker, Grid, Palette,
    PaletteSet,
};
use crate::input::tool::{DrawingMode, StrokeMode};
use log::warn;
use std::fmt;

/// Per-gesture drag state.
///
/// `Idle → Stroking → Idle`. The stroke mode is decided when the stroke
/// begins and never changes until it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer button held over the grid
    #[default]
    Idle,
    /// A stroke is in progress
    Stroking {
        /// Whether the stroke paints or erases
        mode: StrokeMode,
    },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Stroking { .. })
    }

    pub fn mode(&self) -> Option<StrokeMode> {
        match self {
            Self::Stroking { mode } => Some(*mode),
            Self::Idle => None,
        }
    }
}

/// Notification delivered to the observer after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Individual cells changed value
    CellsPainted { cells: Vec<(usize, usize)> },
    /// The whole grid was replaced (resize, clear or load)
    GridReplaced { size: usize },
    /// A different palette color was selected
    ColorSelected { index: usize },
    /// The drawing mode changed
    DrawingModeChanged { mode: DrawingMode },
    /// The active palette changed
    PaletteChanged { name: String },
}

/// Callback invoked with every [`StateChange`].
pub type Observer = Box<dyn FnMut(&StateChange)>;

/// The grid painting engine.
///
/// Owns the grid, the tool state (active color and drawing mode), the drag
/// state of the current gesture and the configured palettes/sizes. Everything
/// outside reads through accessors or snapshots; mutations only happen through
/// the operations defined on this type.
pub struct EditorState {
    pub(super) grid: Grid,
    pub(super) palettes: PaletteSet,
    pub(super) allowed_sizes: Vec<usize>,
    pub(super) active_palette_name: String,
    pub(super) active_color_index: usize,
    pub(super) drawing_mode: DrawingMode,
    pub(super) drag: DragState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Tracks dirty cells between renders
    pub(super) dirty_tracker: DirtyTracker,
    observer: Option<Observer>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_defaults(
            PaletteSet::builtin(),
            DEFAULT_GRID_SIZES.to_vec(),
            DEFAULT_GRID_SIZE,
            DEFAULT_PALETTE,
            0,
            DrawingMode::Normal,
        )
    }
}

impl fmt::Debug for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorState")
            .field("grid_size", &self.grid.size())
            .field("active_palette_name", &self.active_palette_name)
            .field("active_color_index", &self.active_color_index)
            .field("drawing_mode", &self.drawing_mode)
            .field("drag", &self.drag)
            .field("needs_redraw", &self.needs_redraw)
            .finish_non_exhaustive()
    }
}

impl EditorState {
    /// Creates an editor with an empty grid.
    ///
    /// Inputs are expected to be validated already (see
    /// [`Config`]); anything unusable falls back to a default with a warning
    /// instead of failing.
    ///
    /// # Arguments
    /// * `palettes` - Available palettes
    /// * `allowed_sizes` - Sizes accepted by [`EditorState::resize_grid`]
    /// * `grid_size` - Size of the initial grid
    /// * `palette_name` - Initially active palette
    /// * `color_index` - Initially selected palette index
    /// * `drawing_mode` - Initial drawing mode
    pub fn with_defaults(
        palettes: PaletteSet,
        allowed_sizes: Vec<usize>,
        grid_size: usize,
        palette_name: &str,
        color_index: usize,
        drawing_mode: DrawingMode,
    ) -> Self {
        let allowed_sizes = if allowed_sizes.is_empty() {
            DEFAULT_GRID_SIZES.to_vec()
        } else {
            allowed_sizes
        };

        let active_palette_name = if palettes.contains(palette_name) {
            palette_name.to_string()
        } else {
            let fallback = palettes
                .resolve(palette_name)
                .map_or(DEFAULT_PALETTE, Palette::name)
                .to_string();
            warn!("Unknown palette '{palette_name}', using '{fallback}'");
            fallback
        };

        let palette_len = palettes.get(&active_palette_name).map_or(0, Palette::len);
        let active_color_index = if color_index < palette_len {
            color_index
        } else {
            warn!(
                "Color index {color_index} out of range for palette '{active_palette_name}', using 0"
            );
            0
        };

        Self {
            grid: Grid::new(grid_size),
            palettes,
            allowed_sizes,
            active_palette_name,
            active_color_index,
            drawing_mode,
            drag: DragState::Idle,
            needs_redraw: true,
            dirty_tracker: DirtyTracker::new(),
            observer: None,
        }
    }

    /// Creates an editor from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.palette_set(),
            config.grid.allowed_sizes.clone(),
            config.editor.default_grid_size,
            &config.editor.default_palette,
            config.editor.default_color_index,
            config.editor.default_mode,
        )
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn active_palette_name(&self) -> &str {
        &self.active_palette_name
    }

    /// The palette used to render the grid.
    ///
    /// Unknown names (from drawings saved with palettes that are no longer
    /// configured) resolve to the default palette.
    pub fn active_palette(&self) -> Option<&Palette> {
        self.palettes.resolve(&self.active_palette_name)
    }

    pub fn palettes(&self) -> &PaletteSet {
        &self.palettes
    }

    pub fn allowed_sizes(&self) -> &[usize] {
        &self.allowed_sizes
    }

    pub fn active_color_index(&self) -> usize {
        self.active_color_index
    }

    pub fn drawing_mode(&self) -> DrawingMode {
        self.drawing_mode
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_stroking(&self) -> bool {
        self.drag.is_active()
    }

    /// Registers the callback that receives every [`StateChange`].
    ///
    /// Replaces any previously registered observer.
    pub fn set_observer(&mut self, observer: impl FnMut(&StateChange) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Drains the cells that changed since the last call, in row-major order.
    pub fn take_dirty_cells(&mut self) -> Vec<(usize, usize)> {
        let size = self.grid.size();
        self.dirty_tracker.take_cells(size)
    }

    /// Cell value written by an `Add` stroke with the current color.
    pub(super) fn active_cell_value(&self) -> u32 {
        u32::try_from(self.active_color_index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .unwrap_or(u32::MAX)
    }

    pub(super) fn notify(&mut self, change: StateChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&change);
        }
    }
}
