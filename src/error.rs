//! Errors raised by the grid painting engine.

use thiserror::Error;

/// Errors that can occur when reconfiguring or loading the editor.
///
/// Painting never fails: off-grid coordinates are ignored and out-of-range
/// cell values are tolerated, so only tool selection and grid lifecycle
/// operations report errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A snapshot's declared size does not match its actual rows/columns.
    #[error(
        "grid shape mismatch: declared {declared}x{declared}, found {rows} rows (first bad row: {bad_row:?})"
    )]
    ShapeMismatch {
        declared: usize,
        rows: usize,
        bad_row: Option<usize>,
    },

    /// The requested color index is outside the active palette.
    #[error("color index {index} is out of range for palette '{palette}' ({len} colors)")]
    InvalidColorIndex {
        index: usize,
        palette: String,
        len: usize,
    },

    /// No palette with this name is configured.
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),

    /// The requested grid size is not one of the configured sizes.
    #[error("grid size {size} is not supported (allowed: {allowed:?})")]
    UnsupportedGridSize { size: usize, allowed: Vec<usize> },

    /// A grid must have at least one cell.
    #[error("grid size must be at least 1")]
    InvalidGridSize,
}
