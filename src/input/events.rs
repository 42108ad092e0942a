//! Pointer events forwarded by the presentation layer.

/// Pointer input, already translated to grid cell coordinates.
///
/// Hosts map device coordinates with [`crate::util::cell_at`] before
/// forwarding. Releases must be forwarded no matter where they happen, and
/// leaving the document counts as a release, so that no stroke outlives its
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer pressed over a cell
    Down { row: usize, col: usize },
    /// Pointer moved onto (or within) a cell
    Enter { row: usize, col: usize },
    /// Pointer released anywhere in the document
    Up,
    /// Pointer left the document; treated as a release
    LeaveDocument,
}
